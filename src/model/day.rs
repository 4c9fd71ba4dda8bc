use serde::{Deserialize, Serialize};

use super::event::Event;
use super::tribute::Tribute;

/// Everything that happened on one arena day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// 1-based, contiguous across a run.
    pub number: u32,
    pub bloodbath: bool,
    pub events: Vec<Event>,
    /// Tributes eliminated today, in order of death, without duplicates.
    pub fallen: Vec<String>,
    /// Tributes still alive when the day ended.
    pub survivors: Vec<String>,
}

impl DayRecord {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            bloodbath: number == 1,
            events: Vec::new(),
            fallen: Vec::new(),
            survivors: Vec::new(),
        }
    }

    /// Append an event and merge its victims into `fallen`.
    pub fn record(&mut self, event: Event) {
        for victim in event.victims() {
            if !self.fallen.contains(victim) {
                self.fallen.push(victim.clone());
            }
        }
        self.events.push(event);
    }
}

/// Output of a complete run, shaped for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub tributes: Vec<Tribute>,
    pub days: Vec<DayRecord>,
    pub winner: Option<String>,
}

impl SimulationResult {
    pub fn fallen(&self) -> impl Iterator<Item = &String> {
        self.days.iter().flat_map(|d| d.fallen.iter())
    }

    pub fn total_kills(&self) -> u32 {
        self.tributes.iter().map(|t| t.kills).sum()
    }
}
