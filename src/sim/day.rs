use rand::{Rng, RngCore};

use super::context::SlotContext;
use super::generator::EventGenerator;
use super::pacing::PacingController;
use crate::config::ArenaConfig;
use crate::model::DayRecord;
use crate::roster::TributeRoster;

/// Drives a single day: sizes it, prices death, then fills slots.
pub struct DayScheduler<'a> {
    pacing: PacingController,
    generator: EventGenerator<'a>,
    total_tributes: usize,
    desired_days: u32,
}

impl<'a> DayScheduler<'a> {
    pub fn new(config: &'a ArenaConfig, total_tributes: usize) -> Self {
        let pacing = PacingController::new(config);
        Self {
            pacing,
            generator: EventGenerator::new(config),
            total_tributes,
            desired_days: pacing.desired_days(total_tributes),
        }
    }

    pub fn desired_days(&self) -> u32 {
        self.desired_days
    }

    /// Run `day` to completion. Stops early once one tribute is left.
    /// Wasted slots are not replaced.
    pub fn run_day(&self, day: u32, roster: &mut TributeRoster, rng: &mut dyn RngCore) -> DayRecord {
        let alive = roster.alive_count();
        let budget = self.pacing.determine_event_count(
            day,
            alive,
            self.total_tributes,
            self.desired_days,
            rng,
        );
        let pressure = self
            .pacing
            .compute_death_pressure(alive, day, budget, self.desired_days);
        let slot = SlotContext {
            day,
            lethal_chance: self.pacing.effective_lethal_chance(day, pressure),
        };

        let mut record = DayRecord::new(day);
        let mut wasted = 0usize;
        for _ in 0..budget {
            let living = roster.alive_indices();
            if living.len() <= 1 {
                break;
            }
            let actor = living[rng.random_range(0..living.len())];
            match self.generator.generate(actor, roster, slot, rng) {
                Some(event) => record.record(event),
                None => wasted += 1,
            }
        }
        record.survivors = roster.alive_names();

        tracing::debug!(
            day,
            budget,
            pressure,
            lethal_chance = slot.lethal_chance,
            events = record.events.len(),
            wasted,
            fallen = record.fallen.len(),
            survivors = record.survivors.len(),
            "day complete"
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::testutil::{names, quiet_config};

    #[test]
    fn first_day_is_bloodbath() {
        let config = ArenaConfig::default();
        let mut roster = TributeRoster::new(&names(12));
        let scheduler = DayScheduler::new(&config, roster.len());
        let mut rng = SmallRng::seed_from_u64(1);

        let day = scheduler.run_day(1, &mut roster, &mut rng);
        assert_eq!(day.number, 1);
        assert!(day.bloodbath);
        assert_eq!(day.survivors, roster.alive_names());
        assert_eq!(day.fallen.len() + day.survivors.len(), 12);
    }

    #[test]
    fn fallen_matches_roster_deaths() {
        let config = ArenaConfig::default();
        let mut roster = TributeRoster::new(&names(10));
        let scheduler = DayScheduler::new(&config, roster.len());
        let mut rng = SmallRng::seed_from_u64(77);

        let mut fallen = Vec::new();
        for n in 1..=3 {
            let day = scheduler.run_day(n, &mut roster, &mut rng);
            assert!(!day.bloodbath || n == 1);
            assert!(day.events.len() <= 12);
            fallen.extend(day.fallen);
        }
        let mut dead: Vec<String> = roster
            .into_tributes()
            .into_iter()
            .filter(|t| !t.alive)
            .map(|t| t.name)
            .collect();
        fallen.sort();
        dead.sort();
        assert_eq!(fallen, dead);
    }

    #[test]
    fn day_stops_when_one_remains() {
        let config = quiet_config(serde_json::json!({
            "lethal_event_chance": 1.0,
            "lethal_events": ["{killer} ends {victim}."],
            "bloodbath_min_events": 10,
            "bloodbath_max_events": 10
        }));
        let mut roster = TributeRoster::new(&names(2));
        let scheduler = DayScheduler::new(&config, roster.len());
        let mut rng = SmallRng::seed_from_u64(5);

        let day = scheduler.run_day(1, &mut roster, &mut rng);
        assert!(day.events.len() <= 2);
        assert!(roster.alive_count() >= 1);
        if roster.alive_count() == 1 {
            assert_eq!(day.fallen.len(), 1);
        }
    }

    #[test]
    fn desired_days_follow_roster_size() {
        let config = ArenaConfig::default();
        assert_eq!(DayScheduler::new(&config, 2).desired_days(), config.min_days);
        assert_eq!(DayScheduler::new(&config, 24).desired_days(), config.max_days);
    }
}
