//! Run-length control.
//!
//! The controller never forces an outcome. It estimates how many events a
//! day needs and scales the lethal probability so that, on average, the
//! roster is whittled down to one survivor inside `[min_days, max_days]`.

use rand::{Rng, RngCore};

use crate::config::ArenaConfig;

/// Roster size span over which the day target moves from `min_days` to `max_days`.
pub const PACING_WINDOW: f64 = 22.0;
pub const MIN_DEATH_PRESSURE: f64 = 0.6;
pub const MAX_DEATH_PRESSURE: f64 = 4.0;
pub const MIN_LETHAL_CHANCE: f64 = 0.05;
pub const MAX_LETHAL_CHANCE: f64 = 0.95;
/// Pressure escalates linearly after this day.
pub const LATE_GAME_DAY: u32 = 10;
pub const LATE_GAME_ESCALATION: f64 = 0.1;
/// Upper bound on a day's event count unless pacing demands more.
pub const SOFT_EVENT_CEILING: usize = 12;

const JITTER: [i64; 4] = [-1, 0, 0, 1];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingController {
    min_days: u32,
    max_days: u32,
    lethal_chance: f64,
    bloodbath_bonus: f64,
    min_events: u32,
    max_events: u32,
    bloodbath_min: u32,
    bloodbath_max: u32,
}

impl PacingController {
    pub fn new(config: &ArenaConfig) -> Self {
        Self {
            min_days: config.min_days,
            max_days: config.max_days,
            lethal_chance: config.lethal_event_chance,
            bloodbath_bonus: config.bloodbath_lethal_bonus,
            min_events: config.min_events_per_day,
            max_events: config.max_events_per_day,
            bloodbath_min: config.bloodbath_min_events,
            bloodbath_max: config.bloodbath_max_events,
        }
    }

    /// Target run length for a roster of `total_tributes`.
    pub fn desired_days(&self, total_tributes: usize) -> u32 {
        if total_tributes <= 1 || self.min_days == self.max_days {
            return self.min_days;
        }
        let ratio = ((total_tributes as f64 - 2.0) / PACING_WINDOW).clamp(0.0, 1.0);
        let span = self.max_days as f64 - self.min_days as f64;
        (self.min_days as f64 + ratio * span).round() as u32
    }

    /// Configured lethal chance for `day`, before pressure.
    pub fn day_lethal_chance(&self, day: u32) -> f64 {
        if day == 1 {
            self.lethal_chance + self.bloodbath_bonus
        } else {
            self.lethal_chance
        }
    }

    /// Events needed today to stay on pace for one survivor by `desired_days`.
    pub fn required_events_for_progress(
        &self,
        day: u32,
        alive_count: usize,
        desired_days: u32,
    ) -> usize {
        if alive_count <= 1 {
            return 0;
        }
        let kills_per_day = (alive_count - 1) as f64 / remaining_days(day, desired_days);
        let p = self.day_lethal_chance(day).clamp(0.1, 0.95);
        (kills_per_day / p).ceil() as usize
    }

    /// Multiplier on the lethal chance, in `[0.6, 4.0]`.
    pub fn compute_death_pressure(
        &self,
        alive_count: usize,
        day: u32,
        daily_event_count: usize,
        desired_days: u32,
    ) -> f64 {
        if alive_count <= 1 || daily_event_count == 0 {
            return 1.0;
        }
        let target_kills = (alive_count - 1) as f64 / remaining_days(day, desired_days);
        let expected_kills = (daily_event_count as f64 * self.day_lethal_chance(day)).max(1e-9);
        let escalation = if day > LATE_GAME_DAY {
            1.0 + LATE_GAME_ESCALATION * (day - LATE_GAME_DAY) as f64
        } else {
            1.0
        };
        let pressure = target_kills / expected_kills * escalation;
        if pressure.is_finite() {
            pressure.clamp(MIN_DEATH_PRESSURE, MAX_DEATH_PRESSURE)
        } else {
            MAX_DEATH_PRESSURE
        }
    }

    /// The lethal-branch probability for a slot on `day`.
    pub fn effective_lethal_chance(&self, day: u32, death_pressure: f64) -> f64 {
        (self.day_lethal_chance(day) * death_pressure).clamp(MIN_LETHAL_CHANCE, MAX_LETHAL_CHANCE)
    }

    /// How many slots `day` gets. Consumes one draw: the bloodbath range on
    /// day 1, the jitter table otherwise.
    pub fn determine_event_count(
        &self,
        day: u32,
        alive_count: usize,
        total_tributes: usize,
        desired_days: u32,
        rng: &mut dyn RngCore,
    ) -> usize {
        let baseline = if day == 1 {
            let lo = self.bloodbath_min.min(self.bloodbath_max);
            let hi = self.bloodbath_min.max(self.bloodbath_max);
            rng.random_range(lo..=hi) as i64
        } else {
            let fraction = alive_count as f64 / total_tributes.max(1) as f64;
            let span = self.max_events.saturating_sub(self.min_events) as f64;
            let base = (self.min_events as f64 + fraction * span).round() as i64;
            base + JITTER[rng.random_range(0..JITTER.len())]
        };

        let required = self.required_events_for_progress(day, alive_count, desired_days);
        let soft_ceiling = SOFT_EVENT_CEILING.min(alive_count).max(required);
        let count = (baseline.max(0) as usize).max(required).min(soft_ceiling);
        count.max(self.min_events as usize).min(alive_count)
    }
}

fn remaining_days(day: u32, desired_days: u32) -> f64 {
    (desired_days as i64 - day as i64 + 1).max(1) as f64
}
