mod context;
mod day;
mod generator;
pub mod pacing;
mod runner;

pub use context::SlotContext;
pub use day::DayScheduler;
pub use generator::EventGenerator;
pub use pacing::PacingController;
pub use runner::{run_simulation, run_simulation_with_rng};
