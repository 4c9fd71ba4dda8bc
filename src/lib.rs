//! Day-by-day elimination simulation for a fixed roster of tributes.
//!
//! [`sim::run_simulation`] takes names and an [`ArenaConfig`] and returns a
//! [`SimulationResult`]: every day's events, who fell, who is left, and the
//! winner. File loading and JSON export live in [`io`].

pub mod config;
pub mod io;
pub mod model;
pub mod roster;
pub mod sim;
pub mod templates;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::ArenaConfig;
pub use model::{DayRecord, Event, EventKind, EventMeta, SimulationResult, Tribute};
pub use roster::TributeRoster;
pub use sim::{run_simulation, run_simulation_with_rng};
pub use templates::TemplateCatalog;
