#[macro_use]
mod macros;

pub mod day;
pub mod event;
pub mod tribute;

pub use day::{DayRecord, SimulationResult};
pub use event::{Event, EventKind, EventMeta};
pub use tribute::Tribute;
