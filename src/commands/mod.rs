//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationReport, run_simulation};
