//! Terminal output formatting
//!
//! Display utilities for the line game and the simulator.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_simulation_report};
