//! Command implementations

pub mod hint;
pub mod simple;
pub mod simulate;

pub use hint::{HintResult, find_hints};
pub use simple::{GameSummary, run_simple};
pub use simulate::{SimulationStatistics, play_game, print_simulation_statistics, run_simulate};
