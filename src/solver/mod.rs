//! Hangman auto-player
//!
//! Plays the game by narrowing the dictionary with the hint engine and
//! picking the next letter with a pluggable strategy.

mod engine;
pub mod strategy;

pub use engine::{Move, Solver};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
