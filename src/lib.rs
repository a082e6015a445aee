//! Hangman
//!
//! Word-guessing game for the terminal: a full-screen TUI, a line-based mode,
//! a pattern hint lookup and an auto-playing solver.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GameStatus, SecretWord};
//!
//! let mut game = Game::new(SecretWord::new("dog").unwrap());
//! for guess in ["d", "o", "g"] {
//!     game.submit(guess).unwrap();
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.score(), Some(18));
//! ```

// Core domain types
pub mod core;

// Pattern matching against the dictionary
pub mod hints;

// Auto-play letter selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Structured logging
pub mod logging;
