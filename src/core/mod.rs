//! Core domain types for Hangman
//!
//! This module contains the game's domain types: the secret word, the set of
//! guessed letters, the revealed pattern, and the round-by-round game engine.
//! Everything here is pure and testable; no terminal I/O happens in `core`.

mod game;
mod letters;
mod pattern;
mod secret;
mod state;

pub use game::{Game, GameError, GameStatus, GuessOutcome, HINT_REQUEST, Turn};
pub use letters::{ALPHABET, LetterSet, is_vowel};
pub use pattern::{BLANK, GuessPattern, PatternError};
pub use secret::{SecretWord, WordError};
pub use state::{GuessState, STARTING_LIVES, STARTING_WARNINGS};
