//! Main Hangman solver interface

use super::strategy::Strategy;
use crate::core::{Game, LetterSet};
use crate::hints::possible_matches;
use std::fmt;

/// The solver's next move, in the same form a player would type it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move<'a> {
    Letter(char),
    Word(&'a str),
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{letter}"),
            Self::Word(word) => write!(f, "{word}"),
        }
    }
}

/// Main Hangman solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [String],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    pub const fn new(strategy: S, words: &'a [String]) -> Self {
        Self { strategy, words }
    }

    /// Dictionary words still consistent with everything the game has shown
    ///
    /// Starts from the hint engine's matches, then also drops any word that
    /// contains a letter already guessed and missed, and any word already
    /// guessed whole and rejected.
    pub fn candidates(&self, game: &Game) -> Vec<&'a str> {
        let pattern = game.pattern();
        let missed: LetterSet = game.guessed().difference(pattern.revealed());
        let rejected = game.rejected_words();

        possible_matches(&pattern, self.words)
            .into_iter()
            .filter(|word| word.chars().all(|c| !missed.contains(c)))
            .filter(|word| !rejected.iter().any(|r| r.as_str() == *word))
            .collect()
    }

    /// Pick the next move for `game`
    ///
    /// Guesses the whole word once a single candidate remains; otherwise asks
    /// the strategy for a letter. Returns `None` if nothing is left to try.
    pub fn next_move(&self, game: &Game) -> Option<Move<'a>> {
        let candidates = self.candidates(game);

        if let [only] = candidates.as_slice() {
            return Some(Move::Word(*only));
        }

        self.strategy
            .select_letter(&candidates, game.guessed())
            .map(Move::Letter)
    }
}
