//! Guess state: guessed letters, lives and warnings

use super::{LetterSet, is_vowel};

/// Lives at the start of every game
pub const STARTING_LIVES: u8 = 6;

/// Warnings at the start of every game
pub const STARTING_WARNINGS: u8 = 3;

/// Mutable per-game counters
///
/// Guessed letters only ever grow. Lives only ever shrink and stop at zero.
/// Warnings shrink on bad input and are topped back up to one, at the cost of
/// a life, whenever they run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessState {
    guessed: LetterSet,
    lives: u8,
    warnings: u8,
}

impl Default for GuessState {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            guessed: LetterSet::new(),
            lives: STARTING_LIVES,
            warnings: STARTING_WARNINGS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub const fn warnings(&self) -> u8 {
        self.warnings
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(letter)
    }

    /// Mark `letter` as guessed; returns false if it already was
    pub fn record(&mut self, letter: char) -> bool {
        self.guessed.insert(letter)
    }

    /// Charge a wrong letter: two lives for a vowel, one for a consonant
    ///
    /// Returns the number of lives actually lost.
    pub fn charge_miss(&mut self, letter: char) -> u8 {
        let cost = if is_vowel(letter) { 2 } else { 1 };
        self.lose_lives(cost)
    }

    /// Charge a warning for invalid or repeated input
    pub fn spend_warning(&mut self) {
        self.warnings = self.warnings.saturating_sub(1);
    }

    /// End-of-round warning check
    ///
    /// When warnings have run out they reset to one and a life is lost.
    /// Returns true if that happened.
    pub fn settle_warnings(&mut self) -> bool {
        if self.warnings == 0 {
            self.warnings = 1;
            self.lose_lives(1);
            true
        } else {
            false
        }
    }

    fn lose_lives(&mut self, count: u8) -> u8 {
        let lost = count.min(self.lives);
        self.lives -= lost;
        lost
    }

    #[inline]
    #[must_use]
    pub const fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}
