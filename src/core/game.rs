//! Round-by-round Hangman game engine
//!
//! A `Game` owns the secret word and the guess state. Each call to
//! [`Game::submit`] classifies one line of player input, applies its effect,
//! then runs the end-of-round warning check.

use super::{GuessPattern, GuessState, LetterSet, SecretWord};
use thiserror::Error;
use tracing::debug;

/// Input that asks for dictionary hints instead of guessing
pub const HINT_REQUEST: &str = "*";

/// Where the game stands after the last round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What a single submitted input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The whole secret word was typed in
    Solved,
    /// The player asked for hints; nothing changes
    HintRequested,
    /// The letter had been guessed before
    Duplicate { letter: char, warnings_left: u8 },
    /// Input was not a single letter
    NotALetter { input: String, warnings_left: u8 },
    /// A new letter that occurs in the secret
    Hit { letter: char },
    /// A new letter that does not occur in the secret
    Miss { letter: char, lives_lost: u8 },
}

/// The full effect of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub outcome: GuessOutcome,
    /// True when warnings ran out this round and a life was taken
    pub warning_penalty: bool,
    pub status: GameStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The game is already over")]
    Finished,
}

/// A single game of Hangman
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    state: GuessState,
    solved_outright: bool,
    rounds: usize,
    /// Whole-word guesses that were not the secret
    rejected_words: Vec<String>,
}

impl Game {
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        debug!(length = secret.len(), "new game");
        Self {
            secret,
            state: GuessState::new(),
            solved_outright: false,
            rounds: 0,
            rejected_words: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GuessState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.state.lives()
    }

    #[inline]
    #[must_use]
    pub const fn warnings(&self) -> u8 {
        self.state.warnings()
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.state.guessed()
    }

    /// Rounds played so far, not counting hint requests
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Words typed in full that turned out not to be the secret
    #[must_use]
    pub fn rejected_words(&self) -> &[String] {
        &self.rejected_words
    }

    /// The pattern currently shown to the player
    #[must_use]
    pub fn pattern(&self) -> GuessPattern {
        GuessPattern::reveal(&self.secret, self.state.guessed())
    }

    /// Letters not yet guessed, alphabetical
    #[must_use]
    pub fn available_letters(&self) -> String {
        self.state.guessed().available()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.solved_outright || self.secret.is_guessed(self.state.guessed()) {
            GameStatus::Won
        } else if self.state.is_out_of_lives() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Playing
    }

    /// Final score for a won game: remaining lives times distinct letters
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        (self.status() == GameStatus::Won)
            .then(|| usize::from(self.state.lives()) * self.secret.unique_letters())
    }

    /// Play one round with the player's raw input
    ///
    /// Input is trimmed and lowercased before it is classified.
    ///
    /// # Errors
    /// Returns `GameError::Finished` if the game was already won or lost.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GameStatus, GuessOutcome, SecretWord};
    ///
    /// let mut game = Game::new(SecretWord::new("dog").unwrap());
    /// let turn = game.submit("a").unwrap();
    /// assert_eq!(turn.outcome, GuessOutcome::Miss { letter: 'a', lives_lost: 2 });
    /// assert_eq!(game.lives(), 4);
    ///
    /// let turn = game.submit("DOG").unwrap();
    /// assert_eq!(turn.status, GameStatus::Won);
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }

        let guess = input.trim().to_lowercase();
        let outcome = self.classify(guess);

        if outcome != GuessOutcome::HintRequested {
            self.rounds += 1;
        }

        let warning_penalty = self.state.settle_warnings();
        let status = self.status();
        debug!(?outcome, warning_penalty, ?status, lives = self.lives(), "round played");

        Ok(Turn {
            outcome,
            warning_penalty,
            status,
        })
    }

    fn classify(&mut self, guess: String) -> GuessOutcome {
        if guess == self.secret.text() {
            self.solved_outright = true;
            return GuessOutcome::Solved;
        }

        if guess == HINT_REQUEST {
            return GuessOutcome::HintRequested;
        }

        let mut chars = guess.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_lowercase() => letter,
            _ => {
                if guess.len() > 1 && guess.bytes().all(|b| b.is_ascii_lowercase()) {
                    self.rejected_words.push(guess.clone());
                }
                self.state.spend_warning();
                return GuessOutcome::NotALetter {
                    input: guess,
                    warnings_left: self.state.warnings(),
                };
            }
        };

        if !self.state.record(letter) {
            self.state.spend_warning();
            return GuessOutcome::Duplicate {
                letter,
                warnings_left: self.state.warnings(),
            };
        }

        if self.secret.contains(letter) {
            GuessOutcome::Hit { letter }
        } else {
            let lives_lost = self.state.charge_miss(letter);
            GuessOutcome::Miss { letter, lives_lost }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str) -> Game {
        Game::new(SecretWord::new(secret).unwrap())
    }

    #[test]
    fn letter_by_letter_win_keeps_all_lives() {
        let mut game = game("dog");
        for letter in ["d", "o"] {
            let turn = game.submit(letter).unwrap();
            assert!(matches!(turn.outcome, GuessOutcome::Hit { .. }));
            assert_eq!(turn.status, GameStatus::Playing);
        }
        let turn = game.submit("g").unwrap();
        assert_eq!(turn.status, GameStatus::Won);
        assert_eq!(game.rounds(), 3);
        assert_eq!(game.lives(), 6);
        assert_eq!(game.score(), Some(18));
    }

    #[test]
    fn wrong_whole_word_is_remembered() {
        let mut game = game("dot");
        let turn = game.submit("Dog").unwrap();
        assert!(matches!(turn.outcome, GuessOutcome::NotALetter { .. }));
        game.submit("d4").unwrap();
        assert_eq!(game.rejected_words(), ["dog"]);
    }

    #[test]
    fn vowel_miss_costs_two_lives() {
        let mut game = game("dog");
        let turn = game.submit("a").unwrap();
        assert_eq!(
            turn.outcome,
            GuessOutcome::Miss {
                letter: 'a',
                lives_lost: 2
            }
        );
        assert_eq!(game.lives(), 4);
    }

    #[test]
    fn consonant_miss_costs_one_life() {
        let mut game = game("dog");
        game.submit("z").unwrap();
        assert_eq!(game.lives(), 5);
    }

    #[test]
    fn whole_word_guess_wins_immediately() {
        let mut game = game("dog");
        let turn = game.submit("  Dog\n").unwrap();
        assert_eq!(turn.outcome, GuessOutcome::Solved);
        assert_eq!(turn.status, GameStatus::Won);
        assert!(game.pattern().blanks() > 0);
        assert_eq!(game.score(), Some(18));
    }

    #[test]
    fn hint_request_changes_nothing() {
        let mut game = game("dog");
        let before = *game.state();
        let turn = game.submit("*").unwrap();
        assert_eq!(turn.outcome, GuessOutcome::HintRequested);
        assert!(!turn.warning_penalty);
        assert_eq!(*game.state(), before);
        assert_eq!(game.rounds(), 0);
    }

    #[test]
    fn duplicate_guess_spends_warning() {
        let mut game = game("dog");
        game.submit("d").unwrap();
        let turn = game.submit("D").unwrap();
        assert_eq!(
            turn.outcome,
            GuessOutcome::Duplicate {
                letter: 'd',
                warnings_left: 2
            }
        );
        assert_eq!(game.lives(), 6);
    }

    #[test]
    fn repeated_miss_is_a_duplicate_not_a_second_miss() {
        let mut game = game("dog");
        game.submit("z").unwrap();
        let turn = game.submit("z").unwrap();
        assert!(matches!(turn.outcome, GuessOutcome::Duplicate { .. }));
        assert_eq!(game.lives(), 5);
    }

    #[test]
    fn invalid_inputs_spend_warnings() {
        let mut game = game("dog");
        for input in ["1", "", "ab"] {
            let turn = game.submit(input).unwrap();
            assert!(matches!(turn.outcome, GuessOutcome::NotALetter { .. }));
        }
        // Third warning ran out: reset to one and a life is gone
        assert_eq!(game.warnings(), 1);
        assert_eq!(game.lives(), 5);

        let turn = game.submit("?").unwrap();
        assert!(turn.warning_penalty);
        assert_eq!(game.warnings(), 1);
        assert_eq!(game.lives(), 4);
    }

    #[test]
    fn losing_all_lives_ends_the_game() {
        let mut game = game("dog");
        for letter in ["a", "e", "i"] {
            game.submit(letter).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), None);
        assert_eq!(game.submit("d"), Err(GameError::Finished));
    }

    #[test]
    fn vowel_miss_with_one_life_left_stops_at_zero() {
        let mut game = game("dog");
        for letter in ["a", "e", "z"] {
            game.submit(letter).unwrap();
        }
        assert_eq!(game.lives(), 1);
        let turn = game.submit("u").unwrap();
        assert_eq!(
            turn.outcome,
            GuessOutcome::Miss {
                letter: 'u',
                lives_lost: 1
            }
        );
        assert_eq!(game.lives(), 0);
        assert_eq!(turn.status, GameStatus::Lost);
    }

    #[test]
    fn pattern_and_available_letters_follow_guesses() {
        let mut game = game("cat");
        game.submit("c").unwrap();
        game.submit("a").unwrap();
        game.submit("z").unwrap();
        assert_eq!(game.pattern().to_string(), "c a _ ");
        assert_eq!(game.available_letters(), "bdefghijklmnopqrstuvwxy");
    }
}
