//! Secret word representation
//!
//! The secret word is the word the player must guess. It is validated once on
//! construction and never changes for the duration of a game.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// The word the player is trying to guess
///
/// Always non-empty and made only of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterSet::from_letters(&text);

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept alongside `len` for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `letter` occurs anywhere in the word
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("dog").unwrap();
    /// assert!(word.contains('o'));
    /// assert!(!word.contains('a'));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub fn unique_letters(&self) -> usize {
        self.letters.len()
    }

    /// True iff every letter of the word has been guessed
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{LetterSet, SecretWord};
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// assert!(word.is_guessed(LetterSet::from_letters("cat")));
    /// assert!(!word.is_guessed(LetterSet::from_letters("ca")));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_guessed(&self, guessed: LetterSet) -> bool {
        guessed.is_superset(self.letters)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_creation_valid() {
        let word = SecretWord::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn secret_creation_uppercase_normalized() {
        let word = SecretWord::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn secret_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
        assert_eq!(SecretWord::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("cran3"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn secret_contains() {
        let word = SecretWord::new("banana").unwrap();
        assert!(word.contains('b'));
        assert!(word.contains('n'));
        assert!(!word.contains('z'));
        assert!(!word.contains('*'));
    }

    #[test]
    fn secret_unique_letters() {
        assert_eq!(SecretWord::new("banana").unwrap().unique_letters(), 3);
        assert_eq!(SecretWord::new("crane").unwrap().unique_letters(), 5);
        assert_eq!(SecretWord::new("aaaa").unwrap().unique_letters(), 1);
    }

    #[test]
    fn secret_is_guessed() {
        let word = SecretWord::new("cat").unwrap();
        assert!(word.is_guessed(LetterSet::from_letters("cat")));
        assert!(word.is_guessed(LetterSet::from_letters("tacxyz")));
        assert!(!word.is_guessed(LetterSet::from_letters("ca")));
        assert!(!word.is_guessed(LetterSet::new()));
    }

    #[test]
    fn secret_display() {
        let word = SecretWord::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
