//! Word lists for Hangman
//!
//! Provides the embedded dictionary compiled into the binary and the
//! read-only [`WordList`] that the entry point builds once and lends to
//! every command.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Word list contains no usable words")]
    Empty,
}

/// An immutable dictionary of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list, keeping only lowercase ASCII words
    ///
    /// Entries with any other character are skipped.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::WordList;
    ///
    /// let list = WordList::new(["apple", "Pear", "fig", "x-ray"]);
    /// assert_eq!(list.words(), ["apple", "fig"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();

        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        loader::words_from_slice(WORDS)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Pick one word uniformly at random
    ///
    /// Returns `None` for an empty list.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Pick a random secret word for a new game
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if there is nothing to choose from.
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SecretWord, WordListError> {
        self.choose(rng)
            .and_then(|word| SecretWord::new(word).ok())
            .ok_or(WordListError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_keeps_every_word() {
        assert_eq!(WordList::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn choose_returns_member() {
        let list = WordList::new(["cat", "dog", "emu"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = list.choose(&mut rng).unwrap();
            assert!(list.contains(word));
        }
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let list = WordList::embedded();
        let first = list.choose(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = list.choose(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn choose_from_empty_list() {
        let list = WordList::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(list.choose(&mut rng).is_none());
        assert!(matches!(
            list.choose_secret(&mut rng),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn choose_secret_builds_secret_word() {
        let list = WordList::new(["banana"]);
        let secret = list.choose_secret(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(secret.text(), "banana");
    }
}
