//! Hangman guess pattern calculation and representation
//!
//! A pattern is the partially revealed display form of the secret word: one
//! slot per letter, either revealed or blank. Its display form writes each
//! slot followed by a single space, with `_` for blanks (`"c a _ "`).

use super::{LetterSet, SecretWord};
use std::fmt;
use thiserror::Error;

/// Marker used for a hidden letter
pub const BLANK: char = '_';

/// The revealed state of the secret word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessPattern {
    slots: Vec<Option<u8>>,
    revealed: LetterSet,
}

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must contain at least one letter or '_'")]
    Empty,
    #[error("Pattern contains invalid character '{0}' (use a-z or '_')")]
    InvalidCharacter(char),
}

impl GuessPattern {
    /// Calculate the pattern shown to the player for `secret` after `guessed`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessPattern, LetterSet, SecretWord};
    ///
    /// let secret = SecretWord::new("cat").unwrap();
    /// let pattern = GuessPattern::reveal(&secret, LetterSet::from_letters("ca"));
    /// assert_eq!(pattern.to_string(), "c a _ ");
    /// ```
    #[must_use]
    pub fn reveal(secret: &SecretWord, guessed: LetterSet) -> Self {
        let slots: Vec<Option<u8>> = secret
            .bytes()
            .iter()
            .map(|&b| guessed.contains(char::from(b)).then_some(b))
            .collect();
        let revealed = secret.letters().intersection(guessed);

        Self { slots, revealed }
    }

    /// Parse a pattern from its display form
    ///
    /// Whitespace is ignored, so both `"c a _ "` and `"ca_"` are accepted.
    /// Uppercase letters are lowercased.
    ///
    /// # Errors
    /// Returns `PatternError` if the pattern has no slots or contains a
    /// character other than a letter, `_` or whitespace.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessPattern;
    ///
    /// let p1 = GuessPattern::parse("_ a t ").unwrap();
    /// let p2 = GuessPattern::parse("_AT").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.len(), 3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let mut slots = Vec::with_capacity(s.len());
        let mut revealed = LetterSet::new();

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let ch = ch.to_ascii_lowercase();
            if ch == BLANK {
                slots.push(None);
            } else if ch.is_ascii_lowercase() {
                revealed.insert(ch);
                slots.push(Some(ch as u8));
            } else {
                return Err(PatternError::InvalidCharacter(ch));
            }
        }

        if slots.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { slots, revealed })
    }

    /// Number of slots (letters in the secret word)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the pattern has no slots; never the case for a parsed or revealed pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of blank slots
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// True once no blanks remain
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The distinct letters already revealed
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> LetterSet {
        self.revealed
    }

    /// Check whether `candidate` could be the secret word behind this pattern
    ///
    /// A candidate matches when it has one letter per slot, agrees with every
    /// revealed slot, and puts no already-revealed letter in a blank slot:
    /// guessing a letter reveals every occurrence of it, so a blank can never
    /// hide a letter shown elsewhere.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessPattern;
    ///
    /// let pattern = GuessPattern::parse("_ a t ").unwrap();
    /// assert!(pattern.matches("cat"));
    /// assert!(!pattern.matches("tat")); // 't' would already be showing
    /// assert!(!pattern.matches("cats"));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let bytes = candidate.as_bytes();
        if bytes.len() != self.slots.len() {
            return false;
        }

        self.slots.iter().zip(bytes).all(|(slot, &b)| match slot {
            Some(letter) => *letter == b,
            None => b.is_ascii_lowercase() && !self.revealed.contains(char::from(b)),
        })
    }
}

impl fmt::Display for GuessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            let ch = slot.map_or(BLANK, char::from);
            write!(f, "{ch} ")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for GuessPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(secret: &str, guessed: &str) -> GuessPattern {
        GuessPattern::reveal(
            &SecretWord::new(secret).unwrap(),
            LetterSet::from_letters(guessed),
        )
    }

    #[test]
    fn reveal_partial() {
        assert_eq!(reveal("cat", "ca").to_string(), "c a _ ");
    }

    #[test]
    fn reveal_nothing_and_everything() {
        assert_eq!(reveal("dog", "").to_string(), "_ _ _ ");
        assert_eq!(reveal("dog", "god").to_string(), "d o g ");
        assert!(reveal("dog", "god").is_complete());
    }

    #[test]
    fn reveal_shows_every_occurrence() {
        let pattern = reveal("banana", "a");
        assert_eq!(pattern.to_string(), "_ a _ a _ a ");
        assert_eq!(pattern.blanks(), 3);
    }

    #[test]
    fn reveal_ignores_missed_letters() {
        let pattern = reveal("dog", "dxz");
        assert_eq!(pattern.revealed().to_string(), "d");
        assert_eq!(pattern, GuessPattern::parse("d__").unwrap());
    }

    #[test]
    fn parse_round_trips_display_form() {
        let pattern = reveal("apple", "pe");
        assert_eq!(GuessPattern::parse(&pattern.to_string()).unwrap(), pattern);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(GuessPattern::parse(""), Err(PatternError::Empty));
        assert_eq!(GuessPattern::parse("   "), Err(PatternError::Empty));
        assert_eq!(
            GuessPattern::parse("c a ?"),
            Err(PatternError::InvalidCharacter('?'))
        );
        assert_eq!(
            GuessPattern::parse("c4t"),
            Err(PatternError::InvalidCharacter('4'))
        );
    }

    #[test]
    fn matches_blank_with_unrevealed_letter() {
        let pattern = GuessPattern::parse("_ a t ").unwrap();
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("bat"));
    }

    #[test]
    fn matches_exact_and_trailing_blank() {
        assert!(GuessPattern::parse("c a _ ").unwrap().matches("cap"));
        assert!(GuessPattern::parse("c a t ").unwrap().matches("cat"));
    }

    #[test]
    fn matches_rejects_revealed_letter_in_blank() {
        // 't' is already shown, so it cannot also hide in the blank
        let pattern = GuessPattern::parse("_ a t ").unwrap();
        assert!(!pattern.matches("tat"));
        let pattern = GuessPattern::parse("a _ _ l e").unwrap();
        assert!(pattern.matches("ankle"));
        assert!(!pattern.matches("aalle"));
        assert!(!pattern.matches("allle"));
    }

    #[test]
    fn matches_rejects_mismatches() {
        let pattern = GuessPattern::parse("c a _ ").unwrap();
        assert!(!pattern.matches("cop"));
        assert!(!pattern.matches("caps"));
        assert!(!pattern.matches("ca"));
        assert!(!pattern.matches("ca_"));
        assert!(!pattern.matches("caP"));
    }
}
