//! Set of lowercase letters
//!
//! Guessed letters are stored as a 26-bit mask: bit `i` is set when the
//! letter `'a' + i` is a member. Only lowercase ASCII letters can ever be
//! inserted, so the set is always a subset of the alphabet.

use std::fmt;

/// The lowercase alphabet, in display order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const VOWELS: LetterSet = LetterSet::from_ascii(b"aeiou");

/// True for `a`, `e`, `i`, `o` and `u`
#[inline]
#[must_use]
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(letter)
}

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL: u32 = (1 << 26) - 1;

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    const fn from_ascii(bytes: &[u8]) -> Self {
        let mut mask = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_lowercase() {
                mask |= 1 << (bytes[i] - b'a') as u32;
            }
            i += 1;
        }
        Self(mask)
    }

    /// Build a set from every lowercase letter in `letters`
    ///
    /// Characters outside `a`–`z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("c_a t!");
    /// assert_eq!(set.to_string(), "act");
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Self::from_ascii(letters.as_bytes())
    }

    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| 1 << (letter as u32 - 'a' as u32))
    }

    /// Add a letter to the set
    ///
    /// Returns `true` if the letter was newly added, `false` if it was already
    /// present or is not a lowercase ASCII letter.
    pub fn insert(&mut self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) if self.0 & bit == 0 => {
                self.0 |= bit;
                true
            }
            _ => false,
        }
    }

    /// Check if the set contains `letter`
    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Check if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters present in `self` but not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters present in both sets
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// All letters of the alphabet not in this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no letters are in the set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ALPHABET.chars().filter(move |&c| self.contains(c))
    }

    /// The letters not yet in this set, as an alphabetical string
    ///
    /// # Examples
    /// ```
    /// use hangman::core::LetterSet;
    ///
    /// let guessed = LetterSet::from_letters("abc");
    /// assert_eq!(guessed.available(), "defghijklmnopqrstuvwxyz");
    /// ```
    #[must_use]
    pub fn available(self) -> String {
        self.complement().to_string()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
