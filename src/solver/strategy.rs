//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::LetterSet;
use rustc_hash::FxHashMap;

/// English letters from most to least common, used when no candidate word is left
const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select a letter not yet in `guessed`, given the words still possible
    ///
    /// Returns `None` only when every letter has been guessed.
    fn select_letter(&self, candidates: &[&str], guessed: LetterSet) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among remaining candidates (default)
    Frequency(FrequencyStrategy),
    /// Random letter from the remaining candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &[&str], guessed: LetterSet) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, guessed),
            Self::Random(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

fn fallback_letter(guessed: LetterSet) -> Option<char> {
    ENGLISH_FREQUENCY_ORDER.chars().find(|&c| !guessed.contains(c))
}

/// Letter-frequency strategy
///
/// Picks the unguessed letter that appears in the most remaining candidates,
/// breaking ties alphabetically.
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    /// Count, for each unguessed letter, how many candidates contain it
    #[must_use]
    pub fn letter_counts(candidates: &[&str], guessed: LetterSet) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for candidate in candidates {
            let letters = LetterSet::from_letters(candidate).difference(guessed);
            for letter in letters.iter() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&str], guessed: LetterSet) -> Option<char> {
        Self::letter_counts(candidates, guessed)
            .into_iter()
            .max_by(|(l1, c1), (l2, c2)| c1.cmp(c2).then_with(|| l2.cmp(l1)))
            .map(|(letter, _)| letter)
            .or_else(|| fallback_letter(guessed))
    }
}

/// Random strategy
///
/// Picks any unguessed letter that occurs in a remaining candidate.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, candidates: &[&str], guessed: LetterSet) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let pool: LetterSet = candidates
            .iter()
            .flat_map(|c| c.chars())
            .collect::<LetterSet>()
            .difference(guessed);

        let letters: Vec<char> = if pool.is_empty() {
            guessed.complement().iter().collect()
        } else {
            pool.iter().collect()
        };

        letters.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_picks_most_common_letter() {
        let candidates = ["cat", "cap", "car", "cot"];
        let letter = FrequencyStrategy.select_letter(&candidates, LetterSet::new());
        // 'c' is in every candidate
        assert_eq!(letter, Some('c'));
    }

    #[test]
    fn frequency_skips_guessed_letters() {
        let candidates = ["cat", "cap", "car", "cot"];
        let letter = FrequencyStrategy.select_letter(&candidates, LetterSet::from_letters("c"));
        assert_eq!(letter, Some('a'));
    }

    #[test]
    fn frequency_breaks_ties_alphabetically() {
        let candidates = ["ab", "ba"];
        let letter = FrequencyStrategy.select_letter(&candidates, LetterSet::new());
        assert_eq!(letter, Some('a'));
    }

    #[test]
    fn frequency_counts_each_candidate_once() {
        let counts = FrequencyStrategy::letter_counts(&["banana", "bandit"], LetterSet::new());
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'n'), Some(&2));
        assert_eq!(counts.get(&'t'), Some(&1));
    }

    #[test]
    fn frequency_falls_back_to_english_order() {
        let letter = FrequencyStrategy.select_letter(&[], LetterSet::from_letters("et"));
        assert_eq!(letter, Some('a'));
    }

    #[test]
    fn strategies_return_none_when_alphabet_exhausted() {
        let all = LetterSet::from_letters(crate::core::ALPHABET);
        assert_eq!(FrequencyStrategy.select_letter(&[], all), None);
        assert_eq!(RandomStrategy.select_letter(&[], all), None);
    }

    #[test]
    fn random_picks_from_candidate_letters() {
        let guessed = LetterSet::from_letters("d");
        for _ in 0..20 {
            let letter = RandomStrategy.select_letter(&["dog"], guessed).unwrap();
            assert!(letter == 'o' || letter == 'g');
        }
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert!(matches!(StrategyType::from_name("random"), StrategyType::Random(_)));
        assert!(matches!(StrategyType::from_name("frequency"), StrategyType::Frequency(_)));
        assert!(matches!(StrategyType::from_name("bogus"), StrategyType::Frequency(_)));
    }
}
