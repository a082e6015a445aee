//! One-shot hint lookup
//!
//! Lists every dictionary word that fits a pattern typed on the command line.

use crate::core::{GuessPattern, PatternError};
use crate::hints::possible_matches;
use crate::wordlists::WordList;

/// Result of a hint lookup
pub struct HintResult {
    /// The pattern in normalized display form
    pub pattern: String,
    pub matches: Vec<String>,
}

/// Look up all words matching `pattern`
///
/// # Errors
///
/// Returns an error if the pattern contains anything other than letters,
/// `_` and whitespace.
pub fn find_hints(pattern: &str, words: &WordList) -> Result<HintResult, PatternError> {
    let pattern = GuessPattern::parse(pattern)?;
    let matches = possible_matches(&pattern, words.words())
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(HintResult {
        pattern: pattern.to_string(),
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_hints_normalizes_pattern() {
        let words = WordList::new(["cat", "cap", "cot"]);
        let result = find_hints("CA_", &words).unwrap();

        assert_eq!(result.pattern, "c a _ ");
        assert_eq!(result.matches, ["cat", "cap"]);
    }

    #[test]
    fn find_hints_no_matches() {
        let words = WordList::new(["cat"]);
        let result = find_hints("_ _ _ _", &words).unwrap();
        assert!(result.matches.is_empty());
    }

    #[test]
    fn find_hints_rejects_bad_pattern() {
        let words = WordList::embedded();
        assert_eq!(
            find_hints("c*t", &words).err(),
            Some(PatternError::InvalidCharacter('*'))
        );
    }

    #[test]
    fn find_hints_on_embedded_dictionary() {
        let words = WordList::embedded();
        let result = find_hints("_ o g ", &words).unwrap();
        assert!(result.matches.iter().any(|w| w == "dog"));
        assert!(result.matches.iter().all(|w| w.len() == 3 && w.ends_with("og")));
    }
}
