//! Dictionary hints
//!
//! Finds every dictionary word consistent with the pattern the player can
//! currently see. In Hangman a guessed letter is revealed at every position
//! it occurs, so a blank can only hide a letter that is not already showing.

use crate::core::{GuessPattern, PatternError};
use rayon::prelude::*;
use tracing::debug;

/// Check a candidate word against a pattern in display form
///
/// Whitespace in `pattern` is ignored. An unparseable pattern matches
/// nothing.
///
/// # Examples
/// ```
/// use hangman::hints::match_with_gaps;
///
/// assert!(match_with_gaps("_ a t ", "cat"));
/// assert!(match_with_gaps("c a _ ", "cap"));
/// assert!(match_with_gaps("c a t ", "cat"));
/// assert!(!match_with_gaps("_ a t ", "tat"));
/// assert!(!match_with_gaps("_ a t ", "cart"));
/// ```
#[must_use]
pub fn match_with_gaps(pattern: &str, candidate: &str) -> bool {
    GuessPattern::parse(pattern).is_ok_and(|pattern| pattern.matches(candidate))
}

/// Every word in `words` that could be hidden behind `pattern`
///
/// Results keep dictionary order.
///
/// # Examples
/// ```
/// use hangman::core::GuessPattern;
/// use hangman::hints::possible_matches;
///
/// let words: Vec<String> = ["cat", "cap", "car", "cut", "tat"].map(String::from).to_vec();
/// let pattern = GuessPattern::parse("c a _ ").unwrap();
/// assert_eq!(possible_matches(&pattern, &words), ["cat", "cap", "car"]);
/// ```
#[must_use]
pub fn possible_matches<'a>(pattern: &GuessPattern, words: &'a [String]) -> Vec<&'a str> {
    let matches: Vec<&str> = words
        .par_iter()
        .filter(|word| pattern.matches(word))
        .map(String::as_str)
        .collect();

    debug!(pattern = %pattern, matches = matches.len(), "hint lookup");
    matches
}

/// Parse `pattern` and look up its matches in one step
///
/// # Errors
/// Returns `PatternError` if `pattern` is not a valid display pattern.
pub fn show_possible_matches<'a>(
    pattern: &str,
    words: &'a [String],
) -> Result<Vec<&'a str>, PatternError> {
    let pattern = GuessPattern::parse(pattern)?;
    Ok(possible_matches(&pattern, words))
}
