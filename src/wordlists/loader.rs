//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{WordList, WordListError};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a whitespace-separated word list from a file
///
/// Words may be spread over any number of lines. Tokens that are not made
/// of lowercase ASCII letters are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("{} words loaded.", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tokens = content.split_whitespace().count();
    let list = WordList::new(content.split_whitespace());

    if list.len() < tokens {
        debug!(skipped = tokens - list.len(), "skipped invalid word list entries");
    }
    info!(path = %path.display(), words = list.len(), "word list loaded");

    Ok(list)
}

/// Convert embedded string slice to a word list
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::new(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words.words()[0], "crane");
        assert_eq!(words.words()[2], "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "Slate", "ab3", "", "fig"]);
        assert_eq!(words.words(), ["crane", "fig"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_all_whitespace_separated_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple banana  cherry").unwrap();
        writeln!(file, "\tdate\n\nelder Fig").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.words(), ["apple", "banana", "cherry", "date", "elder"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("words.txt");

        let err = load_from_file(&missing).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("words.txt"));
    }
}
