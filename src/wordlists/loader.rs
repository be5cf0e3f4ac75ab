//! Word list loading utilities
//!
//! Provides functions to load newline-separated word lists from files or embedded constants.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    /// File missing or unreadable.
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File read fine but held nothing but blank lines.
    #[error("word list {path} contains no words")]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns `WordListError::Read` if the file cannot be read and
/// `WordListError::Empty` if it contains no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}

/// Split newline-separated text into normalized words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("silkworm\n\n  balloons \r\n\nBIRTHDAY\n");
        assert_eq!(words, vec!["silkworm", "balloons", "birthday"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n \n").is_empty());
    }

    #[test]
    fn words_from_slice_converts() {
        let words = words_from_slice(&["silk", "worm"]);
        assert_eq!(words, vec!["silk".to_string(), "worm".to_string()]);
    }

    #[test]
    fn load_missing_file() {
        let err = load_from_file("/nonexistent/start.txt").unwrap_err();
        assert!(matches!(err, WordListError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/start.txt"));
    }

    #[test]
    fn load_blank_file_is_empty_error() {
        let path = std::env::temp_dir().join("word_scramble_blank_list.txt");
        fs::write(&path, "\n  \n").unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, WordListError::Empty { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_real_file() {
        let path = std::env::temp_dir().join("word_scramble_real_list.txt");
        fs::write(&path, "Silkworm\nballoons\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["silkworm", "balloons"]);

        fs::remove_file(&path).unwrap();
    }
}
