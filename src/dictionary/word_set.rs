//! In-memory dictionary backed by a hash set

use super::Dictionary;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::{WordListError, load_from_file};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A fixed set of lowercase words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from any list of words, normalizing case and skipping blanks
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordSet};
    ///
    /// let words = WordSet::from_words(["Silk", " worm ", ""]);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("silk"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// The English word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a newline-separated word list
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or holds no words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let words = load_from_file(path)?;
        Ok(Self::from_words(words))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
