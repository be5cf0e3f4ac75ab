//! Root word and candidate representation
//!
//! Both are stored lowercased. A `RootWord` is validated once when a round starts;
//! a `Candidate` is only normalized, since the validation pipeline decides what it is worth.

use std::fmt;
use thiserror::Error;

/// Error type for words that cannot be used as a root
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' must contain only letters")]
    InvalidCharacters(String),
}

/// The fixed word of a round
///
/// Candidates must be spelled from its letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Create a root word, normalizing case and surrounding whitespace
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains anything but letters.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the root
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A submitted word after normalization
///
/// Never empty: blank input produces no candidate at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Lowercase and trim raw input
    ///
    /// Returns `None` when nothing is left, which callers treat as "nothing submitted".
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::normalize("  Silk\n").unwrap();
    /// assert_eq!(candidate.text(), "silk");
    ///
    /// assert!(Candidate::normalize(" \t ").is_none());
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
