//! Candidate validation pipeline
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. Originality: the word has not been accepted already
//! 2. Letters: the word can be spelled from the root's letters
//! 3. Root exclusion (only with `RootPolicy::Reject`)
//! 4. Dictionary: the word is a real English word
//!
//! Letter and dictionary checks always look at the root word, never at earlier answers.

use super::letters::LetterPool;
use super::word::{Candidate, RootWord};
use crate::dictionary::Dictionary;
use thiserror::Error;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Word used already")]
    DuplicateWord,
    #[error("Word not possible")]
    LettersUnavailable,
    #[error("Word is the root")]
    SameAsRoot,
    #[error("Word not recognised")]
    NotARealWord,
}

impl Rejection {
    /// Short title shown above the message
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::LettersUnavailable => "Word not possible",
            Self::SameAsRoot => "Word is the root",
            Self::NotARealWord => "Word not recognised",
        }
    }

    /// Explanation for the player
    #[must_use]
    pub fn message(self, root: &str) -> String {
        match self {
            Self::DuplicateWord => "Be more original".to_string(),
            Self::LettersUnavailable => format!("You can't spell that word from '{root}'!"),
            Self::SameAsRoot => "Find words inside it, not the word itself".to_string(),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

/// Outcome of validating a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// What to do with a candidate that is the root word itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootPolicy {
    /// Let it through to the dictionary check
    #[default]
    Allow,
    /// Reject it with `Rejection::SameAsRoot`
    Reject,
}

/// True iff `candidate` has not been used yet (exact match)
#[must_use]
pub fn is_original<S: AsRef<str>>(used_words: &[S], candidate: &str) -> bool {
    !used_words.iter().any(|used| used.as_ref() == candidate)
}

/// True iff every letter of `candidate` can be taken from `root`, each occurrence at most once
///
/// Both words are expected to be lowercased already.
///
/// # Examples
/// ```
/// use word_scramble::core::is_possible;
///
/// assert!(is_possible("silkworm", "silk"));
/// assert!(!is_possible("silkworm", "mill")); // only one 'l'
/// assert!(!is_possible("silkworm", "silkx"));
/// ```
#[must_use]
pub fn is_possible(root: &str, candidate: &str) -> bool {
    LetterPool::from_word(root).take_word(candidate)
}

/// Ask the dictionary whether `candidate` is a real word
#[must_use]
pub fn is_real_word<D: Dictionary + ?Sized>(dictionary: &D, candidate: &str) -> bool {
    dictionary.contains(candidate)
}

/// Runs the validation pipeline against a dictionary
///
/// Holds no game state: root and used words are passed in on every call.
pub struct WordValidator<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    root_policy: RootPolicy,
}

impl<'a, D: Dictionary + ?Sized> WordValidator<'a, D> {
    pub const fn new(dictionary: &'a D, root_policy: RootPolicy) -> Self {
        Self {
            dictionary,
            root_policy,
        }
    }

    /// Validate `candidate` against the root and the words accepted so far
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Candidate, Rejection, RootPolicy, RootWord, Verdict, WordValidator};
    /// use word_scramble::dictionary::WordSet;
    ///
    /// let dictionary = WordSet::from_words(["silk", "worm", "silkworm"]);
    /// let validator = WordValidator::new(&dictionary, RootPolicy::Allow);
    /// let root = RootWord::new("silkworm").unwrap();
    /// let used = vec!["worm".to_string()];
    ///
    /// let silk = Candidate::normalize("silk").unwrap();
    /// assert_eq!(validator.validate(&root, &used, &silk), Verdict::Accepted);
    ///
    /// let worm = Candidate::normalize("worm").unwrap();
    /// assert_eq!(
    ///     validator.validate(&root, &used, &worm),
    ///     Verdict::Rejected(Rejection::DuplicateWord)
    /// );
    /// ```
    pub fn validate<S: AsRef<str>>(
        &self,
        root: &RootWord,
        used_words: &[S],
        candidate: &Candidate,
    ) -> Verdict {
        let word = candidate.text();

        if !is_original(used_words, word) {
            return Verdict::Rejected(Rejection::DuplicateWord);
        }

        if !is_possible(root.text(), word) {
            return Verdict::Rejected(Rejection::LettersUnavailable);
        }

        if self.root_policy == RootPolicy::Reject && word == root.text() {
            return Verdict::Rejected(Rejection::SameAsRoot);
        }

        if !is_real_word(self.dictionary, word) {
            return Verdict::Rejected(Rejection::NotARealWord);
        }

        Verdict::Accepted
    }
}
