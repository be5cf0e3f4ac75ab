//! Word finding command
//!
//! Lists every dictionary word that can be spelled from a root.

use crate::core::{LetterPool, RootWord, WordError};
use crate::dictionary::WordSet;

/// Configuration for finding words
pub struct SolveConfig {
    pub root: String,
    pub min_length: usize,
    pub include_root: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(root: String) -> Self {
        Self {
            root,
            min_length: 1,
            include_root: false,
        }
    }

    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub const fn with_include_root(mut self, include_root: bool) -> Self {
        self.include_root = include_root;
        self
    }
}

/// Every word found for a root
pub struct SolveResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub total_letters: usize,
}

/// Find all dictionary words spellable from `root`
///
/// The result is ordered longest first, then alphabetically.
#[must_use]
pub fn find_words(
    root: &RootWord,
    dictionary: &WordSet,
    min_length: usize,
    include_root: bool,
) -> Vec<String> {
    let pool = LetterPool::from_word(root.text());

    let mut words: Vec<String> = dictionary
        .iter()
        .filter(|word| word.chars().count() >= min_length)
        .filter(|&word| include_root || word != root.text())
        .filter(|word| pool.can_spell(word))
        .map(str::to_string)
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    words
}

/// Solve a root word against the dictionary
///
/// # Errors
///
/// Returns an error if the root is empty or contains anything but letters.
pub fn solve_root(config: &SolveConfig, dictionary: &WordSet) -> Result<SolveResult, WordError> {
    let root = RootWord::new(&config.root)?;
    let words = find_words(&root, dictionary, config.min_length, config.include_root);
    let total_letters = words.iter().map(|word| word.chars().count()).sum();

    Ok(SolveResult {
        root: root.text().to_string(),
        words,
        total_letters,
    })
}
