//! Dictionary lookups
//!
//! The validation pipeline only needs a yes/no answer for "is this an English word?".
//! That answer comes from anything implementing [`Dictionary`]: the bundled [`WordSet`],
//! a set loaded from a file, or a plain closure in tests.

mod word_set;

pub use word_set::WordSet;

/// A source of truth for real words
pub trait Dictionary {
    /// Whether `word` (lowercase) is a recognised word
    fn contains(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_dictionary() {
        let only_silk = |word: &str| word == "silk";
        assert!(only_silk.contains("silk"));
        assert!(!Dictionary::contains(&only_silk, "worm"));
    }

    #[test]
    fn dictionary_as_trait_object() {
        let words = WordSet::from_words(["worm"]);
        let dictionary: &dyn Dictionary = &words;
        assert!(dictionary.contains("worm"));
        assert!(!dictionary.contains("silk"));
    }
}
