//! Letter availability as multiset consumption
//!
//! A `LetterPool` counts how many times each letter of the root word appears.
//! Spelling a candidate takes one occurrence per letter, in order, and stops at the
//! first letter the pool has run out of.

use rustc_hash::FxHashMap;

/// Remaining letters of a root word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
    remaining: usize,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("speed");
    /// assert_eq!(pool.count_of('e'), 2);
    /// assert_eq!(pool.len(), 5);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut remaining = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            remaining += 1;
        }
        Self { counts, remaining }
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false`, leaving the pool untouched, if no occurrence is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume every letter of `word`, failing on the first one that is unavailable
    ///
    /// On failure the letters taken before the missing one stay consumed.
    pub fn take_word(&mut self, word: &str) -> bool {
        word.chars().all(|ch| self.take(ch))
    }

    /// Check whether `word` could be spelled from this pool without modifying it
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.clone().take_word(word)
    }

    /// How many of `letter` are left
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::from_word("balloons");
        assert_eq!(pool.count_of('l'), 2);
        assert_eq!(pool.count_of('o'), 2);
        assert_eq!(pool.count_of('b'), 1);
        assert_eq!(pool.count_of('z'), 0);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::from_word("all");
        assert!(pool.take('l'));
        assert_eq!(pool.count_of('l'), 1);
        assert!(pool.take('l'));
        assert!(!pool.take('l'));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn take_missing_letter_fails() {
        let mut pool = LetterPool::from_word("silk");
        assert!(!pool.take('x'));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn take_word_stops_at_first_missing_letter() {
        let mut pool = LetterPool::from_word("silkworm");
        assert!(!pool.take_word("sxl"));
        // 's' was taken before 'x' failed, 'l' was never reached
        assert_eq!(pool.count_of('s'), 0);
        assert_eq!(pool.count_of('l'), 1);
    }

    #[test]
    fn can_spell_leaves_pool_intact() {
        let pool = LetterPool::from_word("silkworm");
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("silkworm"));
        assert!(!pool.can_spell("mill"));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::from_word("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }
}
