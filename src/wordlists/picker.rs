//! Random root selection
//!
//! Picks a root uniformly from the start words. An empty or unusable list never stops
//! the game: the picker falls back to [`FALLBACK_ROOT`].

use crate::core::RootWord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::warn;

/// Root used when no start word is available
pub const FALLBACK_ROOT: &str = "silkworm";

/// Chooses root words for new rounds
pub struct RootPicker {
    roots: Vec<RootWord>,
    rng: StdRng,
}

impl RootPicker {
    /// Create a picker over `words`
    ///
    /// Entries that are not valid roots (blank, digits, punctuation) are dropped.
    /// With `seed` set, the sequence of picks is reproducible.
    pub fn new<I, S>(words: I, seed: Option<u64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roots: Vec<RootWord> = words
            .into_iter()
            .filter_map(|word| RootWord::new(word.as_ref()).ok())
            .collect();

        if roots.is_empty() {
            warn!(fallback = FALLBACK_ROOT, "no usable start words, using fallback root");
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { roots, rng }
    }

    /// Pick the root for the next round
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::{FALLBACK_ROOT, RootPicker};
    ///
    /// let mut picker = RootPicker::new(["balloons"], None);
    /// assert_eq!(picker.pick().text(), "balloons");
    ///
    /// let mut empty = RootPicker::new(Vec::<String>::new(), None);
    /// assert_eq!(empty.pick().text(), FALLBACK_ROOT);
    /// ```
    pub fn pick(&mut self) -> RootWord {
        self.roots
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(fallback_root)
    }

    /// Number of usable roots
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// The fallback root as a `RootWord`
///
/// # Panics
/// Will not panic - `FALLBACK_ROOT` is a lowercase alphabetic constant.
#[must_use]
pub fn fallback_root() -> RootWord {
    RootWord::new(FALLBACK_ROOT).expect("fallback root is a valid word")
}
