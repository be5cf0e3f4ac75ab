//! A single round of the game
//!
//! The session owns the root word and the accepted words. The UI owns the session and
//! reads its state after each submission.

use super::config::GameConfig;
use crate::core::{Candidate, RootWord, Verdict, WordValidator};
use crate::dictionary::Dictionary;
use tracing::{debug, info};

/// Root word plus the words accepted against it, most recent first
pub struct GameSession<'a, D: Dictionary + ?Sized> {
    root: RootWord,
    used_words: Vec<String>,
    dictionary: &'a D,
    config: GameConfig,
}

impl<'a, D: Dictionary + ?Sized> GameSession<'a, D> {
    /// Start a round on `root`
    pub fn new(root: RootWord, dictionary: &'a D, config: GameConfig) -> Self {
        info!(root = %root, "round started");
        Self {
            root,
            used_words: Vec::new(),
            dictionary,
            config,
        }
    }

    /// Validate raw input and record it if accepted
    ///
    /// Input is trimmed and lowercased first. Blank input returns `None` and changes nothing.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, RootWord, Verdict};
    /// use word_scramble::dictionary::WordSet;
    /// use word_scramble::game::{GameConfig, GameSession};
    ///
    /// let dictionary = WordSet::from_words(["silk", "worm"]);
    /// let root = RootWord::new("silkworm").unwrap();
    /// let mut session = GameSession::new(root, &dictionary, GameConfig::default());
    ///
    /// assert_eq!(session.submit_candidate(" Silk "), Some(Verdict::Accepted));
    /// assert_eq!(
    ///     session.submit_candidate("silk"),
    ///     Some(Verdict::Rejected(Rejection::DuplicateWord))
    /// );
    /// assert_eq!(session.submit_candidate("   "), None);
    /// assert_eq!(session.used_words(), ["silk"]);
    /// ```
    pub fn submit_candidate(&mut self, raw: &str) -> Option<Verdict> {
        let candidate = Candidate::normalize(raw)?;

        let verdict = WordValidator::new(self.dictionary, self.config.root_policy).validate(
            &self.root,
            &self.used_words,
            &candidate,
        );
        debug!(candidate = %candidate, ?verdict, "candidate validated");

        if verdict.is_accepted() {
            self.used_words.insert(0, candidate.into_string());
        }

        Some(verdict)
    }

    /// Start over on a new root, forgetting every accepted word
    pub fn reset(&mut self, new_root: RootWord) {
        info!(root = %new_root, previous = %self.root, found = self.used_words.len(), "round reset");
        self.root = new_root;
        self.used_words.clear();
    }

    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Total letters across all accepted words
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.used_words.iter().map(|word| word.chars().count()).sum()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rejection, RootPolicy};
    use crate::dictionary::WordSet;

    fn dictionary() -> WordSet {
        WordSet::from_words(["silk", "worm", "milk", "slow", "silkworm", "balloon", "ball"])
    }

    fn root(text: &str) -> RootWord {
        RootWord::new(text).unwrap()
    }

    #[test]
    fn silkworm_scenarios() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());

        assert_eq!(session.submit_candidate("silk"), Some(Verdict::Accepted));
        assert_eq!(session.used_words(), ["silk"]);

        assert_eq!(
            session.submit_candidate("silk"),
            Some(Verdict::Rejected(Rejection::DuplicateWord))
        );
        assert_eq!(
            session.submit_candidate("silkx"),
            Some(Verdict::Rejected(Rejection::LettersUnavailable))
        );
        assert_eq!(
            session.submit_candidate("zzz"),
            Some(Verdict::Rejected(Rejection::LettersUnavailable))
        );
        assert_eq!(
            session.submit_candidate("wrosm"),
            Some(Verdict::Rejected(Rejection::NotARealWord))
        );

        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn accepted_word_goes_first() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());

        session.submit_candidate("silk");
        session.submit_candidate("worm");
        let before = session.used_words().len();

        assert_eq!(session.submit_candidate("milk"), Some(Verdict::Accepted));
        assert_eq!(session.used_words().len(), before + 1);
        assert_eq!(session.used_words()[0], "milk");
        assert_eq!(session.used_words(), ["milk", "worm", "silk"]);
    }

    #[test]
    fn rejection_is_idempotent() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());
        session.submit_candidate("silk");

        let first = session.submit_candidate("wrosm");
        let second = session.submit_candidate("wrosm");
        assert_eq!(first, second);
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());

        assert_eq!(session.submit_candidate(""), None);
        assert_eq!(session.submit_candidate("   \t\n"), None);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn input_is_normalized_before_checks() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());

        assert_eq!(session.submit_candidate("  WORM\n"), Some(Verdict::Accepted));
        assert_eq!(
            session.submit_candidate("Worm"),
            Some(Verdict::Rejected(Rejection::DuplicateWord))
        );
        assert_eq!(session.used_words(), ["worm"]);
    }

    #[test]
    fn root_word_policy() {
        let dictionary = dictionary();
        let mut allow = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());
        assert_eq!(allow.submit_candidate("silkworm"), Some(Verdict::Accepted));

        let config = GameConfig::new().with_reject_root(true);
        let mut reject = GameSession::new(root("silkworm"), &dictionary, config);
        assert_eq!(reject.config().root_policy, RootPolicy::Reject);
        assert_eq!(
            reject.submit_candidate("silkworm"),
            Some(Verdict::Rejected(Rejection::SameAsRoot))
        );
        assert!(reject.used_words().is_empty());
    }

    #[test]
    fn checks_use_root_not_previous_words() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("balloons"), &dictionary, GameConfig::default());

        // "ball" and "balloon" share letters; each is checked against the full root
        assert_eq!(session.submit_candidate("ball"), Some(Verdict::Accepted));
        assert_eq!(session.submit_candidate("balloon"), Some(Verdict::Accepted));
    }

    #[test]
    fn reset_clears_words_and_sets_root() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());
        session.submit_candidate("silk");

        session.reset(root("balloons"));
        assert_eq!(session.root().text(), "balloons");
        assert!(session.used_words().is_empty());

        // "silk" cannot be spelled from the new root
        assert_eq!(
            session.submit_candidate("silk"),
            Some(Verdict::Rejected(Rejection::LettersUnavailable))
        );
        assert_eq!(session.submit_candidate("ball"), Some(Verdict::Accepted));
    }

    #[test]
    fn letter_count_sums_accepted_words() {
        let dictionary = dictionary();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());
        session.submit_candidate("silk");
        session.submit_candidate("slow");
        session.submit_candidate("wrosm");
        assert_eq!(session.letter_count(), 8);
    }

    #[test]
    fn works_with_closure_dictionary() {
        let four_letters = |word: &str| word.len() == 4;
        let mut session = GameSession::new(root("silkworm"), &four_letters, GameConfig::default());
        assert_eq!(session.submit_candidate("wrok"), Some(Verdict::Accepted));
        assert_eq!(
            session.submit_candidate("wro"),
            Some(Verdict::Rejected(Rejection::NotARealWord))
        );
    }

    #[test]
    fn embedded_dictionary_accepts_everyday_words() {
        let dictionary = WordSet::embedded();
        let mut session = GameSession::new(root("silkworm"), &dictionary, GameConfig::default());
        for word in ["swim", "risk", "owls", "works", "swirl", "irk", "lows", "milks"] {
            assert_eq!(
                session.submit_candidate(word),
                Some(Verdict::Accepted),
                "'{word}' should be accepted on silkworm"
            );
        }
        assert_eq!(
            session.submit_candidate("wrosm"),
            Some(Verdict::Rejected(Rejection::NotARealWord))
        );
        assert_eq!(session.used_words().len(), 8);
    }
}
