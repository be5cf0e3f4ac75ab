//! Word checking command
//!
//! Plays a list of words against a fresh round and reports each verdict.

use crate::core::{RootWord, Verdict, WordError};
use crate::dictionary::Dictionary;
use crate::game::{GameConfig, GameSession};

/// Verdict for one submitted word
pub struct CheckOutcome {
    pub input: String,
    /// `None` for blank input
    pub verdict: Option<Verdict>,
}

/// Result of checking a list of words
pub struct CheckResult {
    pub root: String,
    pub outcomes: Vec<CheckOutcome>,
    pub accepted: usize,
}

/// Submit `words` in order to a new session on `root`
///
/// Later words see the earlier accepted ones, so repeats are reported as duplicates.
///
/// # Errors
///
/// Returns an error if the root is empty or contains anything but letters.
pub fn check_words<D: Dictionary + ?Sized>(
    root: &str,
    words: &[String],
    dictionary: &D,
    config: GameConfig,
) -> Result<CheckResult, WordError> {
    let root = RootWord::new(root)?;
    let mut session = GameSession::new(root, dictionary, config);

    let outcomes: Vec<CheckOutcome> = words
        .iter()
        .map(|input| CheckOutcome {
            input: input.clone(),
            verdict: session.submit_candidate(input),
        })
        .collect();

    Ok(CheckResult {
        root: session.root().text().to_string(),
        outcomes,
        accepted: session.used_words().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordSet;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn reports_each_verdict() {
        let dictionary = WordSet::from_words(["silk", "worm"]);
        let result = check_words(
            "silkworm",
            &words(&["silk", "silk", "silkx", "wrosm", "", "WORM"]),
            &dictionary,
            GameConfig::default(),
        )
        .unwrap();

        let verdicts: Vec<Option<Verdict>> = result.outcomes.iter().map(|o| o.verdict).collect();
        assert_eq!(
            verdicts,
            vec![
                Some(Verdict::Accepted),
                Some(Verdict::Rejected(Rejection::DuplicateWord)),
                Some(Verdict::Rejected(Rejection::LettersUnavailable)),
                Some(Verdict::Rejected(Rejection::NotARealWord)),
                None,
                Some(Verdict::Accepted),
            ]
        );
        assert_eq!(result.accepted, 2);
        assert_eq!(result.outcomes[5].input, "WORM");
    }

    #[test]
    fn honours_root_policy() {
        let dictionary = WordSet::from_words(["silkworm"]);
        let config = GameConfig::new().with_reject_root(true);
        let result = check_words("silkworm", &words(&["silkworm"]), &dictionary, config).unwrap();
        assert_eq!(
            result.outcomes[0].verdict,
            Some(Verdict::Rejected(Rejection::SameAsRoot))
        );
        assert_eq!(result.accepted, 0);
    }

    #[test]
    fn invalid_root() {
        let dictionary = WordSet::default();
        let result = check_words("silk worm", &[], &dictionary, GameConfig::default());
        assert!(result.is_err());
    }
}
