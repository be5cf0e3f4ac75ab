//! Root analysis - how rich is each start word?
//!
//! Counts the findable words for every start word in parallel and summarizes the results.

use super::solve::find_words;
use crate::core::RootWord;
use crate::dictionary::WordSet;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::trace;

/// Findable words for a single root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootScore {
    pub root: String,
    pub words: usize,
    pub longest: Option<String>,
}

/// Summary over all analyzed roots
#[derive(Debug)]
pub struct AnalysisResult {
    pub roots_tested: usize,
    pub average_words: f64,
    /// Richest roots, most words first
    pub best: Vec<RootScore>,
    /// Poorest roots, fewest words first
    pub worst: Vec<RootScore>,
    pub duration: Duration,
}

/// Number of roots listed at each end of the ranking
const RANKING_SIZE: usize = 5;

/// Score one root
#[must_use]
pub fn score_root(root: &RootWord, dictionary: &WordSet) -> RootScore {
    let words = find_words(root, dictionary, 1, false);
    RootScore {
        root: root.text().to_string(),
        words: words.len(),
        longest: words.into_iter().next(),
    }
}

/// Analyze start words against the dictionary
///
/// Invalid roots are skipped. `limit` caps how many roots are scored.
pub fn analyze_roots(
    roots: &[String],
    dictionary: &WordSet,
    limit: Option<usize>,
    show_progress: bool,
) -> AnalysisResult {
    let start = Instant::now();

    let roots: Vec<RootWord> = roots
        .iter()
        .filter_map(|root| RootWord::new(root).ok())
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut scores: Vec<RootScore> = roots
        .par_iter()
        .map(|root| {
            let score = score_root(root, dictionary);
            trace!(root = %score.root, words = score.words, "root scored");
            pb.inc(1);
            score
        })
        .collect();

    pb.finish_with_message("Complete!");

    let roots_tested = scores.len();
    let total_words: usize = scores.iter().map(|s| s.words).sum();
    let average_words = if roots_tested > 0 {
        total_words as f64 / roots_tested as f64
    } else {
        0.0
    };

    scores.sort_by(|a, b| b.words.cmp(&a.words).then_with(|| a.root.cmp(&b.root)));
    let best: Vec<RootScore> = scores.iter().take(RANKING_SIZE).cloned().collect();
    let worst: Vec<RootScore> = scores.iter().rev().take(RANKING_SIZE).cloned().collect();

    AnalysisResult {
        roots_tested,
        average_words,
        best,
        worst,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::START_WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> WordSet {
        WordSet::from_words(["silk", "worm", "milk", "ball", "loon", "balloon", "dab"])
    }

    #[test]
    fn scores_single_root() {
        let root = RootWord::new("silkworm").unwrap();
        let score = score_root(&root, &dictionary());
        assert_eq!(score.words, 3);
        assert_eq!(score.longest.as_deref(), Some("milk"));
    }

    #[test]
    fn ranks_roots() {
        let roots = words_from_slice(&["silkworm", "balloons", "zzz"]);
        let result = analyze_roots(&roots, &dictionary(), None, false);

        assert_eq!(result.roots_tested, 3);
        assert_eq!(result.best[0].root, "balloons");
        assert_eq!(result.best[0].longest.as_deref(), Some("balloon"));
        assert_eq!(result.worst[0].root, "zzz");
        assert_eq!(result.worst[0].words, 0);
        assert!((result.average_words - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_invalid_roots_and_limits() {
        let roots = words_from_slice(&["", "b4d", "silkworm", "balloons"]);
        let result = analyze_roots(&roots, &dictionary(), Some(1), false);
        assert_eq!(result.roots_tested, 1);
        assert_eq!(result.best[0].root, "silkworm");
    }

    #[test]
    fn empty_input() {
        let result = analyze_roots(&[], &dictionary(), None, false);
        assert_eq!(result.roots_tested, 0);
        assert!(result.best.is_empty());
        assert!(result.average_words.abs() < f64::EPSILON);
    }

    #[test]
    fn every_start_word_has_answers() {
        let roots = words_from_slice(START_WORDS);
        let result = analyze_roots(&roots, &WordSet::embedded(), None, false);
        assert_eq!(result.roots_tested, START_WORDS.len());
        assert!(result.worst.iter().all(|score| score.words > 0));
    }
}
