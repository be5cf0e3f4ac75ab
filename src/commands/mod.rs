//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, RootScore, analyze_roots, score_root};
pub use check::{CheckOutcome, CheckResult, check_words};
pub use simple::{LineCommand, play_lines, run_simple};
pub use solve::{SolveConfig, SolveResult, find_words, solve_root};
