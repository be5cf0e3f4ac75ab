//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_check_result, print_solve_result, print_used_words,
    print_verdict,
};
