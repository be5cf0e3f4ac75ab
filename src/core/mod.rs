//! Core domain types for the word game
//!
//! Pure types and functions: normalization, letter counting and the validation
//! pipeline. Nothing here touches the terminal or the filesystem.

mod letters;
mod validation;
mod word;

pub use letters::LetterPool;
pub use validation::{
    Rejection, RootPolicy, Verdict, WordValidator, is_original, is_possible, is_real_word,
};
pub use word::{Candidate, RootWord, WordError};
