//! Word Scramble
//!
//! Find as many words as you can hidden inside a root word. Each candidate must be new,
//! spelled only from the root's letters, and a real English word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, Verdict};
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::game::{GameConfig, GameSession};
//!
//! let dictionary = WordSet::embedded();
//! let root = RootWord::new("silkworm").unwrap();
//! let mut session = GameSession::new(root, &dictionary, GameConfig::default());
//!
//! assert_eq!(session.submit_candidate("silk"), Some(Verdict::Accepted));
//! assert_eq!(session.used_words(), ["silk"]);
//! ```

// Core domain types
pub mod core;

// Real-word lookups
pub mod dictionary;

// Round state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
