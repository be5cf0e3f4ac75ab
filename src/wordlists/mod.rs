//! Word lists for the game
//!
//! Provides embedded start words and dictionary compiled into the binary, plus
//! loading from user files and random root selection.

mod embedded;
pub mod loader;
mod picker;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use picker::{FALLBACK_ROOT, RootPicker, fallback_root};

use tracing::{info, warn};

/// Start words from `path`, or the embedded list when no path is given or loading fails
///
/// A broken start-word file is not fatal: it is logged and the embedded list is used.
#[must_use]
pub fn start_words_or_embedded(path: Option<&str>) -> Vec<String> {
    let Some(path) = path else {
        return loader::words_from_slice(START_WORDS);
    };

    match loader::load_from_file(path) {
        Ok(words) => {
            info!(path, count = words.len(), "loaded start words");
            words
        }
        Err(error) => {
            warn!(%error, "falling back to embedded start words");
            loader::words_from_slice(START_WORDS)
        }
    }
}
