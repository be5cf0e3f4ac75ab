//! Game state
//!
//! A [`GameSession`] is a plain value owned by whichever front end is running.

mod config;
mod session;

pub use config::GameConfig;
pub use session::GameSession;
