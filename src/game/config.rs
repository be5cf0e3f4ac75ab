//! Game configuration

use crate::core::RootPolicy;

/// Settings that shape a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Whether the root word itself counts as an answer
    pub root_policy: RootPolicy,
    /// Seed for root selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root_policy: RootPolicy::Allow,
            seed: None,
        }
    }

    /// Turn the root-exclusion rule on or off
    #[must_use]
    pub const fn with_reject_root(mut self, reject: bool) -> Self {
        self.root_policy = if reject {
            RootPolicy::Reject
        } else {
            RootPolicy::Allow
        };
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
