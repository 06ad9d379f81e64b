//! Depth-limited search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for fixed-depth minimax search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to search below the root.
    ///
    /// The root always expands one ply, so 0 behaves like 1. There is no
    /// unbounded setting: every search stops at this depth even when the
    /// game would run on.
    pub depth: u32,

    /// Prune with alpha-beta windows. Never changes the chosen move.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Plain minimax to `depth` plies.
    #[must_use]
    pub fn minimax(depth: u32) -> Self {
        Self {
            depth,
            pruning: false,
        }
    }

    /// Alpha-beta to `depth` plies.
    #[must_use]
    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
        }
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable pruning.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
