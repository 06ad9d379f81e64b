//! Game configuration.
//!
//! The board layout is fixed (six pits per side). What a game may vary:
//! - stones placed in each pit at the start
//! - whether landing in your own store grants another move
//! - the move ceiling that guarantees a driven game terminates
//! - the seed for any randomised policies

use serde::{Deserialize, Serialize};

/// Default stones per pit for the standard start.
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Default move ceiling for a driven game.
pub const DEFAULT_MAX_MOVES: usize = 500;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stones in each row pit at the start.
    pub stones_per_pit: u32,

    /// Grant an extra turn when the last stone lands in the mover's store.
    pub continuation_rule: bool,

    /// Maximum moves before a driven game stops, terminal or not.
    /// Passes do not count.
    pub max_moves: usize,

    /// Seed for random policies created from this config.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            continuation_rule: false,
            max_moves: DEFAULT_MAX_MOVES,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set stones per pit.
    #[must_use]
    pub fn with_stones_per_pit(mut self, stones: u32) -> Self {
        self.stones_per_pit = stones;
        self
    }

    /// Enable or disable the extra-turn rule.
    #[must_use]
    pub fn with_continuation_rule(mut self, enabled: bool) -> Self {
        self.continuation_rule = enabled;
        self
    }

    /// Set the move ceiling.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.stones_per_pit, 4);
        assert!(!config.continuation_rule);
        assert_eq!(config.max_moves, 500);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_stones_per_pit(3)
            .with_continuation_rule(true)
            .with_max_moves(50)
            .with_seed(7);

        assert_eq!(config.stones_per_pit, 3);
        assert!(config.continuation_rule);
        assert_eq!(config.max_moves, 50);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_continuation_rule(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
