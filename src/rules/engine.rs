//! Rules engine trait and the standard Kalah rules.
//!
//! The driver talks to the rules only through `RulesEngine`:
//! - What the opening position is
//! - Which pits are legal
//! - How a move changes the state
//! - Whether the game is over, and who won

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, KalahState, MoveList, PlayerId, Result};

use super::sowing::apply_move;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has more stones in store.
    Winner(PlayerId),
    /// Stores are level.
    Draw,
}

impl GameResult {
    /// Decide the result of a finished game, or `None` while it is running.
    #[must_use]
    pub fn of(state: &KalahState) -> Option<Self> {
        if !state.is_game_over() {
            return None;
        }
        let zero = state.score(PlayerId::ZERO);
        let one = state.score(PlayerId::ONE);
        Some(match zero.cmp(&one) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::ZERO),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::ONE),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: must reject pits outside `legal_moves` and never mutate
///   its input
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// The opening position.
    fn initial_state(&self) -> KalahState;

    /// Legal pits for the player to move.
    ///
    /// Returns empty if that player has to pass.
    fn legal_moves(&self, state: &KalahState) -> MoveList {
        state.legal_moves(None)
    }

    /// Apply a move, producing a new state.
    fn apply_move(&self, state: &KalahState, pit: usize) -> Result<KalahState>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &KalahState) -> Option<GameResult> {
        GameResult::of(state)
    }
}

/// Standard Kalah rules with a configurable opening and extra-turn rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kalah {
    stones_per_pit: u32,
    continuation_rule: bool,
}

impl Kalah {
    /// Rules with the given stones per pit and extra-turn setting.
    #[must_use]
    pub fn new(stones_per_pit: u32, continuation_rule: bool) -> Self {
        Self {
            stones_per_pit,
            continuation_rule,
        }
    }

    /// Rules described by a game config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.stones_per_pit, config.continuation_rule)
    }

    /// Whether landing in your own store grants another move.
    #[must_use]
    pub fn continuation_rule(&self) -> bool {
        self.continuation_rule
    }
}

impl Default for Kalah {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl RulesEngine for Kalah {
    fn initial_state(&self) -> KalahState {
        KalahState::standard_start(self.stones_per_pit)
    }

    fn apply_move(&self, state: &KalahState, pit: usize) -> Result<KalahState> {
        apply_move(state, pit, self.continuation_rule)
    }
}
