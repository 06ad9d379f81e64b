//! # kalah
//!
//! A Kalah (six-pit Mancala) rules engine with fixed-depth adversarial
//! search.
//!
//! ## Design Principles
//!
//! 1. **Value States**: `KalahState` is `Copy`. Every transition returns a
//!    new state and never touches its input, so search frames hold plain
//!    values.
//!
//! 2. **One Transition Function**: `rules::apply_move` does sowing, capture,
//!    the end-of-game harvest and the turn advance. Everything else reads
//!    its output.
//!
//! 3. **Injected Randomness**: random play draws from a seedable `GameRng`
//!    owned by the policy, so every game is reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: Players, board layout, state, configuration, RNG, errors
//! - `rules`: The transition function and the `RulesEngine` trait
//! - `search`: Utility, minimax, alpha-beta and random policies
//! - `driver`: Plays two policies against each other

pub mod core;
pub mod driver;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameRng, GameRngState, KalahError, KalahState, MoveList, PlayerId, Result,
    Stones,
};

pub use crate::rules::{apply_move, GameResult, Kalah, RulesEngine};

pub use crate::search::{
    utility, AlphaBetaPolicy, DepthSearch, MinimaxPolicy, MovePolicy, RandomPolicy, Score,
    SearchConfig, SearchStats,
};

pub use crate::driver::{play_game, random_pair, GameDriver, GameSummary};
