//! Adversarial move selection for Kalah.
//!
//! ## Overview
//!
//! - **Policies**: random, minimax and alpha-beta behind one `MovePolicy`
//!   trait, so a driver can seat any of them in either chair.
//! - **Fixed-root scoring**: every leaf is scored as the store difference
//!   from the searching player's side.
//! - **One evaluator**: minimax and alpha-beta share a single recursive
//!   function; pruning is a configuration flag and never changes the
//!   chosen move.
//!
//! ## Usage
//!
//! ```rust
//! use kalah::core::{KalahState, PlayerId};
//! use kalah::search::{AlphaBetaPolicy, MinimaxPolicy, MovePolicy};
//!
//! let state = KalahState::standard_start(4);
//! let legal = state.legal_moves(None);
//!
//! let mut minimax = MinimaxPolicy::new(3);
//! let mut alpha_beta = AlphaBetaPolicy::new(3);
//!
//! let a = minimax.choose_move(&state, &legal, PlayerId::ZERO);
//! let b = alpha_beta.choose_move(&state, &legal, PlayerId::ZERO);
//! assert_eq!(a, b);
//! assert!(alpha_beta.stats().nodes <= minimax.stats().nodes);
//! ```

pub mod config;
pub mod eval;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use config::SearchConfig;
pub use eval::{utility, Score};
pub use minimax::DepthSearch;
pub use policy::{AlphaBetaPolicy, MinimaxPolicy, MovePolicy, RandomPolicy};
pub use stats::SearchStats;
