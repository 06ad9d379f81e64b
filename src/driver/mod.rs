//! Playing whole games between two policies.
//!
//! ## Overview
//!
//! - **GameDriver**: seats two `MovePolicy` values and alternates them over
//!   a `RulesEngine` until the game ends or the move ceiling is hit
//! - **GameSummary**: final state, move and pass counts, and the result
//!
//! ## Usage
//!
//! ```rust
//! use kalah::core::GameConfig;
//! use kalah::driver::{random_pair, GameDriver};
//!
//! let config = GameConfig::default().with_seed(7);
//! let (mut p0, mut p1) = random_pair(&config);
//!
//! let summary = GameDriver::new(config).play(&mut p0, &mut p1).unwrap();
//! assert!(summary.result.is_some());
//! assert_eq!(summary.final_state.total_stones(), 48);
//! ```

pub mod game;

pub use game::{play_game, random_pair, GameDriver, GameSummary};
