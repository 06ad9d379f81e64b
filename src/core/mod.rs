//! Core types: players, board, state, configuration, RNG, errors.
//!
//! Everything here is plain data. The move rules live in `rules`; the
//! search policies in `search`.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Stones, BOARD_SLOTS, PITS_PER_SIDE, SOWING_LAP};
pub use config::{GameConfig, DEFAULT_MAX_MOVES, DEFAULT_STONES_PER_PIT};
pub use error::{KalahError, Result};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use state::{KalahState, MoveList};
