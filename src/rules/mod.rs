//! Kalah rules.
//!
//! `apply_move` is the whole transition function: sowing, capture,
//! end-of-game harvest and turn advance. `RulesEngine` wraps it for callers
//! that drive complete games.

pub mod engine;
pub mod sowing;

pub use engine::{GameResult, Kalah, RulesEngine};
pub use sowing::apply_move;
