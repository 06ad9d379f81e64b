use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the rules engine and the game driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KalahError {
    /// The pit is not in the mover's legal move list: it is a store, on the
    /// other row, empty, out of range, or the game is already over.
    #[error("Illegal move: pit {pit} for {player}")]
    IllegalMove { pit: usize, player: PlayerId },

    /// A policy returned no move although the mover had `legal` moves.
    /// Kalah has no voluntary pass.
    #[error("No move chosen by {player} with {legal} legal moves")]
    NoMoveChosen { player: PlayerId, legal: usize },
}

/// Convenience Result type for rules and driver operations.
pub type Result<T> = std::result::Result<T, KalahError>;
