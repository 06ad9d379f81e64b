//! Kalah game state.
//!
//! `KalahState` is a small `Copy` value: the board, whose turn it is, and
//! two flags describing the most recent move. Every transition builds a new
//! state, so one parent can feed any number of search branches.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Stones, BOARD_SLOTS, PITS_PER_SIDE};
use super::config::DEFAULT_STONES_PER_PIT;
use super::player::PlayerId;

/// Legal pit indices for one player, in increasing order.
///
/// A row has at most six playable pits, so this never spills to the heap.
pub type MoveList = SmallVec<[usize; PITS_PER_SIDE]>;

/// Full Kalah game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KalahState {
    board: Board,
    player_to_move: PlayerId,
    last_move_was_capture: bool,
    game_over: bool,
}

impl KalahState {
    /// Standard opening: `stones_per_pit` in each row pit, empty stores,
    /// player 0 to move.
    #[must_use]
    pub fn standard_start(stones_per_pit: u32) -> Self {
        Self {
            board: Board::standard(stones_per_pit),
            player_to_move: PlayerId::ZERO,
            last_move_was_capture: false,
            game_over: false,
        }
    }

    /// Build an arbitrary position, with both flags cleared.
    ///
    /// Useful for setting up endgames and capture scenarios. The position is
    /// taken as given: a row may already be empty without `game_over` set.
    #[must_use]
    pub fn from_pits(pits: [Stones; BOARD_SLOTS], player_to_move: PlayerId) -> Self {
        Self {
            board: Board::from_pits(pits),
            player_to_move,
            last_move_was_capture: false,
            game_over: false,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        player_to_move: PlayerId,
        last_move_was_capture: bool,
        game_over: bool,
    ) -> Self {
        Self {
            board,
            player_to_move,
            last_move_was_capture,
            game_over,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Raw slot counts.
    #[must_use]
    pub fn pits(&self) -> &[Stones; BOARD_SLOTS] {
        self.board.pits()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn player_to_move(&self) -> PlayerId {
        self.player_to_move
    }

    /// Whether the move that produced this state captured.
    #[must_use]
    pub fn last_move_was_capture(&self) -> bool {
        self.last_move_was_capture
    }

    /// Whether the game has ended and rows have been harvested.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Stones {
        self.board.store(player)
    }

    /// Total stones on the board.
    #[must_use]
    pub fn total_stones(&self) -> Stones {
        self.board.total()
    }

    /// Legal pits for `player`, or for the player to move when `None`.
    ///
    /// An empty list means that player cannot sow and must pass.
    #[must_use]
    pub fn legal_moves(&self, player: Option<PlayerId>) -> MoveList {
        let player = player.unwrap_or(self.player_to_move);
        Board::row_range(player)
            .filter(|&i| self.board[i] > 0)
            .collect()
    }

    /// Whether `pit` is a legal move for the player to move.
    #[must_use]
    pub fn is_legal(&self, pit: usize) -> bool {
        !self.game_over
            && Board::row_owner(pit) == Some(self.player_to_move)
            && self.board[pit] > 0
    }

    /// Copy of this state with the turn handed to the other player.
    ///
    /// Used when the side to move has no stones on its row.
    #[must_use]
    pub fn passed(&self) -> Self {
        Self {
            player_to_move: self.player_to_move.opponent(),
            ..*self
        }
    }
}

impl Default for KalahState {
    fn default() -> Self {
        Self::standard_start(DEFAULT_STONES_PER_PIT)
    }
}

impl std::fmt::Display for KalahState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        if self.game_over {
            write!(f, "game over")
        } else {
            write!(f, "{} to move", self.player_to_move)
        }
    }
}
