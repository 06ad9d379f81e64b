//! Fixed 14-slot Kalah board.
//!
//! ## Layout
//!
//! ```text
//!         12 11 10  9  8  7
//!     13                     6
//!          0  1  2  3  4  5
//! ```
//!
//! Pits 0-5 and store 6 belong to player 0; pits 7-12 and store 13 belong
//! to player 1. Sowing runs in increasing index order, wrapping at 14.
//! All index arithmetic lives here so the rules never spell out 6, 13 or
//! `12 - i` directly.

use serde::{Deserialize, Serialize};
use std::ops::{Index, Range};

use super::player::PlayerId;

/// Pits on each player's row.
pub const PITS_PER_SIDE: usize = 6;

/// Total slots on the board: two rows plus two stores.
pub const BOARD_SLOTS: usize = 2 * PITS_PER_SIDE + 2;

/// Slots a single lap of sowing visits: everything but the opponent's store.
pub const SOWING_LAP: usize = BOARD_SLOTS - 1;

/// Stone count held by one slot.
///
/// Openings take `u32` stones per pit; counting in `u64` keeps every slot and
/// every sum of a `u32` opening in range.
pub type Stones = u64;

/// Stone counts for every pit and store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [Stones; BOARD_SLOTS],
}

impl Board {
    /// Create a board from raw slot counts.
    #[must_use]
    pub const fn from_pits(pits: [Stones; BOARD_SLOTS]) -> Self {
        Self { pits }
    }

    /// Board with `stones_per_pit` in every row pit and empty stores.
    #[must_use]
    pub fn standard(stones_per_pit: u32) -> Self {
        let mut pits = [Stones::from(stones_per_pit); BOARD_SLOTS];
        for player in PlayerId::both() {
            pits[Self::store_index(player)] = 0;
        }
        Self { pits }
    }

    /// Raw slot counts.
    #[must_use]
    pub fn pits(&self) -> &[Stones; BOARD_SLOTS] {
        &self.pits
    }

    /// Index range of a player's row pits.
    #[must_use]
    pub const fn row_range(player: PlayerId) -> Range<usize> {
        let start = player.index() * (PITS_PER_SIDE + 1);
        start..start + PITS_PER_SIDE
    }

    /// Index of a player's store.
    #[must_use]
    pub const fn store_index(player: PlayerId) -> usize {
        player.index() * (PITS_PER_SIDE + 1) + PITS_PER_SIDE
    }

    /// Whether `idx` is either player's store.
    #[must_use]
    pub const fn is_store(idx: usize) -> bool {
        idx == Self::store_index(PlayerId::ZERO) || idx == Self::store_index(PlayerId::ONE)
    }

    /// Owner of a row pit, or `None` for stores and out-of-range indices.
    #[must_use]
    pub fn row_owner(idx: usize) -> Option<PlayerId> {
        PlayerId::both().find(|&p| Self::row_range(p).contains(&idx))
    }

    /// The pit directly across the board from row pit `idx`.
    ///
    /// Returns `None` for stores and out-of-range indices.
    #[must_use]
    pub fn opposite(idx: usize) -> Option<usize> {
        Self::row_owner(idx).map(|_| 2 * PITS_PER_SIDE - idx)
    }

    /// The slot sowing visits after `idx`.
    #[must_use]
    pub const fn next_slot(idx: usize) -> usize {
        (idx + 1) % BOARD_SLOTS
    }

    /// A player's row pits.
    #[must_use]
    pub fn row(&self, player: PlayerId) -> &[Stones] {
        &self.pits[Self::row_range(player)]
    }

    /// Stones remaining on a player's row.
    #[must_use]
    pub fn row_sum(&self, player: PlayerId) -> Stones {
        self.row(player).iter().sum()
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> Stones {
        self.pits[Self::store_index(player)]
    }

    /// Total stones on the board, stores included.
    #[must_use]
    pub fn total(&self) -> Stones {
        self.pits.iter().sum()
    }

    /// Empty a slot, returning what it held.
    pub(crate) fn take(&mut self, idx: usize) -> Stones {
        std::mem::take(&mut self.pits[idx])
    }

    /// Add stones to a slot.
    pub(crate) fn add(&mut self, idx: usize, stones: Stones) {
        self.pits[idx] += stones;
    }

    /// Move every row stone into its owner's store.
    pub(crate) fn sweep_rows(&mut self) {
        for player in PlayerId::both() {
            let swept: Stones = Self::row_range(player).map(|i| self.take(i)).sum();
            self.add(Self::store_index(player), swept);
        }
    }
}

impl Index<usize> for Board {
    type Output = Stones;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.pits[idx]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let top: Vec<String> = Self::row_range(PlayerId::ONE)
            .rev()
            .map(|i| format!("{:>3}", self.pits[i]))
            .collect();
        let bottom: Vec<String> = Self::row_range(PlayerId::ZERO)
            .map(|i| format!("{:>3}", self.pits[i]))
            .collect();

        writeln!(f, "     {}", top.join(""))?;
        writeln!(
            f,
            "{:>3}{:>width$}",
            self.store(PlayerId::ONE),
            self.store(PlayerId::ZERO),
            width = 3 * PITS_PER_SIDE + 4
        )?;
        write!(f, "     {}", bottom.join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_indices() {
        assert_eq!(Board::row_range(PlayerId::ZERO), 0..6);
        assert_eq!(Board::row_range(PlayerId::ONE), 7..13);
        assert_eq!(Board::store_index(PlayerId::ZERO), 6);
        assert_eq!(Board::store_index(PlayerId::ONE), 13);
        assert!(Board::is_store(6));
        assert!(Board::is_store(13));
        assert!(!Board::is_store(0));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Board::opposite(0), Some(12));
        assert_eq!(Board::opposite(5), Some(7));
        assert_eq!(Board::opposite(7), Some(5));
        assert_eq!(Board::opposite(12), Some(0));
        assert_eq!(Board::opposite(6), None);
        assert_eq!(Board::opposite(13), None);
        assert_eq!(Board::opposite(14), None);
    }

    #[test]
    fn test_row_owner() {
        assert_eq!(Board::row_owner(3), Some(PlayerId::ZERO));
        assert_eq!(Board::row_owner(9), Some(PlayerId::ONE));
        assert_eq!(Board::row_owner(6), None);
        assert_eq!(Board::row_owner(13), None);
    }

    #[test]
    fn test_next_slot_wraps() {
        assert_eq!(Board::next_slot(5), 6);
        assert_eq!(Board::next_slot(13), 0);
    }

    #[test]
    fn test_standard_board() {
        let board = Board::standard(4);
        assert_eq!(board.pits(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(board.total(), 48);
        assert_eq!(board.row_sum(PlayerId::ONE), 24);
    }

    #[test]
    fn test_largest_opening_sums_in_range() {
        let board = Board::standard(u32::MAX);
        let per_pit = Stones::from(u32::MAX);
        assert_eq!(board.row_sum(PlayerId::ZERO), 6 * per_pit);
        assert_eq!(board.total(), 12 * per_pit);
    }

    #[test]
    fn test_sweep_rows_credits_own_store() {
        let mut board = Board::from_pits([1, 0, 0, 0, 0, 2, 10, 0, 3, 0, 0, 0, 0, 5]);
        board.sweep_rows();

        assert_eq!(board.row_sum(PlayerId::ZERO), 0);
        assert_eq!(board.row_sum(PlayerId::ONE), 0);
        assert_eq!(board.store(PlayerId::ZERO), 13);
        assert_eq!(board.store(PlayerId::ONE), 8);
    }

    #[test]
    fn test_display() {
        let rendered = Board::standard(4).to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.lines().next().unwrap().contains("  4  4"));
    }
}
