//! Player identification.
//!
//! Kalah is strictly two-player: `PlayerId(0)` owns pits 0-5 and store 6,
//! `PlayerId(1)` owns pits 7-12 and store 13.

use serde::{Deserialize, Serialize};

/// Player identifier, either 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (moves first from the standard start).
    pub const ZERO: PlayerId = PlayerId(0);

    /// The second player.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a player ID.
    ///
    /// Any odd value maps to player 1 and any even value to player 0,
    /// so a `PlayerId` is always one of the two seats.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id & 1)
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players, in seat order.
    ///
    /// ```
    /// use kalah::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::ZERO, PlayerId::ONE]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ZERO, Self::ONE].into_iter()
    }
}

impl From<u8> for PlayerId {
    fn from(id: u8) -> Self {
        Self::new(id)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
