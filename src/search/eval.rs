//! Leaf evaluation.

use crate::core::{KalahState, PlayerId};

/// Search score. Larger is better for the maximizing player.
pub type Score = i64;

/// Store difference from `max_player`'s point of view.
///
/// This is the only evaluation the search uses, both at terminal states and
/// at the depth cutoff.
#[must_use]
pub fn utility(state: &KalahState, max_player: PlayerId) -> Score {
    state.score(max_player) as Score - state.score(max_player.opponent()) as Score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_start_is_zero() {
        let state = KalahState::standard_start(4);
        assert_eq!(utility(&state, PlayerId::ZERO), 0);
        assert_eq!(utility(&state, PlayerId::ONE), 0);
    }

    #[test]
    fn test_utility_is_antisymmetric() {
        let state = KalahState::from_pits(
            [1, 0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 2, 4],
            PlayerId::ONE,
        );
        assert_eq!(utility(&state, PlayerId::ZERO), 5);
        assert_eq!(utility(&state, PlayerId::ONE), -5);
    }

    #[test]
    fn test_utility_ignores_row_stones() {
        let state = KalahState::from_pits(
            [20, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 3],
            PlayerId::ZERO,
        );
        assert_eq!(utility(&state, PlayerId::ZERO), 0);
    }
}
