//! The Kalah move: sow, capture, harvest, advance the turn.

use tracing::debug;

use crate::core::{Board, KalahError, KalahState, PlayerId, Result, Stones, BOARD_SLOTS, SOWING_LAP};

/// Apply one move, returning the resulting state.
///
/// `pit` must be in `state.legal_moves(None)`; anything else is rejected
/// with [`KalahError::IllegalMove`] and the state is left as it was.
///
/// With `continuation_rule` on, a last stone landing in the mover's own
/// store keeps the turn with the mover.
///
/// ```
/// use kalah::core::{KalahState, PlayerId};
/// use kalah::rules::apply_move;
///
/// let start = KalahState::standard_start(4);
/// let next = apply_move(&start, 2, true).unwrap();
///
/// assert_eq!(next.pits(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
/// assert_eq!(next.player_to_move(), PlayerId::ZERO);
/// ```
pub fn apply_move(state: &KalahState, pit: usize, continuation_rule: bool) -> Result<KalahState> {
    if !state.is_legal(pit) {
        let player = state.player_to_move();
        debug!(pit, %player, "rejected illegal move");
        return Err(KalahError::IllegalMove { pit, player });
    }
    Ok(sow(state, pit, continuation_rule))
}

/// Apply a move already known to be legal.
///
/// Search expands children straight from `legal_moves`, so it skips the
/// check and the `Result`.
pub(crate) fn sow(state: &KalahState, pit: usize, continuation_rule: bool) -> KalahState {
    debug_assert!(state.is_legal(pit), "sow called with illegal pit {pit}");

    let player = state.player_to_move();
    let skipped = Board::store_index(player.opponent());
    let mut board = *state.board();

    // Every full lap drops one stone in each slot but the skipped store and
    // ends back on `pit`; only the remainder needs walking.
    let stones = board.take(pit);
    let lap = SOWING_LAP as Stones;
    let (laps, mut rest) = (stones / lap, stones % lap);
    if laps > 0 {
        for slot in (0..BOARD_SLOTS).filter(|&slot| slot != skipped) {
            board.add(slot, laps);
        }
    }

    let mut last = pit;
    while rest > 0 {
        last = Board::next_slot(last);
        if last == skipped {
            continue;
        }
        board.add(last, 1);
        rest -= 1;
    }

    let captured = capture(&mut board, player, last);

    let game_over = PlayerId::both().any(|p| board.row_sum(p) == 0);
    if game_over {
        board.sweep_rows();
    }

    let extra_turn = continuation_rule && last == Board::store_index(player);
    let next = if game_over || extra_turn {
        player
    } else {
        player.opponent()
    };

    KalahState::from_parts(board, next, captured, game_over)
}

/// Capture when the last stone made an own-row pit go from 0 to 1 and the
/// pit across holds stones. Returns whether a capture happened.
fn capture(board: &mut Board, player: PlayerId, last: usize) -> bool {
    if Board::row_owner(last) != Some(player) || board[last] != 1 {
        return false;
    }
    let Some(across) = Board::opposite(last) else {
        return false;
    };
    if board[across] == 0 {
        return false;
    }

    let taken = board.take(across) + board.take(last);
    board.add(Board::store_index(player), taken);
    true
}
