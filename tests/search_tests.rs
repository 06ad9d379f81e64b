//! Search integration tests: minimax and alpha-beta agreement, determinism
//! and policy legality.

use kalah::core::{KalahState, PlayerId};
use kalah::rules::apply_move;
use kalah::search::{
    utility, AlphaBetaPolicy, DepthSearch, MinimaxPolicy, MovePolicy, RandomPolicy, SearchConfig,
};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A non-terminal position with at least one legal move, reached through
/// legal play from a standard start.
fn arb_playable() -> impl Strategy<Value = KalahState> {
    (1u32..6, proptest::collection::vec(0usize..64, 0..40)).prop_filter_map(
        "game over or mover must pass",
        |(stones, choices)| {
            let mut state = KalahState::standard_start(stones);
            for choice in choices {
                let legal = state.legal_moves(None);
                if state.is_game_over() || legal.is_empty() {
                    break;
                }
                state = apply_move(&state, legal[choice % legal.len()], false).unwrap();
            }
            let playable = !state.is_game_over() && !state.legal_moves(None).is_empty();
            playable.then_some(state)
        },
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_depth_one_agree_on_start() {
    let state = KalahState::standard_start(4);
    let legal = state.legal_moves(Some(PlayerId::ZERO));

    let a = MinimaxPolicy::new(1).choose_move(&state, &legal, PlayerId::ZERO);
    let b = AlphaBetaPolicy::new(1).choose_move(&state, &legal, PlayerId::ZERO);

    assert_eq!(a, b);
    assert!(a.is_some_and(|pit| legal.contains(&pit)));
}

#[test]
fn test_utility_is_fixed_to_root_player() {
    let state = KalahState::from_pits(
        [0, 0, 0, 0, 0, 1, 7, 1, 0, 0, 0, 0, 0, 3],
        PlayerId::ONE,
    );
    assert_eq!(utility(&state, PlayerId::ZERO), 4);
    assert_eq!(utility(&state, PlayerId::ONE), -4);
}

#[test]
fn test_stats_reset_between_searches() {
    let state = KalahState::standard_start(4);
    let legal = state.legal_moves(None);
    let mut policy = AlphaBetaPolicy::new(3);

    policy.choose_move(&state, &legal, PlayerId::ZERO);
    let first = policy.stats().nodes;
    policy.choose_move(&state, &legal, PlayerId::ZERO);

    assert_eq!(policy.stats().nodes, first);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_alpha_beta_matches_minimax(state in arb_playable(), depth in 1u32..5) {
        let legal = state.legal_moves(None);
        let player = state.player_to_move();

        let mut plain = DepthSearch::new(SearchConfig::minimax(depth));
        let mut pruned = DepthSearch::new(SearchConfig::alpha_beta(depth));

        prop_assert_eq!(
            plain.best_move(&state, &legal, player),
            pruned.best_move(&state, &legal, player)
        );
        prop_assert!(pruned.stats().nodes <= plain.stats().nodes);
        prop_assert_eq!(plain.evaluate(&state, player), pruned.evaluate(&state, player));
    }

    #[test]
    fn prop_search_is_deterministic(state in arb_playable(), depth in 1u32..4) {
        let legal = state.legal_moves(None);
        let player = state.player_to_move();

        let a = AlphaBetaPolicy::new(depth).choose_move(&state, &legal, player);
        let b = AlphaBetaPolicy::new(depth).choose_move(&state, &legal, player);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_policies_pick_legal_moves(state in arb_playable(), seed in any::<u64>()) {
        let legal = state.legal_moves(None);
        let player = state.player_to_move();

        let picks = [
            RandomPolicy::new(seed).choose_move(&state, &legal, player),
            MinimaxPolicy::new(2).choose_move(&state, &legal, player),
            AlphaBetaPolicy::new(2).choose_move(&state, &legal, player),
        ];
        for pick in picks {
            prop_assert!(pick.is_some_and(|pit| legal.contains(&pit)));
        }
    }
}
