//! Move-selection policies.
//!
//! Every policy answers the same question: given a state, the mover's
//! legal pits and the mover, which pit?
//! - `RandomPolicy`: uniform over legal pits, from an injected `GameRng`
//! - `MinimaxPolicy`: fixed-depth minimax
//! - `AlphaBetaPolicy`: fixed-depth minimax with alpha-beta pruning; always
//!   picks the same pit as `MinimaxPolicy` at equal depth

use crate::core::{GameRng, KalahState, PlayerId};

use super::config::SearchConfig;
use super::minimax::DepthSearch;
use super::stats::SearchStats;

/// Policy for choosing a move.
pub trait MovePolicy {
    /// Choose one pit from `legal`.
    ///
    /// Returns `None` when there is nothing to choose. The search policies
    /// also skip entries that are not legal in `state`; a driver treats
    /// `None` for a position with legal moves as an error.
    fn choose_move(&mut self, state: &KalahState, legal: &[usize], player: PlayerId)
        -> Option<usize>;
}

impl<F> MovePolicy for F
where
    F: FnMut(&KalahState, &[usize], PlayerId) -> Option<usize>,
{
    fn choose_move(
        &mut self,
        state: &KalahState,
        legal: &[usize],
        player: PlayerId,
    ) -> Option<usize> {
        self(state, legal, player)
    }
}

/// Uniform random policy.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Random policy drawing from its own stream seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Random policy drawing from an existing stream.
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The underlying RNG.
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(
        &mut self,
        _state: &KalahState,
        legal: &[usize],
        _player: PlayerId,
    ) -> Option<usize> {
        self.rng.choose(legal).copied()
    }
}

/// Fixed-depth minimax policy.
#[derive(Clone, Debug)]
pub struct MinimaxPolicy {
    search: DepthSearch,
}

impl MinimaxPolicy {
    /// Search `depth` plies below the root.
    pub fn new(depth: u32) -> Self {
        Self {
            search: DepthSearch::new(SearchConfig::minimax(depth)),
        }
    }

    /// Search depth.
    pub fn depth(&self) -> u32 {
        self.search.config().depth
    }

    /// Statistics from the most recent move.
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_move(
        &mut self,
        state: &KalahState,
        legal: &[usize],
        player: PlayerId,
    ) -> Option<usize> {
        self.search.best_move(state, legal, player)
    }
}

/// Fixed-depth alpha-beta policy.
#[derive(Clone, Debug)]
pub struct AlphaBetaPolicy {
    search: DepthSearch,
}

impl AlphaBetaPolicy {
    /// Search `depth` plies below the root.
    pub fn new(depth: u32) -> Self {
        Self {
            search: DepthSearch::new(SearchConfig::alpha_beta(depth)),
        }
    }

    /// Search depth.
    pub fn depth(&self) -> u32 {
        self.search.config().depth
    }

    /// Statistics from the most recent move.
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl MovePolicy for AlphaBetaPolicy {
    fn choose_move(
        &mut self,
        state: &KalahState,
        legal: &[usize],
        player: PlayerId,
    ) -> Option<usize> {
        self.search.best_move(state, legal, player)
    }
}
