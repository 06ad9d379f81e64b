//! Fixed-depth minimax with optional alpha-beta pruning.
//!
//! One recursive evaluator serves both algorithms; `SearchConfig::pruning`
//! switches the cutoffs on. Scores are always taken from the root mover's
//! side (fixed-root scoring), whoever is to move at the leaf.
//!
//! Inside the tree extra turns are never granted: children are generated
//! with the continuation rule off, so levels strictly alternate between
//! maximizing and minimizing.

use std::time::Instant;

use tracing::debug;

use crate::core::{KalahState, PlayerId};
use crate::rules::sowing::{apply_move, sow};

use super::config::SearchConfig;
use super::eval::{utility, Score};
use super::stats::SearchStats;

const NEG_INF: Score = Score::MIN;
const POS_INF: Score = Score::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Max,
    Min,
}

impl Level {
    fn flip(self) -> Self {
        match self {
            Level::Max => Level::Min,
            Level::Min => Level::Max,
        }
    }
}

/// Depth-limited game-tree search.
#[derive(Clone, Debug)]
pub struct DepthSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl DepthSearch {
    /// Create a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best of `legal` for `player`.
    ///
    /// Ties go to the earliest move in `legal`. Entries that are not legal
    /// in `state` are skipped, so `None` comes back when no entry is legal.
    pub fn best_move(
        &mut self,
        state: &KalahState,
        legal: &[usize],
        player: PlayerId,
    ) -> Option<usize> {
        let start = Instant::now();
        self.stats.reset();

        let mut best: Option<(usize, Score)> = None;
        let mut alpha = NEG_INF;
        let child_depth = self.config.depth.saturating_sub(1);

        for &pit in legal {
            let child = match apply_move(state, pit, false) {
                Ok(child) => child,
                Err(err) => {
                    debug!(%err, "skipping root move");
                    continue;
                }
            };
            let score = self.value(&child, child_depth, Level::Min, player, alpha, POS_INF);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pit, score));
            }
            if self.config.pruning {
                alpha = alpha.max(score);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        let (pit, score) = best?;
        debug!(
            %player,
            pit,
            score,
            depth = self.config.depth,
            pruning = self.config.pruning,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );

        Some(pit)
    }

    /// Minimax value of `state` for `player`, treating `state` as a
    /// maximizing node searched to the configured depth.
    pub fn evaluate(&mut self, state: &KalahState, player: PlayerId) -> Score {
        self.stats.reset();
        self.value(state, self.config.depth, Level::Max, player, NEG_INF, POS_INF)
    }

    fn value(
        &mut self,
        state: &KalahState,
        depth: u32,
        level: Level,
        root: PlayerId,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if state.is_game_over() || depth == 0 {
            self.stats.leaves += 1;
            return utility(state, root);
        }

        let legal = state.legal_moves(None);
        if legal.is_empty() {
            let passed = state.passed();
            if passed.legal_moves(None).is_empty() {
                // Both rows empty without the game flagged over.
                self.stats.leaves += 1;
                return utility(state, root);
            }
            self.stats.passes += 1;
            return self.value(&passed, depth, level.flip(), root, alpha, beta);
        }

        match level {
            Level::Max => {
                let mut v = NEG_INF;
                for &pit in &legal {
                    let child = sow(state, pit, false);
                    v = v.max(self.value(&child, depth - 1, Level::Min, root, alpha, beta));
                    if self.config.pruning {
                        if v >= beta {
                            self.stats.cutoffs += 1;
                            return v;
                        }
                        alpha = alpha.max(v);
                    }
                }
                v
            }
            Level::Min => {
                let mut v = POS_INF;
                for &pit in &legal {
                    let child = sow(state, pit, false);
                    v = v.min(self.value(&child, depth - 1, Level::Max, root, alpha, beta));
                    if self.config.pruning {
                        if v <= alpha {
                            self.stats.cutoffs += 1;
                            return v;
                        }
                        beta = beta.min(v);
                    }
                }
                v
            }
        }
    }
}
