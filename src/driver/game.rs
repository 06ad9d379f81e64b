//! The game loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};

use crate::core::{GameConfig, GameRng, KalahError, KalahState, PlayerId, Result, Stones};
use crate::rules::{GameResult, Kalah, RulesEngine};
use crate::search::{MovePolicy, RandomPolicy};

/// Outcome of a driven game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// State when the loop stopped.
    pub final_state: KalahState,

    /// Moves applied. Passes are not counted.
    pub moves: usize,

    /// Turns passed because the mover had no stones.
    pub passes: usize,

    /// `None` if the game stopped before it was over.
    pub result: Option<GameResult>,
}

impl GameSummary {
    /// Stones in a player's store at the end.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> Stones {
        self.final_state.score(player)
    }

    /// Whether the game reached a terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }
}

/// Alternates two policies over a rules engine.
#[derive(Clone, Debug)]
pub struct GameDriver<E: RulesEngine = Kalah> {
    engine: E,
    config: GameConfig,
}

impl GameDriver<Kalah> {
    /// Driver for standard Kalah as described by `config`.
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(Kalah::from_config(&config), config)
    }
}

impl<E: RulesEngine> GameDriver<E> {
    /// Driver for an arbitrary engine. Only `max_moves` is read from
    /// `config`; the engine owns the opening and the rules.
    pub fn with_engine(engine: E, config: GameConfig) -> Self {
        Self { engine, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Play one game, `p0` as player 0 and `p1` as player 1.
    ///
    /// Stops when the engine reports a result, when `max_moves` moves have
    /// been applied, or when both players pass in a row. A turn is passed
    /// only when the mover has no legal moves. A policy naming a pit outside
    /// the legal list ends the game with `KalahError::IllegalMove`, and one
    /// returning no move ends it with `KalahError::NoMoveChosen`.
    #[instrument(skip(self, p0, p1), fields(max_moves = self.config.max_moves))]
    pub fn play<A, B>(&self, p0: &mut A, p1: &mut B) -> Result<GameSummary>
    where
        A: MovePolicy + ?Sized,
        B: MovePolicy + ?Sized,
    {
        let mut state = self.engine.initial_state();
        let mut moves = 0;
        let mut passes = 0;
        let mut consecutive_passes = 0;

        while self.engine.is_terminal(&state).is_none() && moves < self.config.max_moves {
            let player = state.player_to_move();
            let legal = self.engine.legal_moves(&state);

            if legal.is_empty() {
                trace!(%player, "no stones, passing");
                state = state.passed();
                passes += 1;
                consecutive_passes += 1;
                if consecutive_passes >= 2 {
                    debug!("neither player can move");
                    break;
                }
                continue;
            }

            let choice = if player == PlayerId::ZERO {
                p0.choose_move(&state, &legal, player)
            } else {
                p1.choose_move(&state, &legal, player)
            };
            let Some(pit) = choice else {
                warn!(%player, legal = legal.len(), "policy returned no move");
                return Err(KalahError::NoMoveChosen {
                    player,
                    legal: legal.len(),
                });
            };

            state = self.engine.apply_move(&state, pit)?;
            moves += 1;
            consecutive_passes = 0;
            debug!(
                %player,
                pit,
                capture = state.last_move_was_capture(),
                "move applied"
            );
        }

        let result = self.engine.is_terminal(&state);
        info!(
            moves,
            passes,
            score_0 = state.score(PlayerId::ZERO),
            score_1 = state.score(PlayerId::ONE),
            ?result,
            "game finished"
        );

        Ok(GameSummary {
            final_state: state,
            moves,
            passes,
            result,
        })
    }
}

/// Play one game of standard Kalah.
pub fn play_game<A, B>(config: GameConfig, p0: &mut A, p1: &mut B) -> Result<GameSummary>
where
    A: MovePolicy + ?Sized,
    B: MovePolicy + ?Sized,
{
    GameDriver::new(config).play(p0, p1)
}

/// Two random policies on independent streams forked from `config.seed`.
pub fn random_pair(config: &GameConfig) -> (RandomPolicy, RandomPolicy) {
    let mut root = GameRng::new(config.seed);
    let p0 = RandomPolicy::with_rng(root.fork());
    let p1 = RandomPolicy::with_rng(root.fork());
    (p0, p1)
}
