//! The turn automaton: validate, take, sow, capture, chain or switch.
//!
//! A submitted move runs to completion synchronously — including every
//! chained sub-turn — before the engine accepts anything else. Validation
//! happens before any mutation, so a rejected move leaves no trace. Each
//! discrete step of the resolution is appended to the returned record for
//! a renderer to replay at its own pace.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::board::PitStatus;
use crate::core::{Coord, EngineError, InvalidMove, InvariantViolation, Player};
use crate::rules::GameConfig;

use super::event::{StepEvent, StepKind};
use super::state::{GameState, Phase};

/// A candidate action: who moves, and from which pit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The pit to sow from.
    pub pit: Coord,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(player: Player, pit: Coord) -> Self {
        Self { player, pit }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {}", self.player, self.pit)
    }
}

/// How a resolved turn handed control back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Control passed to the other player.
    Switched {
        /// The player now to move.
        next: Player,
    },
    /// The game ended during this turn.
    Won {
        /// The winner.
        winner: Player,
    },
}

/// Everything one accepted move produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The discrete steps, in order, for presentation replay.
    pub events: Vec<StepEvent>,
    /// How the turn ended.
    pub outcome: TurnOutcome,
    /// Number of take-sow phases the turn chained through.
    pub sub_turns: u32,
}

/// The turn engine: owns one game's state and resolves moves against a
/// configuration.
///
/// ## Example
///
/// ```
/// use owela_engine::core::{Coord, Player};
/// use owela_engine::engine::GameEngine;
/// use owela_engine::rules::GameConfig;
///
/// let mut engine = GameEngine::new(GameConfig::full());
/// let record = engine.submit_move(Player::One, Coord::new(0, 0)).unwrap();
/// assert!(!record.events.is_empty());
/// assert_eq!(engine.state().seeds_in_hand(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl GameEngine {
    /// Create an engine with a fresh game in the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(&config);
        Self { config, state }
    }

    /// The configuration this game runs under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Check whether `player` could start sowing from `pit`.
    ///
    /// Row ownership plus the configured sowable minimum; turn order and
    /// phase are checked by [`Self::submit_move`].
    #[must_use]
    pub fn is_pit_playable(&self, pit: Coord, player: Player) -> bool {
        self.state
            .board
            .is_playable(pit, player, self.config.min_sowable)
    }

    /// Submit a move given as a [`Move`] value.
    pub fn submit(&mut self, mv: Move) -> Result<TurnRecord, EngineError> {
        self.submit_move(mv.player, mv.pit)
    }

    /// Submit a move and resolve it to completion.
    ///
    /// On `Err(EngineError::InvalidMove)` nothing changed and the same
    /// submission would be rejected identically again. On
    /// `Err(EngineError::Invariant)` the engine found a bug in itself,
    /// logged it, and halted this game instance for good.
    pub fn submit_move(&mut self, player: Player, pit: Coord) -> Result<TurnRecord, EngineError> {
        self.validate(player, pit)?;

        debug!("{player} started sowing from {pit}");
        self.state.phase = Phase::Resolving;

        match self.run_turn(player, pit) {
            Ok(record) => Ok(record),
            Err(violation) => {
                log::error!("halting game: {violation}");
                self.state.phase = Phase::Faulted;
                Err(violation.into())
            }
        }
    }

    fn validate(&self, player: Player, pit: Coord) -> Result<(), InvalidMove> {
        match self.state.phase {
            Phase::Over { .. } => return Err(InvalidMove::GameOver),
            Phase::Faulted => return Err(InvalidMove::Faulted),
            Phase::Resolving => return Err(InvalidMove::NotAwaitingInput),
            Phase::AwaitingMove => {}
        }

        if player != self.state.current_player {
            return Err(InvalidMove::OutOfTurn(player));
        }
        if !pit.in_bounds() {
            return Err(InvalidMove::OutOfBounds(pit));
        }
        if !player.owns_row(pit.row) {
            return Err(InvalidMove::OpponentPit { pit, player });
        }

        let count = self.state.board.count(pit);
        if count < self.config.min_sowable {
            return Err(InvalidMove::BelowThreshold {
                pit,
                count,
                min: self.config.min_sowable,
            });
        }

        Ok(())
    }

    /// The run-to-completion loop. One iteration is one sub-turn:
    /// take, sow, capture?, terminal check, then chain or switch.
    fn run_turn(
        &mut self,
        player: Player,
        start: Coord,
    ) -> Result<TurnRecord, InvariantViolation> {
        let direction = self.config.directions[player];
        let mut events = Vec::new();
        let mut placements: u32 = 0;
        let mut sub_turns: u32 = 0;
        let mut pit = start;

        let outcome = loop {
            sub_turns += 1;

            // Taking: the whole pit moves into the hand.
            self.state.board.set_status(pit, PitStatus::MarkedForTaking);
            self.push_event(&mut events, StepKind::TakingStarted { pit });

            let taken = self.state.board.take_all(pit);
            self.state.board.set_status(pit, PitStatus::Neutral);
            self.state.seeds_in_hand = taken;
            self.push_event(&mut events, StepKind::SeedTaken { pit, seeds: taken });

            // Sowing: one seed per pit along the player's loop.
            while self.state.seeds_in_hand > 0 {
                placements += 1;
                if placements > self.config.chain_step_limit {
                    return Err(InvariantViolation::ChainStepLimit {
                        limit: self.config.chain_step_limit,
                    });
                }

                pit = direction.next_pit(pit, player);
                if !player.owns_row(pit.row) {
                    return Err(InvariantViolation::PathEscapedRows { player, pit });
                }

                self.state.board.set_status(pit, PitStatus::MarkedForPlacing);
                self.push_event(&mut events, StepKind::PlacingStarted { pit });

                self.state.board.set_status(pit, PitStatus::Neutral);
                self.state.board.add_seed(pit);
                self.state.seeds_in_hand -= 1;
                self.push_event(&mut events, StepKind::SeedPlaced { pit });
            }

            // Capturing: evaluated once per sub-turn, at the landing pit.
            // Captured seeds leave play for good.
            if let Some(capture) = self.config.capture.evaluate(&self.state.board, pit, player) {
                self.state.board.set_status(pit, PitStatus::MarkedForTaking);
                for &target in &capture.pits {
                    self.state.board.set_status(target, PitStatus::MarkedForTaking);
                }
                self.push_event(
                    &mut events,
                    StepKind::CaptureStarted {
                        landing: pit,
                        pits: capture.pits.clone(),
                    },
                );

                for &target in &capture.pits {
                    self.state.board.take_all(target);
                    self.state.board.set_status(target, PitStatus::Neutral);
                }
                self.state.board.set_status(pit, PitStatus::Neutral);
                self.state.captured[player] += capture.seeds;
                self.push_event(
                    &mut events,
                    StepKind::SeedsCaptured {
                        pits: capture.pits.clone(),
                        seeds: capture.seeds,
                    },
                );
            }

            self.check_conservation()?;

            // Terminal check: once per completed sub-turn, never mid-sow.
            if let Some(winner) = self.config.win.winner(&self.state.board, player) {
                self.state.phase = Phase::Over { winner };
                info!("{winner} wins");
                self.push_event(&mut events, StepKind::GameOver { winner });
                break TurnOutcome::Won { winner };
            }

            // Chain while the landing pit still holds more than one seed.
            if self.state.board.count(pit) > 1 {
                trace!("{player} chains from {pit}");
                continue;
            }

            let next = player.opponent();
            self.state.current_player = next;
            self.state.phase = Phase::AwaitingMove;
            debug!("{next} to move next");
            self.push_event(&mut events, StepKind::TurnSwitched { next });
            break TurnOutcome::Switched { next };
        };

        Ok(TurnRecord {
            events,
            outcome,
            sub_turns,
        })
    }

    fn push_event(&self, events: &mut Vec<StepEvent>, kind: StepKind) {
        events.push(StepEvent {
            kind,
            board: self.state.board.clone(),
            seeds_in_hand: self.state.seeds_in_hand,
            current_player: self.state.current_player,
        });
    }

    fn check_conservation(&self) -> Result<(), InvariantViolation> {
        let found = self.state.seeds_in_play();
        if found == self.state.initial_seeds {
            Ok(())
        } else {
            Err(InvariantViolation::SeedsNotConserved {
                expected: self.state.initial_seeds,
                found,
            })
        }
    }
}
