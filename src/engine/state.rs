//! The explicit game-state value owned by one engine instance.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PerPlayer, Player};
use crate::rules::GameConfig;

/// Where the automaton stands between (or during) turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player's move.
    AwaitingMove,
    /// A submitted move is being resolved.
    Resolving,
    /// The game ended with a winner; no further moves are accepted.
    Over {
        /// The winner.
        winner: Player,
    },
    /// An engine invariant broke; the instance accepts no further input.
    Faulted,
}

/// Complete state of one game.
///
/// Owned by a [`crate::engine::GameEngine`] and mutated only through its
/// operations; read access is open for renderers and tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) seeds_in_hand: u32,
    pub(crate) captured: PerPlayer<u32>,
    pub(crate) initial_seeds: u32,
    pub(crate) phase: Phase,
}

impl GameState {
    /// Create the starting state for a configuration. Player One moves
    /// first.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(&config.layout),
            current_player: Player::One,
            seeds_in_hand: 0,
            captured: PerPlayer::with_value(0),
            initial_seeds: config.total_seeds(),
            phase: Phase::AwaitingMove,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move (or whose turn is resolving).
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Seeds lifted from a pit and not yet re-sown. Zero whenever the
    /// engine is awaiting input.
    #[must_use]
    pub fn seeds_in_hand(&self) -> u32 {
        self.seeds_in_hand
    }

    /// Seeds a player has captured out of play.
    #[must_use]
    pub fn captured(&self, player: Player) -> u32 {
        self.captured[player]
    }

    /// Total seeds the game started with.
    #[must_use]
    pub fn initial_seeds(&self) -> u32 {
        self.initial_seeds
    }

    /// The automaton phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check whether the engine is ready for a move.
    #[must_use]
    pub fn awaiting_input(&self) -> bool {
        self.phase == Phase::AwaitingMove
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// Seeds accounted for across board, hand, and captures.
    ///
    /// Equals [`Self::initial_seeds`] at every observable step; the engine
    /// faults the instance if it ever does not.
    #[must_use]
    pub fn seeds_in_play(&self) -> u32 {
        self.board.total_seeds()
            + self.seeds_in_hand
            + self.captured[Player::One]
            + self.captured[Player::Two]
    }
}
