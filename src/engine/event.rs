//! The step-event stream consumed by renderers.
//!
//! Every discrete step of the turn automaton — each marking, each single
//! seed placed, each capture, each hand-off — is one event carrying the
//! board as it stands after the step. A renderer replays these to animate
//! a turn; the engine never waits on it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Player};

/// What happened in one discrete step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// The start pit is highlighted before its seeds are lifted.
    TakingStarted {
        /// The pit about to be emptied.
        pit: Coord,
    },
    /// The start pit's seeds moved into the mover's hand.
    ///
    /// `seeds` is the count taken — renderers key distinct feedback off
    /// taking exactly one seed versus several.
    SeedTaken {
        /// The emptied pit.
        pit: Coord,
        /// How many seeds were lifted.
        seeds: u32,
    },
    /// The next pit along the path is highlighted before a seed drops.
    PlacingStarted {
        /// The pit about to receive a seed.
        pit: Coord,
    },
    /// One seed dropped from the hand into a pit.
    SeedPlaced {
        /// The pit that received the seed.
        pit: Coord,
    },
    /// A capture triggered at the landing pit; the pits to be emptied are
    /// highlighted.
    CaptureStarted {
        /// Where the last seed landed.
        landing: Coord,
        /// The pits about to be emptied.
        pits: SmallVec<[Coord; 2]>,
    },
    /// Captured seeds left play.
    SeedsCaptured {
        /// The emptied pits.
        pits: SmallVec<[Coord; 2]>,
        /// Total seeds removed from the game.
        seeds: u32,
    },
    /// The turn passed to the other player.
    TurnSwitched {
        /// The player now to move.
        next: Player,
    },
    /// The game ended.
    GameOver {
        /// The winner.
        winner: Player,
    },
}

/// One step of a resolved turn, with the board as the renderer should show
/// it after the step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// What happened.
    pub kind: StepKind,
    /// Board snapshot after the step (statuses included).
    pub board: Board,
    /// Seeds in the mover's hand after the step.
    pub seeds_in_hand: u32,
    /// The player whose turn is being resolved.
    pub current_player: Player,
}

impl StepEvent {
    /// Check whether this is the final event a game will ever emit.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StepKind::GameOver { .. })
    }
}
