//! Terminal-condition detection.
//!
//! Run once at the end of every completed sub-turn (after any capture),
//! never mid-sow. In both policies the mover's own side is examined first,
//! so if both sides are terminal at once the mover loses.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Player;

/// The variant's terminal condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinPolicy {
    /// A player loses once no pit in either of their rows holds more than
    /// one seed — they have nothing left to sow.
    Starvation,
    /// A player loses once their inner ("front") row is entirely empty.
    FrontRowEmpty,
}

impl WinPolicy {
    /// Determine the winner, if the position is terminal.
    ///
    /// `mover` is the player whose sub-turn just completed; their side is
    /// checked first.
    #[must_use]
    pub fn winner(self, board: &Board, mover: Player) -> Option<Player> {
        let loser_of = |player: Player| match self {
            WinPolicy::Starvation => is_starved(board, player),
            WinPolicy::FrontRowEmpty => board.is_row_empty(player.inner_row()),
        };

        if loser_of(mover) {
            Some(mover.opponent())
        } else if loser_of(mover.opponent()) {
            Some(mover)
        } else {
            None
        }
    }
}

/// Check whether a player has no pit holding more than one seed.
fn is_starved(board: &Board, player: Player) -> bool {
    player
        .rows()
        .into_iter()
        .all(|row| board.row(row).iter().all(|pit| pit.count <= 1))
}
