//! Capture evaluation at the end of a sowing phase.
//!
//! A capture can only trigger where the last seed landed, only in the
//! mover's inner row, and only once the hand is empty — it is evaluated
//! after every sowing phase ends (chained sub-turns included), never
//! mid-sow. Captured seeds leave play permanently.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, Player};

/// The row directly opposite an inner row: the *other* player's outer row.
///
/// Maps 1 → 3 and 2 → 0. Only meaningful for the two inner rows.
#[must_use]
pub fn opposite_row(row: usize) -> usize {
    debug_assert!(row == 1 || row == 2, "row {row} is not an inner row");
    if row == 1 {
        3
    } else {
        0
    }
}

/// The inner row touching an inner row: the opponent's front row.
///
/// Maps 1 → 2 and 2 → 1. Only meaningful for the two inner rows.
#[must_use]
pub fn adjacent_row(row: usize) -> usize {
    debug_assert!(row == 1 || row == 2, "row {row} is not an inner row");
    if row == 1 {
        2
    } else {
        1
    }
}

/// A capture about to be applied: which pits are emptied and how many
/// seeds leave play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The pits to be emptied. At most two (opposite + adjacent).
    pub pits: SmallVec<[Coord; 2]>,
    /// Total seeds across those pits.
    pub seeds: u32,
}

/// Which neighbor pits a landing must see occupied, and which are taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapturePolicy {
    /// Capture triggers only when *both* the directly-opposite outer pit
    /// and the touching inner pit are occupied; both are emptied.
    DualNeighbor,
    /// Capture triggers when the touching inner pit (the opponent's front
    /// row, same column) is occupied; only that pit is emptied.
    SingleNeighbor,
}

impl CapturePolicy {
    /// Evaluate the capture condition at the pit where the last seed
    /// landed.
    ///
    /// Common trigger for both policies: the landing pit is in `player`'s
    /// inner row and now holds at least two seeds (the one just placed
    /// plus at least one that was already there).
    #[must_use]
    pub fn evaluate(self, board: &Board, landing: Coord, player: Player) -> Option<Capture> {
        if landing.row != player.inner_row() || board.count(landing) < 2 {
            return None;
        }

        let adjacent = Coord::new(adjacent_row(landing.row), landing.col);
        if board.count(adjacent) == 0 {
            return None;
        }

        let mut pits: SmallVec<[Coord; 2]> = SmallVec::new();
        match self {
            CapturePolicy::DualNeighbor => {
                let opposite = Coord::new(opposite_row(landing.row), landing.col);
                if board.count(opposite) == 0 {
                    return None;
                }
                pits.push(opposite);
                pits.push(adjacent);
            }
            CapturePolicy::SingleNeighbor => {
                pits.push(adjacent);
            }
        }

        let seeds = pits.iter().map(|&pit| board.count(pit)).sum();
        Some(Capture { pits, seeds })
    }
}
