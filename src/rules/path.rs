//! The sowing path: a fixed circular loop through one player's two rows.
//!
//! Each player sows only within their own row pair. The loop traverses the
//! outer row in one column direction and the inner row in the other,
//! wrapping between the rows at columns 0 and 7 without changing column.
//! Which way the outer row runs is a declared per-variant configuration —
//! the two observed variants are exact mirrors of each other.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Player, COLS};

/// A player's sowing rotation.
///
/// Named by the traversal of the player's *outer* row; the inner row always
/// runs the opposite way, and the wrap from one row to the other keeps the
/// column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SowDirection {
    /// Outer row toward higher columns, inner row toward lower columns.
    OuterAscending,
    /// Outer row toward lower columns, inner row toward higher columns.
    OuterDescending,
}

impl SowDirection {
    /// The next pit along `player`'s loop after `pit`.
    ///
    /// Pure function: no side effects, total on the player's 16 owned pits.
    /// The result is always one of the player's own pits; sixteen
    /// applications visit the whole loop and return to the start.
    #[must_use]
    pub fn next_pit(self, pit: Coord, player: Player) -> Coord {
        debug_assert!(
            player.owns_row(pit.row),
            "{player} cannot sow through {pit}"
        );

        let outer = player.outer_row();
        let inner = player.inner_row();
        let last = COLS - 1;

        match self {
            SowDirection::OuterAscending => {
                if pit.row == outer {
                    if pit.col == last {
                        Coord::new(inner, last)
                    } else {
                        Coord::new(outer, pit.col + 1)
                    }
                } else if pit.col == 0 {
                    Coord::new(outer, 0)
                } else {
                    Coord::new(inner, pit.col - 1)
                }
            }
            SowDirection::OuterDescending => {
                if pit.row == outer {
                    if pit.col == 0 {
                        Coord::new(inner, 0)
                    } else {
                        Coord::new(outer, pit.col - 1)
                    }
                } else if pit.col == last {
                    Coord::new(outer, last)
                } else {
                    Coord::new(inner, pit.col + 1)
                }
            }
        }
    }
}
