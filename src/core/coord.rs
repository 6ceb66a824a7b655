//! Board geometry: pit coordinates and grid dimensions.

use serde::{Deserialize, Serialize};

/// Number of rows on the board (two per player).
pub const ROWS: usize = 4;

/// Number of pits per row.
pub const COLS: usize = 8;

/// A pit coordinate: `(row, col)` with row 0 at the top.
///
/// Rows 0–1 belong to Player One, rows 2–3 to Player Two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0–3.
    pub row: usize,
    /// Column index, 0–7.
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether the coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROWS && self.col < COLS
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(3, 7).in_bounds());
        assert!(!Coord::new(4, 0).in_bounds());
        assert!(!Coord::new(0, 8).in_bounds());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(1, 5)), "(1, 5)");
    }

    #[test]
    fn test_serialization() {
        let coord = Coord::new(2, 3);
        let json = serde_json::to_string(&coord).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);
    }
}
