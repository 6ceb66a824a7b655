//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Owela is strictly two-sided: Player One owns rows 0–1, Player Two owns
//! rows 2–3. Row ownership is part of the player's identity, so the
//! outer/inner row mapping lives here.
//!
//! ## PerPlayer
//!
//! Two-slot per-player storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// Each player owns two of the board's four rows. The row bordering the
/// opponent is the player's *inner* (or "front") row; the far one is the
/// *outer* row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Owns rows 0 (outer) and 1 (inner).
    One,
    /// Owns rows 2 (inner) and 3 (outer).
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player's outer row (the one farthest from the opponent).
    #[must_use]
    pub const fn outer_row(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 3,
        }
    }

    /// The player's inner row (the one bordering the opponent).
    ///
    /// Capture eligibility and the front-row win condition are defined on
    /// this row.
    #[must_use]
    pub const fn inner_row(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The player's rows as `[outer, inner]`.
    #[must_use]
    pub const fn rows(self) -> [usize; 2] {
        [self.outer_row(), self.inner_row()]
    }

    /// Check whether a row belongs to this player.
    #[must_use]
    pub const fn owns_row(self, row: usize) -> bool {
        match self {
            Player::One => row <= 1,
            Player::Two => row == 2 || row == 3,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage, one slot per player.
///
/// ## Example
///
/// ```
/// use owela_engine::core::{PerPlayer, Player};
///
/// let mut captured: PerPlayer<u32> = PerPlayer::with_value(0);
/// captured[Player::One] += 5;
/// assert_eq!(captured[Player::One], 5);
/// assert_eq!(captured[Player::Two], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create with explicit values for each player.
    #[must_use]
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create with both slots set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's slot.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::One => &self.data[0],
            Player::Two => &self.data[1],
        }
    }

    /// Get a mutable reference to a player's slot.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::One => &mut self.data[0],
            Player::Two => &mut self.data[1],
        }
    }

    /// Iterate over `(Player, &T)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.iter().copied().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
