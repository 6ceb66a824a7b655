//! Game configuration: one declared surface for everything the two
//! observed rule variants disagree on.
//!
//! The engine never hardcodes a layout, threshold, direction, capture rule,
//! or win rule — variants configure them here. Two presets reproduce the
//! traditional rule sets; builder methods derive custom mixes from either.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::Layout;
use crate::core::{PerPlayer, Player};

use super::capture::CapturePolicy;
use super::path::SowDirection;
use super::win::WinPolicy;

/// Complete rule configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting seed count per pit.
    pub layout: Layout,

    /// Minimum seeds a pit must hold to be sowable (2 where a lone seed
    /// cannot be played, 1 where it may be sown a single step).
    pub min_sowable: u32,

    /// Each player's sowing rotation.
    pub directions: PerPlayer<SowDirection>,

    /// Which neighbor pits a capture requires and takes.
    pub capture: CapturePolicy,

    /// The terminal condition.
    pub win: WinPolicy,

    /// Suggested delay between presentation steps. Carries no rules
    /// significance; `Duration::ZERO` is the fast-forward mode.
    pub step_delay: Duration,

    /// Seed placements allowed per submitted move before the engine
    /// declares a runaway chain and faults.
    pub chain_step_limit: u32,
}

impl GameConfig {
    /// The full rule set: every pit starts with two seeds, a lone seed may
    /// be sown, captures take the one touching pit, and a player loses
    /// when their front row empties.
    #[must_use]
    pub fn full() -> Self {
        Self {
            layout: [[2; 8]; 4],
            min_sowable: 1,
            directions: PerPlayer::new(
                SowDirection::OuterAscending,
                SowDirection::OuterDescending,
            ),
            capture: CapturePolicy::SingleNeighbor,
            win: WinPolicy::FrontRowEmpty,
            step_delay: Duration::from_millis(500),
            chain_step_limit: 10_000,
        }
    }

    /// The simplified rule set: each player starts with seeds in their
    /// outer row and half their inner row, only pits with two or more
    /// seeds are sowable, captures need and take both neighbor pits, and
    /// a player starved down to single seeds loses.
    #[must_use]
    pub fn simplified() -> Self {
        Self {
            layout: [
                [2, 2, 2, 2, 2, 2, 2, 2],
                [2, 2, 2, 2, 0, 0, 0, 0],
                [0, 0, 0, 0, 2, 2, 2, 2],
                [2, 2, 2, 2, 2, 2, 2, 2],
            ],
            min_sowable: 2,
            directions: PerPlayer::new(
                SowDirection::OuterDescending,
                SowDirection::OuterAscending,
            ),
            capture: CapturePolicy::DualNeighbor,
            win: WinPolicy::Starvation,
            step_delay: Duration::from_millis(500),
            chain_step_limit: 10_000,
        }
    }

    /// Replace the starting layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the sowable minimum.
    #[must_use]
    pub fn with_min_sowable(mut self, min: u32) -> Self {
        assert!(min >= 1, "a sowable pit must hold at least one seed");
        self.min_sowable = min;
        self
    }

    /// Replace one player's sowing direction.
    #[must_use]
    pub fn with_direction(mut self, player: Player, direction: SowDirection) -> Self {
        self.directions[player] = direction;
        self
    }

    /// Replace the capture policy.
    #[must_use]
    pub fn with_capture(mut self, capture: CapturePolicy) -> Self {
        self.capture = capture;
        self
    }

    /// Replace the win policy.
    #[must_use]
    pub fn with_win(mut self, win: WinPolicy) -> Self {
        self.win = win;
        self
    }

    /// Replace the presentation step delay.
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Zero the presentation step delay.
    #[must_use]
    pub fn fast_forward(mut self) -> Self {
        self.step_delay = Duration::ZERO;
        self
    }

    /// Replace the runaway-chain guard.
    #[must_use]
    pub fn with_chain_step_limit(mut self, limit: u32) -> Self {
        assert!(limit > 0, "chain step limit must be positive");
        self.chain_step_limit = limit;
        self
    }

    /// Total seeds the layout puts in play.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.layout.iter().flatten().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::full()
    }
}
