//! The rule variants: sowing paths, capture policies, win policies, and
//! the configuration object that selects among them.
//!
//! Everything here is a pure function of a board position. The turn
//! automaton in [`crate::engine`] drives these; none of them mutate state.

pub mod capture;
pub mod config;
pub mod path;
pub mod win;

pub use capture::{adjacent_row, opposite_row, Capture, CapturePolicy};
pub use config::GameConfig;
pub use path::SowDirection;
pub use win::WinPolicy;
