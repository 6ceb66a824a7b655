//! # owela-engine
//!
//! A rules engine for Owela, a two-player Mancala-family sowing game on a
//! 4×8 board.
//!
//! ## Design Principles
//!
//! 1. **One engine, many variants**: the traditional rule sets differ in
//!    starting layout, sowable minimum, sowing rotation, capture rule, and
//!    win rule. All of these are declared in [`rules::GameConfig`]; the
//!    automaton never hardcodes one convention.
//!
//! 2. **Explicit state**: one [`engine::GameEngine`] owns one
//!    [`engine::GameState`]. No globals; multiple games coexist and tests
//!    are deterministic.
//!
//! 3. **Synchronous core, paced presentation**: a submitted move resolves
//!    to completion immediately and returns every discrete step as data.
//!    Real-time pacing lives entirely in [`render::StepPacer`], so delay
//!    settings can never change a game's outcome.
//!
//! ## Modules
//!
//! - `core`: players, board geometry, the error taxonomy
//! - `board`: the 4×8 pit grid — pure data with accessor discipline
//! - `rules`: sowing paths, capture policies, win policies, configuration
//! - `engine`: the turn automaton and its step-event records
//! - `render`: the renderer trait and the replay pacer

pub mod board;
pub mod core;
pub mod engine;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Coord, EngineError, InvalidMove, InvariantViolation, PerPlayer, Player, COLS, ROWS,
};

pub use crate::board::{Board, Layout, Pit, PitStatus};

pub use crate::rules::{
    adjacent_row, opposite_row, Capture, CapturePolicy, GameConfig, SowDirection, WinPolicy,
};

pub use crate::engine::{
    GameEngine, GameState, Move, Phase, StepEvent, StepKind, TurnOutcome, TurnRecord,
};

pub use crate::render::{Renderer, StepPacer};
