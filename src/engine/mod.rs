//! The turn engine: a run-to-completion automaton over one game's state.
//!
//! One [`GameEngine`] owns one game. A submitted move is validated before
//! any mutation, then resolved synchronously through every chained
//! sub-turn; the discrete steps come back as a [`TurnRecord`] for
//! presentation replay via [`crate::render`].

pub mod event;
pub mod state;
pub mod turn;

pub use event::{StepEvent, StepKind};
pub use state::{GameState, Phase};
pub use turn::{GameEngine, Move, TurnOutcome, TurnRecord};
