//! Error taxonomy: rejected moves vs engine faults.
//!
//! Two very different failure classes exist and must never be conflated:
//!
//! - [`InvalidMove`] — the submitted move fails a playability constraint.
//!   Rejected before any mutation, reported to the caller, never fatal.
//!   Resubmitting the same invalid move yields the same rejection.
//! - [`InvariantViolation`] — a condition that cannot occur unless the
//!   engine itself is wrong (seed conservation broken, the sowing path
//!   leaving the mover's rows, a runaway chain). Fatal for the game
//!   instance: the engine transitions to a faulted phase and refuses all
//!   further input.

use thiserror::Error;

use super::coord::Coord;
use super::player::Player;

/// Why a submitted move was rejected.
///
/// None of these mutate state; the caller may simply prompt for another
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// The game has ended; no further moves are accepted.
    #[error("the game is over")]
    GameOver,

    /// The engine faulted on an invariant violation and accepts no input.
    #[error("the engine halted after an invariant violation")]
    Faulted,

    /// A turn is still being resolved.
    #[error("the engine is resolving a turn and not awaiting input")]
    NotAwaitingInput,

    /// The submitting player is not the one to move.
    #[error("it is not {0}'s turn")]
    OutOfTurn(Player),

    /// The pit coordinate lies outside the board.
    #[error("pit {0} is outside the board")]
    OutOfBounds(Coord),

    /// The pit is in the opponent's rows.
    #[error("pit {pit} is not in {player}'s rows")]
    OpponentPit {
        /// The submitted pit.
        pit: Coord,
        /// The player who submitted the move.
        player: Player,
    },

    /// The pit holds fewer seeds than the variant's sowable minimum.
    #[error("pit {pit} holds {count} seed(s), below the sowable minimum of {min}")]
    BelowThreshold {
        /// The submitted pit.
        pit: Coord,
        /// Seeds currently in the pit.
        count: u32,
        /// The configured minimum.
        min: u32,
    },
}

/// A broken engine invariant. Indicates an engine bug, not user error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Board + hand + captured seeds no longer sum to the initial total.
    #[error("seed conservation broken: expected {expected} seeds in play, found {found}")]
    SeedsNotConserved {
        /// The initial seed total.
        expected: u32,
        /// The total actually accounted for.
        found: u32,
    },

    /// The path walker produced a cell outside the mover's rows.
    #[error("sowing path left {player}'s rows at {pit}")]
    PathEscapedRows {
        /// The sowing player.
        player: Player,
        /// The offending cell.
        pit: Coord,
    },

    /// A single submitted move exceeded the configured chain step limit.
    #[error("turn exceeded the chain step limit of {limit} placements")]
    ChainStepLimit {
        /// The configured limit.
        limit: u32,
    },
}

/// Any error the engine can report from `submit_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Soft rejection; state unchanged.
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    /// Engine bug; the game instance is halted.
    #[error("engine invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_messages() {
        let err = InvalidMove::BelowThreshold {
            pit: Coord::new(1, 4),
            count: 1,
            min: 2,
        };
        assert_eq!(
            err.to_string(),
            "pit (1, 4) holds 1 seed(s), below the sowable minimum of 2"
        );

        let err = InvalidMove::OutOfTurn(Player::Two);
        assert_eq!(err.to_string(), "it is not Player 2's turn");
    }

    #[test]
    fn test_engine_error_from() {
        let err: EngineError = InvalidMove::GameOver.into();
        assert_eq!(err, EngineError::InvalidMove(InvalidMove::GameOver));

        let err: EngineError = InvariantViolation::ChainStepLimit { limit: 10 }.into();
        assert!(matches!(err, EngineError::Invariant(_)));
    }

    #[test]
    fn test_invariant_message_is_loud() {
        let err: EngineError = InvariantViolation::SeedsNotConserved {
            expected: 32,
            found: 30,
        }
        .into();
        assert!(err.to_string().contains("invariant violated"));
    }
}
