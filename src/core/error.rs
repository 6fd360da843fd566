//! Caller-contract violations reported by the engine.
//!
//! None of these are retried internally. The state passed in is never
//! modified when one is returned.

use super::player::PlayerId;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LudoError {
    /// A roll was submitted for a player who does not hold the turn.
    #[error("{actual} rolled out of turn, it is {expected}'s turn")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    /// A die value outside 1..=6.
    #[error("invalid die value {0}, expected 1-6")]
    InvalidDieValue(u8),

    /// A seat index outside the four seats.
    #[error("no seat {0}, expected 0-3")]
    InvalidSeat(u8),

    /// A token position past the goal, or a second token on the goal.
    #[error("{player} cannot stand on cell {position}")]
    InvalidPosition { player: PlayerId, position: u8 },

    /// A stored winner that does not match who stands on the goal.
    #[error("recorded winner {recorded:?} does not match the goal cell")]
    WinnerMismatch { recorded: Option<PlayerId> },

    /// A mutating operation after the game was won.
    #[error("game is over, {winner} has won")]
    GameOver { winner: PlayerId },
}

pub type Result<T> = std::result::Result<T, LudoError>;
