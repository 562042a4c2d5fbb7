//! Errors raised while recording moves or managing a session.
//!
//! The derivation functions in [`crate::derive`] are total and never return
//! these. They only surface at the edges that build a history or a registry.

use thiserror::Error;

use super::position::Position;
use super::symbol::Symbol;

/// A move that cannot be appended to a history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("square {position} is already taken by {by}")]
    SquareOccupied { position: Position, by: Symbol },

    #[error("history already holds {0} moves")]
    HistoryFull(usize),

    #[error("the round is over; restart to play again")]
    GameOver,
}

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("player name for {0} must not be blank")]
    EmptyName(Symbol),
}
