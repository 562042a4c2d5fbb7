//! tictac-core
//!
//! Derives the observable state of a 3x3 tic-tac-toe round from its move
//! history.
//!
//! # Modules
//! - **domain**: symbols, positions, moves, history, board, players, win lines, outcome, events
//! - **derive**: the pure pipeline (`next_turn`, `reconstruct_board`, `evaluate_winner`) and `GameView`
//! - **ports**: seams for the session layer (`Clock`, `IdGenerator`, `EventSink`)
//! - **impls**: shipped `EventSink` implementations
//! - **app**: `GameSession` (records moves, renames, restarts) and `SessionBuilder`
//! - **config**: initial player names loaded from JSON

pub mod app;
pub mod config;
pub mod derive;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{BuildError, GameSession, SessionBuilder};
pub use config::{ConfigError, GameConfig};
pub use derive::{
    GameView, PlayerView, derive_outcome, evaluate_winner, is_draw, next_turn, reconstruct_board,
};
pub use domain::{
    Board, Move, MoveError, MoveHistory, Outcome, PlayerRegistry, Position, SessionError, Symbol,
    Winner,
};
