//! Domain model (symbols, positions, moves, history, board, players, outcome).

pub mod board;
pub mod errors;
pub mod events;
pub mod history;
pub mod ids;
pub mod moves;
pub mod outcome;
pub mod players;
pub mod position;
pub mod symbol;
pub mod win_lines;

pub use board::{Board, Cell};
pub use errors::{MoveError, SessionError};
pub use events::{EventMeta, GameEvent};
pub use history::{MAX_MOVES, MoveHistory};
pub use ids::{RoundId, SessionId};
pub use moves::Move;
pub use outcome::{Outcome, Winner};
pub use players::PlayerRegistry;
pub use position::{BOARD_SIZE, Position};
pub use symbol::{ParseSymbolError, Symbol};
pub use win_lines::{LineKind, WIN_LINES, WinLine};
