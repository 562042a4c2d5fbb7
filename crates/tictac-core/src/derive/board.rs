//! Board reconstruction.

use crate::domain::{Board, MoveHistory};

/// Rebuilds the grid from scratch.
///
/// Starts from a fresh empty board and writes moves oldest-first, so if a
/// history ever did contain a square twice the chronologically last write
/// would win.
pub fn reconstruct_board(history: &MoveHistory) -> Board {
    history
        .chronological()
        .fold(Board::EMPTY, |mut board, mv| {
            board.set(mv.position, mv.symbol);
            board
        })
}
