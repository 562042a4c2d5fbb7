//! Board snapshot - a derived 3x3 grid.
//!
//! A `Board` is never the source of truth. It is rebuilt from a
//! [`MoveHistory`](super::MoveHistory) by [`crate::derive::reconstruct_board`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::{BOARD_SIZE, Position};
use super::symbol::Symbol;

/// Cell contents: a symbol or `None` for empty.
pub type Cell = Option<Symbol>;

/// 3x3 grid indexed by `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The all-empty template. `Board` is `Copy`, so every use is a fresh value.
    pub const EMPTY: Board = Board {
        cells: [[None; BOARD_SIZE]; BOARD_SIZE],
    };

    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row()][position.col()]
    }

    pub(crate) fn set(&mut self, position: Position, symbol: Symbol) {
        self.cells[position.row()][position.col()] = Some(symbol);
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|s| (p, s)))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == BOARD_SIZE * BOARD_SIZE
    }
}

/// Renders rows as `X|O|.` separated by `-+-+-`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str("|")?;
                }
                match cell {
                    Some(symbol) => write!(f, "{symbol}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}
