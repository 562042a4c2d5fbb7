//! The fixed table of winning lines.
//!
//! 3 行・3 列・対角線 2 本の計 8 本。角-中央-角でも (0,2),(1,1),(2,2) のような
//! 組み合わせは列にならない。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Which part of the board a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum LineKind {
    Row(u8),
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Three squares that win the round when one symbol holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    pub kind: LineKind,
    pub squares: [Position; 3],
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(i) => write!(f, "row {i}"),
            LineKind::Column(i) => write!(f, "column {i}"),
            LineKind::Diagonal => f.write_str("diagonal"),
            LineKind::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

const fn row(r: u8) -> WinLine {
    WinLine {
        kind: LineKind::Row(r),
        squares: [Position::at(r, 0), Position::at(r, 1), Position::at(r, 2)],
    }
}

const fn column(c: u8) -> WinLine {
    WinLine {
        kind: LineKind::Column(c),
        squares: [Position::at(0, c), Position::at(1, c), Position::at(2, c)],
    }
}

/// Scan order: rows top to bottom, columns left to right, then the two
/// diagonals. The first matching line decides the winner.
pub const WIN_LINES: [WinLine; 8] = [
    row(0),
    row(1),
    row(2),
    column(0),
    column(1),
    column(2),
    WinLine {
        kind: LineKind::Diagonal,
        squares: [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    },
    WinLine {
        kind: LineKind::AntiDiagonal,
        squares: [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
    },
];
