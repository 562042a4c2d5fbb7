//! Move record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::symbol::Symbol;

/// One placement of a symbol on a square. Recorded once, never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub symbol: Symbol,
}

impl Move {
    pub fn new(position: Position, symbol: Symbol) -> Self {
        Self { position, symbol }
    }
}

/// Log line form, e.g. `X selected (0, 2)`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} selected {}", self.symbol, self.position)
    }
}
