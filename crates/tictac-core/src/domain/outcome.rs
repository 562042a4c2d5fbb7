//! Outcome model: where a round stands.
//!
//! This replaces a pair of independent "winner" / "draw" flags with one
//! enum, so a drawn round can never also carry a winner.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use super::win_lines::WinLine;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub symbol: Symbol,
    /// Display name looked up in the registry at evaluation time.
    pub name: String,
    pub line: WinLine,
}

/// Three-state round status.
///
/// - `IN_PROGRESS`: initial state, and any state without a completed line
///   while free squares remain.
/// - `WON`: a move completed a line. Terminal.
/// - `DRAWN`: the ninth move was placed without completing a line. Terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    InProgress,
    Won { symbol: Symbol, name: String },
    Drawn,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Outcome::Won { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Drawn)
    }
}

impl From<&Winner> for Outcome {
    fn from(w: &Winner) -> Self {
        Outcome::Won {
            symbol: w.symbol,
            name: w.name.clone(),
        }
    }
}
