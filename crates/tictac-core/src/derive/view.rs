//! GameView - everything a presentation layer reads per render.

use serde::Serialize;

use super::{derive_outcome, next_turn, reconstruct_board};
use crate::domain::{Board, Move, MoveHistory, Outcome, PlayerRegistry, Symbol};

/// One registry entry plus whether it is that player's turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub symbol: Symbol,
    pub name: String,
    pub is_active: bool,
}

/// Read-only snapshot derived from a history and a registry.
///
/// `winner` and `draw` mirror `outcome` for consumers that want the two flat
/// fields; they are computed from it, so they can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub active: Symbol,
    pub board: Board,
    pub outcome: Outcome,
    pub winner: Option<String>,
    pub draw: bool,
    pub players: Vec<PlayerView>,
    /// Most-recent-first.
    pub turns: Vec<Move>,
}

impl GameView {
    pub fn derive(history: &MoveHistory, players: &PlayerRegistry) -> Self {
        let active = next_turn(history);
        let board = reconstruct_board(history);
        let outcome = derive_outcome(history, &board, players);

        Self {
            active,
            board,
            winner: outcome.winner_name().map(str::to_string),
            draw: outcome.is_draw(),
            outcome,
            players: players
                .iter()
                .map(|(symbol, name)| PlayerView {
                    symbol,
                    name: name.to_string(),
                    is_active: symbol == active,
                })
                .collect(),
            turns: history.iter().copied().collect(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }
}
