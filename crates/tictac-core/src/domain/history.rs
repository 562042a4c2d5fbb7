//! Move history: the single source of truth for a round.
//!
//! Moves are held most-recent-first, so the head is always the last move
//! played. A history is never edited in place; [`MoveHistory::with_move`]
//! produces the next value and leaves the previous one intact.
//!
//! # 学習ポイント
//! - 不変条件（同じマスは 1 回だけ、最大 9 手）はコンストラクタで守る。型の値は常に正しい
//! - serde の `try_from` で、JSON から読み込んだ履歴も同じ検査を通す

use serde::{Deserialize, Serialize};

use super::errors::MoveError;
use super::moves::Move;

/// Most moves a 3x3 round can hold.
pub const MAX_MOVES: usize = 9;

/// Ordered, most-recent-first sequence of moves.
///
/// The public constructors reject a square played twice and a tenth move,
/// so every value of this type satisfies both invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct MoveHistory {
    /// Index 0 is the most recent move.
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn empty() -> Self {
        Self { moves: Vec::new() }
    }

    /// Builds a history from moves given oldest-first.
    pub fn from_chronological<I>(moves: I) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = Move>,
    {
        moves
            .into_iter()
            .try_fold(Self::empty(), |history, mv| history.with_move(mv))
    }

    /// Returns a new history with `mv` prepended as the head.
    pub fn with_move(&self, mv: Move) -> Result<Self, MoveError> {
        if self.moves.len() >= MAX_MOVES {
            return Err(MoveError::HistoryFull(self.moves.len()));
        }
        if let Some(taken) = self.moves.iter().find(|m| m.position == mv.position) {
            return Err(MoveError::SquareOccupied {
                position: mv.position,
                by: taken.symbol,
            });
        }

        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.push(mv);
        moves.extend_from_slice(&self.moves);
        Ok(Self { moves })
    }

    /// The most recent move.
    pub fn head(&self) -> Option<&Move> {
        self.moves.first()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.moves.len() == MAX_MOVES
    }

    /// Most-recent-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Oldest-first.
    pub fn chronological(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().rev()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Accepts the wire order (most-recent-first) and re-checks the invariants.
impl TryFrom<Vec<Move>> for MoveHistory {
    type Error = MoveError;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        Self::from_chronological(moves.into_iter().rev())
    }
}

impl From<MoveHistory> for Vec<Move> {
    fn from(history: MoveHistory) -> Self {
        history.moves
    }
}
