//! Turn alternation.

use crate::domain::{MoveHistory, Symbol};

/// The symbol that moves next.
///
/// `X` opens an empty history. Otherwise the opposite of the head move's
/// symbol; earlier moves are not consulted.
pub fn next_turn(history: &MoveHistory) -> Symbol {
    match history.head() {
        None => Symbol::FIRST,
        Some(last) => last.symbol.other(),
    }
}
