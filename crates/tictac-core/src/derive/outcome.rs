//! Outcome evaluation: winner lookup, draw detection, and the combined state.

use crate::domain::{Board, MAX_MOVES, MoveHistory, Outcome, PlayerRegistry, WIN_LINES, Winner};

/// Finds the first completed line in [`WIN_LINES`] order.
///
/// Returns `None` while no line is held by a single symbol. On a board with
/// several completed lines (only reachable through an invalid history) the
/// earliest line in the table wins, so the result stays deterministic.
pub fn evaluate_winner(board: &Board, players: &PlayerRegistry) -> Option<Winner> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.squares;
        let symbol = board.get(a)?;
        if board.get(b) == Some(symbol) && board.get(c) == Some(symbol) {
            Some(Winner {
                symbol,
                name: players.name(symbol).to_string(),
                line: *line,
            })
        } else {
            None
        }
    })
}

/// A draw needs a full history and no winner.
///
/// Takes the winner as computed by [`evaluate_winner`]; the ninth move can
/// complete a line, so a full board alone is not enough.
pub fn is_draw(history_len: usize, winner: Option<&Winner>) -> bool {
    history_len == MAX_MOVES && winner.is_none()
}

/// Folds winner and draw into a single [`Outcome`].
pub fn derive_outcome(history: &MoveHistory, board: &Board, players: &PlayerRegistry) -> Outcome {
    let winner = evaluate_winner(board, players);
    if let Some(w) = &winner {
        return Outcome::from(w);
    }
    if is_draw(history.len(), winner.as_ref()) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::reconstruct_board;
    use crate::domain::{LineKind, Move, Position, Symbol};
    use rstest::rstest;

    fn history(moves: &[(usize, usize, Symbol)]) -> MoveHistory {
        MoveHistory::from_chronological(
            moves
                .iter()
                .map(|&(r, c, s)| Move::new(Position::new(r, c).unwrap(), s)),
        )
        .unwrap()
    }

    fn board_of(cells: &[(usize, usize, Symbol)]) -> Board {
        reconstruct_board(&history(cells))
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(
            evaluate_winner(&Board::EMPTY, &PlayerRegistry::default()),
            None
        );
    }

    #[rstest]
    #[case::top_row(&[(0, 0), (0, 1), (0, 2)], LineKind::Row(0))]
    #[case::bottom_row(&[(2, 0), (2, 1), (2, 2)], LineKind::Row(2))]
    #[case::middle_column(&[(0, 1), (1, 1), (2, 1)], LineKind::Column(1))]
    #[case::diagonal(&[(0, 0), (1, 1), (2, 2)], LineKind::Diagonal)]
    #[case::anti_diagonal(&[(0, 2), (1, 1), (2, 0)], LineKind::AntiDiagonal)]
    fn detects_each_kind_of_line(#[case] squares: &[(usize, usize)], #[case] kind: LineKind) {
        let cells: Vec<_> = squares.iter().map(|&(r, c)| (r, c, Symbol::X)).collect();
        let winner = evaluate_winner(&board_of(&cells), &PlayerRegistry::default()).unwrap();

        assert_eq!(winner.symbol, Symbol::X);
        assert_eq!(winner.name, "Player 1");
        assert_eq!(winner.line.kind, kind);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_of(&[(0, 0, Symbol::X), (0, 1, Symbol::O), (0, 2, Symbol::X)]);
        assert_eq!(evaluate_winner(&board, &PlayerRegistry::default()), None);
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = board_of(&[(1, 0, Symbol::O), (1, 1, Symbol::O)]);
        assert_eq!(evaluate_winner(&board, &PlayerRegistry::default()), None);
    }

    #[test]
    fn o_corner_centre_corner_is_not_a_line() {
        // head-first: (0,2)O, (0,1)X, (1,1)O, (2,0)X, (2,2)O
        let h = MoveHistory::try_from(vec![
            Move::new(Position::new(0, 2).unwrap(), Symbol::O),
            Move::new(Position::new(0, 1).unwrap(), Symbol::X),
            Move::new(Position::new(1, 1).unwrap(), Symbol::O),
            Move::new(Position::new(2, 0).unwrap(), Symbol::X),
            Move::new(Position::new(2, 2).unwrap(), Symbol::O),
        ])
        .unwrap();
        let board = reconstruct_board(&h);
        let players = PlayerRegistry::new("Alice", "Bob");

        assert_eq!(evaluate_winner(&board, &players), None);
        assert!(!is_draw(h.len(), None));
        assert_eq!(derive_outcome(&h, &board, &players), Outcome::InProgress);
    }

    #[test]
    fn o_anti_diagonal_returns_the_o_players_name() {
        // head-first: (0,2)O, (0,1)X, (1,1)O, (2,2)X, (2,0)O
        let h = MoveHistory::try_from(vec![
            Move::new(Position::new(0, 2).unwrap(), Symbol::O),
            Move::new(Position::new(0, 1).unwrap(), Symbol::X),
            Move::new(Position::new(1, 1).unwrap(), Symbol::O),
            Move::new(Position::new(2, 2).unwrap(), Symbol::X),
            Move::new(Position::new(2, 0).unwrap(), Symbol::O),
        ])
        .unwrap();
        let board = reconstruct_board(&h);
        let players = PlayerRegistry::new("Alice", "Bob");

        let winner = evaluate_winner(&board, &players).unwrap();
        assert_eq!(winner.name, "Bob");
        assert_eq!(winner.symbol, Symbol::O);
        assert_eq!(winner.line.kind, LineKind::AntiDiagonal);
    }

    #[test]
    fn earliest_line_in_table_order_wins_ties() {
        // Not reachable in a legal round: X holds row 0 and column 0 at once.
        let board = board_of(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::X),
            (0, 2, Symbol::X),
            (1, 0, Symbol::X),
            (2, 0, Symbol::X),
        ]);
        let winner = evaluate_winner(&board, &PlayerRegistry::default()).unwrap();
        assert_eq!(winner.line.kind, LineKind::Row(0));
    }

    #[test]
    fn winner_name_follows_the_registry_passed_in() {
        let board = board_of(&[(0, 0, Symbol::O), (1, 0, Symbol::O), (2, 0, Symbol::O)]);
        let before = PlayerRegistry::default();
        let after = before.with_name(Symbol::O, "Renamed");

        assert_eq!(evaluate_winner(&board, &before).unwrap().name, "Player 2");
        assert_eq!(evaluate_winner(&board, &after).unwrap().name, "Renamed");
    }

    // X O X
    // X O O
    // O X X
    const FULL_NO_LINE: [(usize, usize, Symbol); 9] = [
        (0, 0, Symbol::X),
        (0, 1, Symbol::O),
        (0, 2, Symbol::X),
        (1, 1, Symbol::O),
        (1, 0, Symbol::X),
        (1, 2, Symbol::O),
        (2, 1, Symbol::X),
        (2, 0, Symbol::O),
        (2, 2, Symbol::X),
    ];

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let h = history(&FULL_NO_LINE);
        let board = reconstruct_board(&h);
        let players = PlayerRegistry::default();

        let winner = evaluate_winner(&board, &players);
        assert_eq!(winner, None);
        assert!(is_draw(h.len(), winner.as_ref()));
        assert_eq!(derive_outcome(&h, &board, &players), Outcome::Drawn);
    }

    #[test]
    fn ninth_move_completing_a_line_is_a_win_not_a_draw() {
        // X O X
        // O X O
        // O X X   <- X's ninth move at (2,2) completes the diagonal
        let h = history(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::O),
            (0, 2, Symbol::X),
            (1, 0, Symbol::O),
            (1, 1, Symbol::X),
            (1, 2, Symbol::O),
            (2, 1, Symbol::X),
            (2, 0, Symbol::O),
            (2, 2, Symbol::X),
        ]);
        assert!(h.is_full());
        let board = reconstruct_board(&h);
        let players = PlayerRegistry::default();

        let winner = evaluate_winner(&board, &players);
        assert!(winner.is_some());
        assert!(!is_draw(h.len(), winner.as_ref()));
        assert_eq!(
            derive_outcome(&h, &board, &players),
            Outcome::Won {
                symbol: Symbol::X,
                name: "Player 1".into()
            }
        );
    }

    #[rstest]
    #[case::empty(0)]
    #[case::partial(5)]
    #[case::eight(8)]
    fn short_history_is_never_a_draw(#[case] len: usize) {
        assert!(!is_draw(len, None));
    }

    #[test]
    fn open_board_is_in_progress() {
        let h = history(&[(0, 0, Symbol::X), (1, 1, Symbol::O)]);
        let board = reconstruct_board(&h);
        assert_eq!(
            derive_outcome(&h, &board, &PlayerRegistry::default()),
            Outcome::InProgress
        );
    }
}
