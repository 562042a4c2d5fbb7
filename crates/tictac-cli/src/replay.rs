//! `--moves` replay: feeds a fixed list of squares into a session.

use anyhow::{Context, Result};
use tictac_core::{GameSession, GameView};

use crate::command::parse_move_list;

/// Plays every square in `moves` in order and returns the final view.
///
/// The whole list is parsed before anything is played. Playing stops at the
/// first rejected square; the moves before it stay recorded.
pub fn replay(session: &mut GameSession, moves: &str) -> Result<GameView> {
    let squares = parse_move_list(moves).context("parsing --moves")?;
    for (row, col) in squares {
        session
            .play(row, col)
            .with_context(|| format!("playing ({row}, {col})"))?;
    }
    Ok(session.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ParseError;
    use rstest::rstest;
    use tictac_core::impls::NoopEventSink;
    use tictac_core::{MoveError, Outcome, SessionBuilder, SessionError, Symbol};

    fn session() -> GameSession {
        SessionBuilder::new()
            .event_sink(NoopEventSink)
            .build()
            .unwrap()
    }

    #[test]
    fn winning_sequence_ends_with_the_winner() {
        let mut session = session();
        let view = replay(&mut session, "0,0 1,0 0,1 1,1 0,2").unwrap();

        assert_eq!(view.winner.as_deref(), Some("Player 1"));
        assert!(matches!(view.outcome, Outcome::Won { symbol: Symbol::X, .. }));
        assert_eq!(view.turns.len(), 5);
    }

    #[test]
    fn drawn_sequence_fills_the_board() {
        let mut session = session();
        let view = replay(&mut session, "0,0 0,1 0,2 1,1 1,0 1,2 2,1 2,0 2,2").unwrap();

        assert!(view.draw);
        assert_eq!(view.winner, None);
    }

    #[rstest]
    #[case::occupied("0,0 1,1 0,0 2,2", 2, MoveError::SquareOccupied { position: tictac_core::Position::new(0, 0).unwrap(), by: Symbol::X })]
    #[case::after_the_win("0,0 1,0 0,1 1,1 0,2 2,2", 5, MoveError::GameOver)]
    #[case::off_the_board("1,1 3,0 0,0", 1, MoveError::OutOfBounds { row: 3, col: 0 })]
    fn stops_at_the_first_rejected_square(
        #[case] moves: &str,
        #[case] recorded: usize,
        #[case] expected: MoveError,
    ) {
        let mut session = session();
        let err = replay(&mut session, moves).unwrap_err();

        assert_eq!(
            err.downcast_ref::<SessionError>(),
            Some(&SessionError::Move(expected))
        );
        assert_eq!(session.history().len(), recorded);
    }

    #[test]
    fn unparsable_list_plays_nothing() {
        let mut session = session();
        let err = replay(&mut session, "0,0 x,1").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::BadSquare(_))
        ));
        assert!(session.history().is_empty());
    }
}
