//! Plain-text rendering of a `GameView`.

use std::fmt;

use tictac_core::{GameView, Outcome};

/// Players (active one marked), the board, and a game-over line when the round ended.
pub fn render_view(view: &GameView) -> String {
    ViewText(view).to_string()
}

/// Turn log, most recent first.
pub fn render_log(view: &GameView) -> String {
    if view.turns.is_empty() {
        return "no moves yet\n".to_string();
    }
    view.turns.iter().map(|mv| format!("{mv}\n")).collect()
}

struct ViewText<'a>(&'a GameView);

impl fmt::Display for ViewText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        for player in &view.players {
            let marker = if player.is_active && !view.is_over() { ">" } else { " " };
            writeln!(f, "{marker} {} ({})", player.name, player.symbol)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", view.board)?;

        match &view.outcome {
            Outcome::Won { name, .. } => {
                writeln!(f, "\nGame over! {name} won! Type 'restart' to play again.")
            }
            Outcome::Drawn => writeln!(f, "\nGame over! It's a draw! Type 'restart' to play again."),
            Outcome::InProgress => Ok(()),
        }
    }
}
