//! Parsing of interactive commands and `--moves` lists.

use tictac_core::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play { row: usize, col: usize },
    Rename { symbol: Symbol, name: String },
    Restart,
    Show,
    Log,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("expected a square as 'ROW COL' or 'ROW,COL', got '{0}'")]
    BadSquare(String),

    #[error("usage: name X|O NEW NAME")]
    BadRename,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  play R C | R C | R,C   place the active symbol at row R, column C (0-2)
  name X|O NAME          rename a player
  restart                clear the board and start a new round
  show                   print the board and players
  log                    print the moves, most recent first
  json                   print the current view as JSON
  help                   this text
  quit                   leave";

impl std::str::FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "play" | "p" => parse_square(rest).map(|(row, col)| Command::Play { row, col }),
            "name" | "rename" => {
                let (symbol, name) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(ParseError::BadRename)?;
                let symbol = symbol.parse().map_err(|_| ParseError::BadRename)?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(ParseError::BadRename);
                }
                Ok(Command::Rename {
                    symbol,
                    name: name.to_string(),
                })
            }
            "restart" | "r" => Ok(Command::Restart),
            "show" | "s" => Ok(Command::Show),
            "log" => Ok(Command::Log),
            "json" => Ok(Command::Json),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => parse_square(line)
                .map(|(row, col)| Command::Play { row, col })
                .map_err(|_| ParseError::Unknown(head.to_string())),
        }
    }
}

/// `"R C"` or `"R,C"`.
pub fn parse_square(s: &str) -> Result<(usize, usize), ParseError> {
    let bad = || ParseError::BadSquare(s.to_string());
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let col = parts.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((row, col))
}

/// Space-separated `R,C` pairs, e.g. `"0,0 1,1 2,2"`.
pub fn parse_move_list(s: &str) -> Result<Vec<(usize, usize)>, ParseError> {
    s.split_whitespace().map(parse_square).collect()
}
