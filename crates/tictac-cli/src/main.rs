//! tictac - terminal driver for tictac-core.
//!
//! Feeds square selections, renames and restarts into a `GameSession` and
//! prints the derived view after each one.

mod command;
mod render;
mod replay;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tictac_core::{GameConfig, GameSession, SessionBuilder, Symbol};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use render::{render_log, render_view};

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictac", version, about, long_about = None)]
struct Cli {
    /// JSON config with initial player names, e.g. {"players":{"X":"Ann","O":"Ben"}}
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name for the X player (overrides the config file)
    #[arg(long)]
    player_x: Option<String>,

    /// Name for the O player (overrides the config file)
    #[arg(long)]
    player_o: Option<String>,

    /// Replay these squares ("R,C R,C ...") and print the result instead of prompting
    #[arg(long)]
    moves: Option<String>,

    /// Print views as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_player_name(Symbol::X, cli.player_x.clone())
    .with_player_name(Symbol::O, cli.player_o.clone());

    let mut session = SessionBuilder::new()
        .config(config)
        .build()
        .context("starting session")?;
    info!(session_id = %session.session_id(), "tictac started");

    match &cli.moves {
        Some(moves) => {
            replay::replay(&mut session, moves)?;
            print_view(&session, cli.json)
        }
        None => interactive(&mut session, cli.json),
    }
}

fn interactive(session: &mut GameSession, json: bool) -> Result<()> {
    println!("{HELP}\n");
    print_view(session, json)?;

    let stdin = io::stdin();
    loop {
        prompt(session)?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(command::ParseError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Play { row, col } => match session.play(row, col) {
                Ok(_) => print_view(session, json)?,
                Err(err) => println!("{err}"),
            },
            Command::Rename { symbol, name } => match session.rename_player(symbol, &name) {
                Ok(()) => print_view(session, json)?,
                Err(err) => println!("{err}"),
            },
            Command::Restart => {
                session.restart();
                print_view(session, json)?;
            }
            Command::Show => print_view(session, json)?,
            Command::Log => print!("{}", render_log(&session.view())),
            Command::Json => print_view(session, true)?,
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
    Ok(())
}

fn prompt(session: &GameSession) -> Result<()> {
    let view = session.view();
    if view.is_over() {
        print!("(round over) > ");
    } else {
        let name = session.players().name(view.active);
        print!("{name} ({}) > ", view.active);
    }
    io::stdout().flush()?;
    Ok(())
}

fn print_view(session: &GameSession, json: bool) -> Result<()> {
    let view = session.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("-- {} --", session.round_id());
        print!("{}", render_view(&view));
    }
    Ok(())
}
