//! Tic-tac-toe against a perfect opponent - CLI
//!
//! Play in the terminal, analyse a position, or watch the search play itself.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_games::{Console, GameConfig, HumanPlayer, OptimalAi, Orchestrator, analyze};
use perfect_tictactoe::{Board, GameStatus, Player as Mark};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            computer_first,
            no_clear,
        } => run_play(&config, computer_first, no_clear),
        Command::Analyze { board, json } => run_analyze(&board, json, &mut io::stdout()),
        Command::SelfPlay => run_self_play(io::stdout()).map(|_| ()),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play one game against the computer.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: &Path, computer_first: bool, no_clear: bool) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?.with_overrides(computer_first, no_clear);
    info!(?config, "Starting game");

    let first = config.first_to_move();
    let mut game = Orchestrator::new(
        Box::new(HumanPlayer::stdio("You")),
        Box::new(OptimalAi::new("The computer")),
        first,
        Console::new(io::stdout(), config),
    );

    let outcome = game.run()?;
    info!(?outcome, "Game finished");
    Ok(())
}

/// Print the scored candidate moves for a board.
#[instrument(skip(out))]
fn run_analyze(notation: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Cannot read board {notation:?}"))?;
    let analysis = analyze(&board)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
    } else {
        write!(out, "{}", analysis.to_text(&GameConfig::default()))?;
    }
    Ok(())
}

/// Optimal play on both sides; always a draw.
#[instrument(skip(out))]
fn run_self_play<W: Write>(out: W) -> Result<GameStatus> {
    let config = GameConfig::default().with_overrides(false, true);
    let mut game = Orchestrator::new(
        Box::new(OptimalAi::playing("Optimal X", Mark::Human)),
        Box::new(OptimalAi::new("Optimal O")),
        Mark::Human,
        Console::new(out, config),
    );

    let outcome = game.run()?;
    info!(?outcome, "Self-play finished");
    Ok(outcome)
}
