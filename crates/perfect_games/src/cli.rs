//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the computer
    Play {
        /// Path to the game configuration file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Let the computer make the first move
        #[arg(long)]
        computer_first: bool,

        /// Do not clear the screen between turns
        #[arg(long)]
        no_clear: bool,
    },

    /// Score every computer move on a board
    Analyze {
        /// Nine squares in row-major order: X (human), O (computer), '.' (empty).
        /// '/' separators are allowed, e.g. "XO./.X./O.."
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the search play both sides
    SelfPlay,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("tictactoe.toml"),
            computer_first: false,
            no_clear: false,
        }
    }
}
