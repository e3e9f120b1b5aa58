//! Perfect Games library - console tic-tac-toe against a perfect opponent
//!
//! The game rules and the minimax search live in `perfect_tictactoe`; this
//! crate is the I/O around them.
//!
//! # Architecture
//!
//! - **Config**: symbols, turn order and screen clearing from a TOML file
//! - **Players**: a human typing coordinates and the optimal computer
//! - **Orchestrator**: owns the board and alternates turns until the game ends
//! - **Render**: text board and game messages
//! - **Analyze**: scored candidate moves for a given position
//!
//! # Example
//!
//! ```no_run
//! use perfect_games::{Console, GameConfig, HumanPlayer, OptimalAi, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("tictactoe.toml")?;
//! let first = config.first_to_move();
//! let mut game = Orchestrator::new(
//!     Box::new(HumanPlayer::stdio("You")),
//!     Box::new(OptimalAi::new("The computer")),
//!     first,
//!     Console::new(std::io::stdout(), config),
//! );
//! let outcome = game.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analyze;
mod config;
mod input;
mod orchestrator;
mod players;
mod render;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Input handling
pub use input::{InputError, parse_move};

// Crate-level exports - Players
pub use players::{HumanPlayer, OptimalAi, Player};

// Crate-level exports - Game loop and output
pub use orchestrator::Orchestrator;
pub use render::{Console, render_board};

// Crate-level exports - Analysis
pub use analyze::{Analysis, MoveScore, analyze};
