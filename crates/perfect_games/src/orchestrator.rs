//! Game orchestration between players.

use crate::players::Player;
use crate::render::Console;
use anyhow::Result;
use perfect_tictactoe::{Board, GameStatus, Player as Mark, Square, status};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game: owns the board and alternates turns until it is decided.
pub struct Orchestrator<W: Write> {
    board: Board,
    to_move: Mark,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    console: Console<W>,
}

impl<W: Write> Orchestrator<W> {
    /// Creates an orchestrator with an empty board.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        first: Mark,
        console: Console<W>,
    ) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            human,
            computer,
            console,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the console, consuming the orchestrator.
    pub fn into_console(self) -> Console<W> {
        self.console
    }

    fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::Human => self.human.name(),
            Mark::Computer => self.computer.name(),
        }
    }

    /// Runs the game loop and returns how the game ended.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move (closed input, or a selector
    /// asked to move on a full board) or if the console cannot be written.
    #[instrument(skip_all, fields(first = ?self.to_move))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");

        loop {
            self.console.show_board(&self.board)?;

            let mark = self.to_move;
            let name = self.player_name(mark).to_string();
            self.console.announce_turn(mark)?;

            debug!(player = %name, "Waiting for move");
            let before = self.board;
            let player = match mark {
                Mark::Human => self.human.as_mut(),
                Mark::Computer => self.computer.as_mut(),
            };
            let pos = player.choose_move(&mut self.board)?;
            if self.board != before {
                anyhow::bail!("{} changed the board while choosing a move", name);
            }
            if !self.board.is_empty(pos) {
                anyhow::bail!("{} chose occupied square {}", name, pos);
            }

            self.board.set(pos, Square::Occupied(mark));
            info!(player = %name, position = %pos, "Move made");

            let outcome = status(&self.board);
            if outcome.is_over() {
                self.console.show_board(&self.board)?;
                self.console.announce_result(outcome)?;
                info!(?outcome, "Game over");
                return Ok(outcome);
            }

            self.to_move = mark.opponent();
        }
    }
}
