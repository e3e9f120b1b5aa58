//! Human player that types coordinates.

use super::Player;
use crate::input::parse_move;
use anyhow::Result;
use perfect_tictactoe::{Board, Position};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Human player reading row and column from a line-based input.
pub struct HumanPlayer<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Creates a human player on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the output writer, consuming the player.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("Input closed before {} chose a move", self.name);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Position> {
        loop {
            let row = self.ask("Row (0, 1 or 2): ")?;
            let column = self.ask("Column (0, 1 or 2): ")?;

            match parse_move(&row, &column, board) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
