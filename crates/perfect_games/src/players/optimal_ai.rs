//! Computer player backed by the exhaustive search.

use super::Player;
use anyhow::Result;
use perfect_tictactoe::{Board, Player as Mark, Position, best_move, best_move_for};
use tracing::debug;

/// Plays perfectly for one side of the board.
pub struct OptimalAi {
    name: String,
    side: Mark,
}

impl OptimalAi {
    /// Creates the usual computer opponent.
    pub fn new(name: impl Into<String>) -> Self {
        Self::playing(name, Mark::Computer)
    }

    /// Creates a perfect player for either side, e.g. for self-play.
    pub fn playing(name: impl Into<String>, side: Mark) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }
}

impl Player for OptimalAi {
    fn choose_move(&mut self, board: &mut Board) -> Result<Position> {
        debug!(ai = %self.name, side = ?self.side, "AI making move");

        let pos = match self.side {
            Mark::Computer => best_move(board)?,
            Mark::Human => best_move_for(board, Mark::Human)?,
        };

        debug!(ai = %self.name, position = %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
