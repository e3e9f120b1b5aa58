//! Player trait and implementations.

mod human;
mod optimal_ai;

pub use human::HumanPlayer;
pub use optimal_ai::OptimalAi;

use anyhow::Result;
use perfect_tictactoe::{Board, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The orchestrator lends its own board. Implementations may use it as
    /// scratch space but must hand it back unchanged; the orchestrator applies
    /// the returned position itself.
    fn choose_move(&mut self, board: &mut Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
