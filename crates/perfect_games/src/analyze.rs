//! Position analysis for the `analyze` command.

use crate::config::GameConfig;
use crate::render::render_board;
use derive_getters::Getters;
use derive_new::new;
use perfect_tictactoe::{
    Board, GameStatus, Outcome, Position, SearchError, best_move, evaluate_moves, status,
};
use serde::Serialize;
use tracing::instrument;

/// Value of one candidate computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveScore {
    /// The square played.
    position: Position,
    /// Row of the square.
    row: usize,
    /// Column of the square.
    column: usize,
    /// Value with perfect play afterwards.
    outcome: Outcome,
    /// `outcome` as -1, 0 or +1.
    score: i8,
}

impl From<(Position, Outcome)> for MoveScore {
    fn from((position, outcome): (Position, Outcome)) -> Self {
        MoveScore::new(
            position,
            position.row(),
            position.column(),
            outcome,
            outcome.score(),
        )
    }
}

/// Every candidate move on a board and the one the computer would pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Analysis {
    /// Board that was analysed.
    board: Board,
    /// Status before the computer moves.
    status: GameStatus,
    /// Scored candidates in row-major order; empty once the game is over.
    moves: Vec<MoveScore>,
    /// The computer's choice, if the game is still open.
    best: Option<Position>,
}

/// Scores every computer move on `board`.
///
/// # Errors
///
/// Propagates [`SearchError`] from the selector; this cannot happen for a
/// board that is still in progress.
#[instrument(skip(board))]
pub fn analyze(board: &Board) -> Result<Analysis, SearchError> {
    let status = status(board);
    let mut scratch = *board;

    let (moves, best) = if status.is_over() {
        (Vec::new(), None)
    } else {
        let moves = evaluate_moves(&mut scratch)
            .into_iter()
            .map(MoveScore::from)
            .collect();
        (moves, Some(best_move(&mut scratch)?))
    };

    Ok(Analysis {
        board: *board,
        status,
        moves,
        best,
    })
}

impl Analysis {
    /// Human-readable report.
    pub fn to_text(&self, config: &GameConfig) -> String {
        let mut text = render_board(&self.board, config);

        match self.status {
            GameStatus::Won(mark) => {
                text.push_str(&format!("Game over: {} has a line.\n", config.symbol(mark)));
            }
            GameStatus::Draw => text.push_str("Game over: draw.\n"),
            GameStatus::InProgress => {
                for m in &self.moves {
                    text.push_str(&format!(
                        "({}, {}) {:<13} {:>2}  {}\n",
                        m.row,
                        m.column,
                        m.position.label(),
                        m.score,
                        m.outcome
                    ));
                }
                if let Some(best) = self.best {
                    text.push_str(&format!(
                        "Computer plays ({}, {}) {}\n",
                        best.row(),
                        best.column(),
                        best
                    ));
                }
            }
        }

        text
    }
}
