//! Exhaustive minimax search and the computer's move selector.
//!
//! The search explores every continuation to the end of the game. A 3x3 board
//! has at most nine plies, so there is no depth limit, pruning or caching.
//! Trial marks are placed on the caller's board and removed again before each
//! branch returns.

use super::error::SearchError;
use super::rules::{is_draw, winner};
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game-theoretic value of a position, from the computer's point of view.
///
/// Variants are ordered worst to best for the computer, so the maximizing side
/// takes `max` and the minimizing side takes `min`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Outcome {
    /// The human completes a line.
    #[display("human wins")]
    HumanWins,
    /// The board fills with no line.
    #[display("draw")]
    Draw,
    /// The computer completes a line.
    #[display("computer wins")]
    ComputerWins,
}

impl Outcome {
    /// Numeric score: -1, 0 or +1.
    pub fn score(self) -> i8 {
        match self {
            Outcome::HumanWins => -1,
            Outcome::Draw => 0,
            Outcome::ComputerWins => 1,
        }
    }

    /// Value of a finished board, or `None` while the game is still open.
    pub fn of_terminal(board: &Board) -> Option<Self> {
        match winner(board) {
            Some(Player::Computer) => Some(Outcome::ComputerWins),
            Some(Player::Human) => Some(Outcome::HumanWins),
            None if is_draw(board) => Some(Outcome::Draw),
            None => None,
        }
    }
}

/// A mark placed for the duration of one search branch.
///
/// The square is emptied again when the guard drops, on every exit path.
struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> TrialMove<'a> {
    fn new(board: &'a mut Board, pos: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(pos), "trial move on occupied square");
        board.set(pos, Square::Occupied(player));
        Self { board, pos }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Square::Empty);
    }
}

/// Computes the value of `board` with perfect play from both sides.
///
/// `maximizing` is true when the computer moves next. Terminal boards return
/// their value without expanding anything. `board` is identical on return.
pub fn minimax(board: &mut Board, maximizing: bool) -> Outcome {
    if let Some(outcome) = Outcome::of_terminal(board) {
        return outcome;
    }

    let (mover, mut best) = if maximizing {
        (Player::Computer, Outcome::HumanWins)
    } else {
        (Player::Human, Outcome::ComputerWins)
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        let mut trial = TrialMove::new(board, pos, mover);
        let outcome = minimax(trial.board(), !maximizing);
        best = if maximizing {
            best.max(outcome)
        } else {
            best.min(outcome)
        };
    }

    best
}

/// Scores every empty square as a computer move, in row-major order.
///
/// Each entry is the value of the board after the computer plays there and the
/// human replies optimally.
pub fn evaluate_moves(board: &mut Board) -> Vec<(Position, Outcome)> {
    let mut scored = Vec::with_capacity(9 - board.occupied_count());

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        let mut trial = TrialMove::new(board, pos, Player::Computer);
        let outcome = minimax(trial.board(), false);
        scored.push((pos, outcome));
    }

    scored
}

/// Picks the computer's move.
///
/// Among equally valued squares the first in row-major order wins, so the
/// choice is reproducible for a given board.
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] if the board has no empty square.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn best_move(board: &mut Board) -> Result<Position, SearchError> {
    let scored = evaluate_moves(board);
    debug!(?scored, "Scored candidate moves");

    let mut best: Option<(Position, Outcome)> = None;
    for (pos, outcome) in scored {
        if best.is_none_or(|(_, top)| outcome > top) {
            best = Some((pos, outcome));
        }
    }

    let (pos, outcome) = best.ok_or(SearchError::InvalidState)?;
    info!(position = %pos, row = pos.row(), column = pos.column(), %outcome, "Selected move");
    Ok(pos)
}

/// Picks the optimal move for either side.
///
/// The human's move is found by searching the mirrored board, where the human
/// takes the computer's role. Used for self-play and hints.
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] if the board has no empty square.
#[instrument(skip(board))]
pub fn best_move_for(board: &Board, player: Player) -> Result<Position, SearchError> {
    let mut scratch = match player {
        Player::Computer => *board,
        Player::Human => board.mirrored(),
    };
    best_move(&mut scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_values() {
        let mut won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(minimax(&mut won, false), Outcome::ComputerWins);

        let mut lost: Board = "XXX/OO./O..".parse().unwrap();
        assert_eq!(minimax(&mut lost, true), Outcome::HumanWins);

        let mut drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(minimax(&mut drawn, true), Outcome::Draw);
    }

    #[test]
    fn test_terminal_board_is_not_expanded() {
        // Computer already has the top row; a human move elsewhere cannot change that.
        let mut board: Board = "OOO/XX./...".parse().unwrap();
        assert_eq!(minimax(&mut board, false), Outcome::ComputerWins);
    }

    #[test]
    fn test_scores() {
        assert_eq!(Outcome::HumanWins.score(), -1);
        assert_eq!(Outcome::Draw.score(), 0);
        assert_eq!(Outcome::ComputerWins.score(), 1);
        assert!(Outcome::HumanWins < Outcome::Draw && Outcome::Draw < Outcome::ComputerWins);
    }

    #[test]
    fn test_trial_move_restores_square() {
        let mut board: Board = "X........".parse().unwrap();
        {
            let mut trial = TrialMove::new(&mut board, Position::Center, Player::Computer);
            assert_eq!(
                trial.board().get(Position::Center),
                Square::Occupied(Player::Computer)
            );
        }
        assert_eq!(board, "X........".parse::<Board>().unwrap());
    }

    #[test]
    fn test_one_square_left() {
        // Only the bottom-right square remains and the game is drawn either way.
        let mut board: Board = "XOX/XOO/OX.".parse().unwrap();
        assert_eq!(best_move(&mut board), Ok(Position::BottomRight));
    }

    #[test]
    fn test_full_board_is_invalid_state() {
        let mut board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(best_move(&mut board), Err(SearchError::InvalidState));
        assert!(evaluate_moves(&mut board).is_empty());
    }
}
