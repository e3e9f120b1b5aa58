//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// Every line of three: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds all three squares of a line,
/// `None` otherwise. Every line is checked for the human before any line is
/// checked for the computer, so a board where both own a line (not reachable
/// through legal play) goes to the human.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| LINES.iter().any(|line| holds_line(board, line, player)))
}

fn holds_line(board: &Board, line: &[Position; 3], player: Player) -> bool {
    line.iter()
        .all(|&pos| board.get(pos) == Square::Occupied(player))
}
