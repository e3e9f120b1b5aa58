//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. None of them mutate it, and all of
//! them are cheap enough to run at every node of the search.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::winner;

use super::{Board, GameStatus};

/// Classifies the board as won, drawn or still in progress.
///
/// The winner is checked before fullness because the move that completes a
/// line may also fill the last square.
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_status_prefers_winner_on_full_board() {
        // Human completes the left column with the last empty square.
        let board: Board = "XOX/XOO/XXO".parse().unwrap();
        assert!(is_draw(&board));
        assert_eq!(status(&board), GameStatus::Won(Player::Human));
    }

    #[test]
    fn test_status_in_progress() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(status(&board), GameStatus::InProgress);
        assert!(!status(&board).is_over());
    }

    #[test]
    fn test_status_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(status(&board), GameStatus::Draw);
    }
}
