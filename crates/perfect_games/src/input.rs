//! Parsing and validation of the human's typed coordinates.

use perfect_tictactoe::{Board, Position};
use tracing::instrument;

/// Why a typed move was refused. Each variant is shown to the player, who is
/// then asked again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Something other than an integer was typed.
    #[display("Invalid input {:?}. Enter a number.", _0)]
    NotANumber(String),

    /// A coordinate outside 0..=2.
    #[display("Coordinates ({}, {}) are out of range. Use 0, 1 or 2.", row, column)]
    OutOfRange {
        /// Row as typed.
        row: i64,
        /// Column as typed.
        column: i64,
    },

    /// The target square already holds a mark.
    #[display("{} is already taken. Try again.", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for InputError {}

/// Parses one coordinate. Range is checked by [`parse_move`].
fn parse_coordinate(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Turns a typed row and column into a playable position on `board`.
///
/// # Errors
///
/// Returns an [`InputError`] for non-numeric text, coordinates outside the
/// grid, or a square that is already taken.
#[instrument(skip(board))]
pub fn parse_move(row: &str, column: &str, board: &Board) -> Result<Position, InputError> {
    let row = parse_coordinate(row)?;
    let column = parse_coordinate(column)?;

    let pos = usize::try_from(row)
        .ok()
        .zip(usize::try_from(column).ok())
        .and_then(|(r, c)| Position::from_coords(r, c))
        .ok_or(InputError::OutOfRange { row, column })?;

    if !board.is_empty(pos) {
        return Err(InputError::SquareOccupied(pos));
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfect_tictactoe::Player;

    #[test]
    fn test_valid_move() {
        let board = Board::new();
        assert_eq!(parse_move(" 2 ", "1\n", &board), Ok(Position::BottomCenter));
    }

    #[test]
    fn test_not_a_number() {
        let board = Board::new();
        assert_eq!(
            parse_move("one", "1", &board),
            Err(InputError::NotANumber("one".to_string()))
        );
        assert_eq!(
            parse_move("1", "", &board),
            Err(InputError::NotANumber(String::new()))
        );
    }

    #[test]
    fn test_out_of_range() {
        let board = Board::new();
        assert_eq!(
            parse_move("3", "0", &board),
            Err(InputError::OutOfRange { row: 3, column: 0 })
        );
        assert_eq!(
            parse_move("0", "-1", &board),
            Err(InputError::OutOfRange { row: 0, column: -1 })
        );
    }

    #[test]
    fn test_occupied() {
        let mut board = Board::new();
        board.place(Position::Center, Player::Computer).unwrap();
        assert_eq!(
            parse_move("1", "1", &board),
            Err(InputError::SquareOccupied(Position::Center))
        );
    }
}
