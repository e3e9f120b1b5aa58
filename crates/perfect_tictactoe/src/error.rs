//! Error types for board mutation and move selection.

use super::position::Position;

/// Error that can occur when applying a move through the checked board API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Error returned by the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The selector was asked for a move on a board with no empty square.
    ///
    /// Callers check for a finished game first, so seeing this is a bug in the caller.
    #[display("Invalid state: no empty square left to play")]
    InvalidState,
}

impl std::error::Error for SearchError {}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty-square symbol.
    #[display("Unexpected board symbol {:?}", _0)]
    InvalidSymbol(char),

    /// The notation did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}
