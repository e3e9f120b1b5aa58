//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, MoveError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person at the keyboard.
    Human,
    /// The searching opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Swaps the occupant, leaving empty squares alone.
    fn mirrored(self) -> Self {
        match self {
            Square::Empty => Square::Empty,
            Square::Occupied(player) => Square::Occupied(player.opponent()),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position without any checks.
    ///
    /// The game loop validates human moves before calling this, and the search
    /// uses it to place and undo trial marks.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(player));
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy with every human mark turned into a computer mark and vice versa.
    pub fn mirrored(&self) -> Self {
        Self {
            squares: self.squares.map(Square::mirrored),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the compact nine-character notation used in tests and by the `analyze` command.
///
/// Squares are read in row-major order: `X` for the human, `O` for the computer and
/// `.`, `-`, `_` or a space for an empty square. `/` and `|` separators are skipped, so
/// `"XO./.X./O.."` is accepted.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut cells = s.chars().filter(|c| !matches!(c, '/' | '|'));

        for pos in Position::ALL {
            let square = match cells.next() {
                Some('X' | 'x') => Square::Occupied(Player::Human),
                Some('O' | 'o') => Square::Occupied(Player::Computer),
                Some('.' | '-' | '_' | ' ') => Square::Empty,
                Some(other) => return Err(BoardParseError::InvalidSymbol(other)),
                None => return Err(BoardParseError::WrongLength(pos.to_index())),
            };
            board.set(pos, square);
        }

        let extra = cells.count();
        if extra > 0 {
            return Err(BoardParseError::WrongLength(9 + extra));
        }

        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
