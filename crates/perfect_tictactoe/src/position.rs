//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// Each variant is one (row, column) cell. Variants are declared in row-major
/// order, which is also the order every scan over the board uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Position {
    /// Row 0, column 0.
    #[strum(serialize = "Top-left")]
    TopLeft,
    /// Row 0, column 1.
    #[strum(serialize = "Top-center")]
    TopCenter,
    /// Row 0, column 2.
    #[strum(serialize = "Top-right")]
    TopRight,
    /// Row 1, column 0.
    #[strum(serialize = "Middle-left")]
    MiddleLeft,
    /// Row 1, column 1.
    #[strum(serialize = "Center")]
    Center,
    /// Row 1, column 2.
    #[strum(serialize = "Middle-right")]
    MiddleRight,
    /// Row 2, column 0.
    #[strum(serialize = "Bottom-left")]
    BottomLeft,
    /// Row 2, column 1.
    #[strum(serialize = "Bottom-center")]
    BottomCenter,
    /// Row 2, column 2.
    #[strum(serialize = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a (row, column) pair, each in 0..=2.
    pub fn from_coords(row: usize, column: usize) -> Option<Self> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// The (row, column) pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_coords(pos.row(), pos.column()), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_out_of_range() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::Center.label(), "Center");
        assert_eq!(Position::BottomRight.to_string(), "Bottom-right");
        assert_eq!(Position::TopLeft.coords(), (0, 0));
        assert_eq!(Position::BottomRight.coords(), (2, 2));
    }
}
