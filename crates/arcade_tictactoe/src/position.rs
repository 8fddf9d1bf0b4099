//! Named squares of the 3x3 board.

use super::action::IllegalMove;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the tic-tac-toe board.
///
/// Positions are ordered row-major, so `Position::ALL` (and
/// `strum::IntoEnumIterator::iter`) walk the board top row first,
/// left to right. The AI's scan order depends on this.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
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

    /// The four corners, in row-major order.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] unless both coordinates are in `0..=2`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, IllegalMove> {
        if row > 2 || col > 2 {
            return Err(IllegalMove::OutOfBounds { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Parses either `"row col"` (0-based) or a single keypad digit `1`-`9`.
    ///
    /// Returns `None` for text that is neither form. Well-formed coordinates
    /// outside the grid come back as `Some(Err(..))`.
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Result<Position, IllegalMove>> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [digit] => {
                let num = digit.parse::<usize>().ok()?;
                num.checked_sub(1).and_then(Self::from_index).map(Ok)
            }
            [row, col] => {
                let row = row.parse::<usize>().ok()?;
                let col = col.parse::<usize>().ok()?;
                Some(Self::from_coords(row, col))
            }
            _ => None,
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_coords_round_trip_through_index() {
        for pos in Position::iter() {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Ok(pos));
        }
    }

    #[test]
    fn test_iter_matches_row_major_order() {
        assert!(Position::iter().eq(Position::ALL));
    }

    #[test]
    fn test_out_of_range_coords_rejected() {
        assert_eq!(
            Position::from_coords(3, 0),
            Err(IllegalMove::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Position::from_coords(1, 7),
            Err(IllegalMove::OutOfBounds { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_parse_input_forms() {
        assert_eq!(Position::parse_input("1 2"), Some(Ok(Position::MiddleRight)));
        assert_eq!(Position::parse_input("2,0"), Some(Ok(Position::BottomLeft)));
        assert_eq!(Position::parse_input("5"), Some(Ok(Position::Center)));
        assert_eq!(Position::parse_input("9"), Some(Ok(Position::BottomRight)));
        assert_eq!(Position::parse_input("0"), None);
        assert!(matches!(
            Position::parse_input("3 3"),
            Some(Err(IllegalMove::OutOfBounds { .. }))
        ));
        assert_eq!(Position::parse_input("center"), None);
        assert_eq!(Position::parse_input(""), None);
    }
}
