//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight ways to get three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// A horizontal row (0-2, top to bottom).
    Row(u8),
    /// A vertical column (0-2, left to right).
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// All lines in evaluation order: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    Line::Row(0),
    Line::Row(1),
    Line::Row(2),
    Line::Column(0),
    Line::Column(1),
    Line::Column(2),
    Line::Diagonal,
    Line::AntiDiagonal,
];

impl Line {
    /// The three positions that make up this line.
    pub fn positions(self) -> [Position; 3] {
        let at = |i: usize| Position::ALL[i];
        match self {
            Line::Row(r) => {
                let r = r as usize * 3;
                [at(r), at(r + 1), at(r + 2)]
            }
            Line::Column(c) => {
                let c = c as usize;
                [at(c), at(c + 3), at(c + 6)]
            }
            Line::Diagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r),
            Line::Column(c) => write!(f, "column {}", c),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Finds the first complete line and who owns it.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO_/___".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::X, Line::Row(0))));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO_/XO_/_O_".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, Line::Column(1))));
    }

    #[test]
    fn test_winner_diagonals() {
        let board: Board = "O__/_O_/__O".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, Line::Diagonal)));

        let board: Board = "__X/_X_/X__".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::X, Line::AntiDiagonal)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_/___/___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/___/___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_positions() {
        assert_eq!(
            Line::Column(2).positions(),
            [Position::TopRight, Position::MiddleRight, Position::BottomRight]
        );
        assert_eq!(
            Line::Row(1).positions(),
            [Position::MiddleLeft, Position::Center, Position::MiddleRight]
        );
    }
}
