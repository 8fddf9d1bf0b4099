//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Nothing here mutates state, so the
//! AI can call them freely against tentative positions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board.
///
/// Always derived from a [`Board`] with [`evaluate`], never stored on its
/// own, so it cannot drift out of sync with the squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// Rows are checked first, then columns, then diagonals; the first complete
/// line decides the winner. Boards that could not arise in legal play (two
/// winners, unbalanced marks) are evaluated the same way without panicking.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Empty squares in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for text in ["XX_/OO_/___", "XXX/OO_/___", "XOX/XOO/OXX", "_O_/___/___"] {
            let board: Board = text.parse().unwrap();
            assert_eq!(evaluate(&board), evaluate(&board));
        }
    }

    #[test]
    fn test_double_winner_board_reports_row_first() {
        // Not reachable in play: X owns the top row, O owns the bottom
        // row. The row scan reaches the top row first.
        let board: Board = "XXX/___/OOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_row_beats_column_when_both_complete() {
        let board: Board = "OXX/OXX/OXX".parse().unwrap();
        // No row is uniform; column 0 (O) is found before column 1 (X).
        assert_eq!(evaluate(&board), Outcome::Win(Player::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
        assert!(Outcome::Win(Player::X).is_terminal());
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board: Board = "X_O/_X_/O__".parse().unwrap();
        assert_eq!(
            legal_moves(&board),
            vec![
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }
}
