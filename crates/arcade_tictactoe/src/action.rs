//! Moves and the error raised when one cannot be applied.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// A move that cannot be applied.
///
/// Every variant is recoverable: the board and session are left exactly as
/// they were, and the caller is expected to prompt again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({row}, {col}) are off the board (expected 0-2)")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The session is not waiting for this player's move.
    #[display("It's not {_0}'s turn")]
    OutOfTurn(Player),

    /// The game is over; only a reset is accepted.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::O, Position::Center);
        assert_eq!(mov.player, Player::O);
        assert_eq!(mov.position, Position::Center);
        assert_eq!(mov.to_string(), format!("O -> {}", Position::Center));
    }

    #[test]
    fn test_illegal_move_messages() {
        assert_eq!(
            IllegalMove::OutOfBounds { row: 3, col: 0 }.to_string(),
            "Coordinates (3, 0) are off the board (expected 0-2)"
        );
        assert_eq!(IllegalMove::OutOfTurn(Player::X).to_string(), "It's not X's turn");
        assert_eq!(IllegalMove::GameOver.to_string(), "Game is already over");
    }
}
