//! Core domain types for tic-tac-toe.

use super::action::IllegalMove;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::str::FromStr;
use tracing::{instrument, trace};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (the human, goes first).
    X,
    /// Player O (the AI, goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board only guarantees one state per square. Turn alternation is the
/// session's job, so a board built by hand may hold any mix of marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
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

    /// Gets the square at grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] for coordinates outside `0..=2`.
    pub fn at(&self, row: usize, col: usize) -> Result<Square, IllegalMove> {
        Position::from_coords(row, col).map(|pos| self.get(pos))
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::SquareOccupied`] if the square already holds a
    /// mark. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: Position, player: Player) -> Result<(), IllegalMove> {
        if !self.is_empty(pos) {
            return Err(IllegalMove::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Places a mark at grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] or [`IllegalMove::SquareOccupied`];
    /// the board is unchanged on error.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<Position, IllegalMove> {
        let pos = Position::from_coords(row, col)?;
        self.set(pos, player)?;
        Ok(pos)
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Empty squares in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Tentatively places a mark, returning a guard that erases it on drop.
    ///
    /// The guard derefs to the board so rules can be evaluated against the
    /// tentative position. However control leaves the scope, the square is
    /// empty again afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::SquareOccupied`] if the square is not empty.
    pub fn speculate(&mut self, pos: Position, player: Player) -> Result<Speculation<'_>, IllegalMove> {
        self.set(pos, player)?;
        trace!(position = ?pos, ?player, "Speculative mark placed");
        Ok(Speculation { board: self, pos })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board text: {message}")]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub message: String,
}

impl BoardParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses rows such as `"XX_/OO_/___"`.
    ///
    /// Rows are separated by `/` or whitespace; `X` and `O` (any case) are
    /// marks and `_`, `.` or `-` are empty squares.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 3 {
            return Err(BoardParseError::new(format!(
                "expected 3 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if cells.len() != 3 {
                return Err(BoardParseError::new(format!(
                    "row {} has {} cells, expected 3",
                    row,
                    cells.len()
                )));
            }
            for (col, c) in cells.into_iter().enumerate() {
                board.squares[row * 3 + col] = match c {
                    'X' | 'x' => Square::Occupied(Player::X),
                    'O' | 'o' => Square::Occupied(Player::O),
                    '_' | '.' | '-' => Square::Empty,
                    other => {
                        return Err(BoardParseError::new(format!(
                            "unexpected '{}' at ({}, {})",
                            other, row, col
                        )));
                    }
                };
            }
        }
        Ok(board)
    }
}

/// A mark placed by [`Board::speculate`], erased when the guard drops.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Speculation<'_> {
    /// The square holding the tentative mark.
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.squares[self.pos.to_index()] = Square::Empty;
    }
}
