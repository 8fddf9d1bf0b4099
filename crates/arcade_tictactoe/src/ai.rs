//! Heuristic AI opponent.
//!
//! The selector walks a fixed list of tiers and takes the first one that
//! yields a square:
//!
//! 1. [`Tier::WinNow`]: complete a line of its own
//! 2. [`Tier::Block`]: occupy the square that would complete the opponent's line
//! 3. [`Tier::Center`]: take the center
//! 4. [`Tier::Corner`]: take a random free corner
//! 5. [`Tier::Any`]: take the first free square
//!
//! This is a greedy one-ply heuristic, not minimax. It never misses an
//! immediate win or block, but an opponent who sets up two threats at once
//! (a fork) can beat it. That is a known limitation of the policy.

use super::{Board, Move, Outcome, Player, Position, evaluate};
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that produced the AI's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Tier {
    /// Completed the AI's own line.
    #[display("win")]
    WinNow,
    /// Blocked the opponent's line.
    #[display("block")]
    Block,
    /// Took the center square.
    #[display("center")]
    Center,
    /// Took a random free corner.
    #[display("corner")]
    Corner,
    /// Took the first free square.
    #[display("first free")]
    Any,
}

/// Picks moves for the AI side.
///
/// Generic over the random source used for the corner tie-break so tests and
/// replays can pin the sequence with [`MoveSelector::seeded`].
#[derive(Debug, Clone)]
pub struct MoveSelector<R = ChaCha8Rng> {
    rng: R,
}

impl MoveSelector<ChaCha8Rng> {
    /// Creates a selector whose corner choices are reproducible from `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a selector seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move for `ai` against `human`.
    ///
    /// Returns `None` only when the board is full. Candidates are tried by
    /// placing a tentative mark and evaluating, so the board is borrowed
    /// mutably but is identical on return.
    pub fn select_move(&mut self, board: &mut Board, ai: Player, human: Player) -> Option<Move> {
        self.select_with_tier(board, ai, human).map(|(mov, _)| mov)
    }

    /// Like [`select_move`](Self::select_move), also reporting which tier fired.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn select_with_tier(
        &mut self,
        board: &mut Board,
        ai: Player,
        human: Player,
    ) -> Option<(Move, Tier)> {
        let (position, tier) = if let Some(pos) = completing_square(board, ai) {
            (pos, Tier::WinNow)
        } else if let Some(pos) = completing_square(board, human) {
            (pos, Tier::Block)
        } else if board.is_empty(Position::Center) {
            (Position::Center, Tier::Center)
        } else if let Some(pos) = self.free_corner(board) {
            (pos, Tier::Corner)
        } else {
            (board.empty_positions().first().copied()?, Tier::Any)
        };

        debug!(position = ?position, %tier, ?ai, "AI chose position");
        Some((Move::new(ai, position), tier))
    }

    fn free_corner(&mut self, board: &Board) -> Option<Position> {
        let free: Vec<Position> = Position::CORNERS
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}

/// First empty square (row-major) where `player` would complete a line.
fn completing_square(board: &mut Board, player: Player) -> Option<Position> {
    for pos in Position::ALL {
        let Ok(tentative) = board.speculate(pos, player) else {
            continue;
        };
        if evaluate(&tentative) == Outcome::Win(player) {
            return Some(pos);
        }
    }
    None
}
