//! Human-versus-AI game session.
//!
//! The session owns the board and decides whose turn it is. The human plays
//! X and moves first; the AI plays O. A presentation layer drives it with
//! four calls: [`GameSession::new`], [`GameSession::submit_move`],
//! [`GameSession::request_ai_move`] and [`GameSession::reset`].
//!
//! ```text
//! AwaitingHumanMove --submit_move--> AwaitingAiMove --request_ai_move--> AwaitingHumanMove
//!         |                                 |
//!         +------------ Terminal <----------+     (absorbing until reset)
//! ```

use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{Line, winning_line};
use super::{Board, IllegalMove, Move, MoveSelector, Outcome, Player, evaluate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human, who always moves first.
pub const HUMAN: Player = Player::X;

/// Mark played by the AI.
pub const AI: Player = Player::O;

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human (X) to submit a move.
    AwaitingHumanMove,
    /// Waiting for the caller to request the AI's (O) reply.
    AwaitingAiMove,
    /// The game has ended; only [`GameSession::reset`] is accepted.
    Terminal(Outcome),
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHumanMove => write!(f, "Your turn ({})", HUMAN),
            Phase::AwaitingAiMove => write!(f, "AI thinking..."),
            Phase::Terminal(Outcome::Win(player)) if *player == HUMAN => {
                write!(f, "You Win!")
            }
            Phase::Terminal(Outcome::Win(_)) => write!(f, "AI Wins!"),
            Phase::Terminal(Outcome::Draw) => write!(f, "It's a Tie!"),
            // Not produced by the session; a terminal phase always carries a result.
            Phase::Terminal(Outcome::InProgress) => write!(f, "Game over"),
        }
    }
}

/// State returned from every session operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Copy of the board after the operation.
    pub board: Board,
    /// Evaluation of that board.
    pub outcome: Outcome,
    /// Whose move is next, or the final result.
    pub phase: Phase,
    /// The move just applied, if the operation applied one.
    pub last_move: Option<Move>,
    /// The completed line when the outcome is a win.
    pub winning_line: Option<Line>,
}

/// A single human-versus-AI game.
#[derive(Debug, Clone)]
pub struct GameSession<R = ChaCha8Rng> {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
    selector: MoveSelector<R>,
}

impl<R> GameSession<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            outcome: self.outcome(),
            phase: self.phase,
            last_move: self.history.last().copied(),
            winning_line: winning_line(&self.board).map(|(_, line)| line),
        }
    }
}

impl<R: Rng> GameSession<R> {
    /// Starts a new session with an empty board, awaiting the human's move.
    #[instrument(skip(selector))]
    pub fn new(selector: MoveSelector<R>) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHumanMove,
            history: Vec::new(),
            selector,
        }
    }

    /// Rebuilds a session by applying recorded moves in order.
    ///
    /// Moves bypass the selector, so both sides' marks come from `moves`.
    /// They must alternate starting with the human.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] encountered: a move by the wrong
    /// player, onto an occupied square, or after the game ended.
    #[instrument(skip(selector))]
    pub fn replay(moves: &[Move], selector: MoveSelector<R>) -> Result<Self, IllegalMove> {
        let mut session = Self::new(selector);
        for mov in moves {
            let expected = match session.phase {
                Phase::AwaitingHumanMove => HUMAN,
                Phase::AwaitingAiMove => AI,
                Phase::Terminal(_) => return Err(IllegalMove::GameOver),
            };
            if mov.player != expected {
                return Err(IllegalMove::OutOfTurn(mov.player));
            }
            session.board.set(mov.position, mov.player)?;
            session.record(*mov);
        }
        Ok(session)
    }

    /// Applies the human's move at grid coordinates.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameOver`] after the game has ended
    /// - [`IllegalMove::OutOfTurn`] while the AI's reply is pending
    /// - [`IllegalMove::OutOfBounds`] for coordinates outside `0..=2`
    /// - [`IllegalMove::SquareOccupied`] if the square is taken
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Snapshot, IllegalMove> {
        match self.phase {
            Phase::AwaitingHumanMove => {}
            Phase::AwaitingAiMove => {
                warn!("Human tried to move while AI reply is pending");
                return Err(IllegalMove::OutOfTurn(HUMAN));
            }
            Phase::Terminal(_) => return Err(IllegalMove::GameOver),
        }

        let position = self
            .board
            .place(row, col, HUMAN)
            .inspect_err(|e| warn!(error = %e, "Invalid move"))?;

        Ok(self.record(Move::new(HUMAN, position)))
    }

    /// Lets the AI choose and apply its reply.
    ///
    /// Callers may wait as long as they like before calling this; the choice
    /// depends only on the board and the selector's random source.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameOver`] after the game has ended
    /// - [`IllegalMove::OutOfTurn`] while the human's move is pending
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn request_ai_move(&mut self) -> Result<Snapshot, IllegalMove> {
        match self.phase {
            Phase::AwaitingAiMove => {}
            Phase::AwaitingHumanMove => return Err(IllegalMove::OutOfTurn(AI)),
            Phase::Terminal(_) => return Err(IllegalMove::GameOver),
        }

        // A non-terminal board always has an empty square.
        let (mov, tier) = self
            .selector
            .select_with_tier(&mut self.board, AI, HUMAN)
            .ok_or(IllegalMove::GameOver)?;
        self.board.set(mov.position, mov.player)?;
        debug!(%tier, "AI move applied");

        Ok(self.record(mov))
    }

    /// Clears the board and returns to awaiting the human's move.
    ///
    /// Accepted in any phase.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        info!(moves = self.history.len(), "Resetting game session");
        self.board = Board::new();
        self.history.clear();
        self.phase = Phase::AwaitingHumanMove;
        self.snapshot()
    }

    fn record(&mut self, mov: Move) -> Snapshot {
        self.history.push(mov);

        let outcome = evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            Phase::Terminal(outcome)
        } else if mov.player == HUMAN {
            Phase::AwaitingAiMove
        } else {
            Phase::AwaitingHumanMove
        };

        debug_assert!(
            SessionInvariants::check_all(&*self).is_ok(),
            "Session invariants violated after {}",
            mov
        );

        info!(
            player = %mov.player,
            position = %mov.position,
            outcome = %outcome,
            "Move completed successfully"
        );
        self.snapshot()
    }
}
