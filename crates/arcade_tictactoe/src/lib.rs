//! Pure tic-tac-toe game logic.
//!
//! The crate has no I/O. A presentation layer drives a [`GameSession`]
//! through four calls and renders the [`Snapshot`] each one returns.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: pure evaluation of a board into an [`Outcome`]
//! - **AI**: [`MoveSelector`], a tiered greedy heuristic
//! - **Session**: [`GameSession`], the human/AI turn state machine
//! - **Score**: [`MatchScore`], a tally kept by the surrounding loop
//!
//! # Example
//!
//! ```
//! use arcade_tictactoe::{GameSession, MoveSelector, Outcome, Phase};
//!
//! let mut session = GameSession::new(MoveSelector::seeded(7));
//! let snapshot = session.submit_move(0, 0)?;
//! assert_eq!(snapshot.phase, Phase::AwaitingAiMove);
//!
//! let snapshot = session.request_ai_move()?;
//! assert_eq!(snapshot.outcome, Outcome::InProgress);
//! # Ok::<(), arcade_tictactoe::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod invariants;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use action::{IllegalMove, Move};
pub use ai::{MoveSelector, Tier};
pub use invariants::{
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SessionInvariants,
};
pub use position::Position;
pub use rules::{Line, Outcome, evaluate};
pub use score::MatchScore;
pub use session::{AI, GameSession, HUMAN, Phase, Snapshot};
pub use types::{Board, BoardParseError, Player, Speculation, Square};
