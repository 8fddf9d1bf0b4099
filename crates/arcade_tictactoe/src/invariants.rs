//! Properties that must hold for a session after every applied move.
//!
//! The session checks these in debug builds. They are public so tests can
//! assert them directly.

use super::{GameSession, Player, Square};
use tracing::warn;

/// A property of a session that every applied move must preserve.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// The failed property's description.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Properties checked as a group, reporting every failure at once.
pub trait InvariantSet<S> {
    /// Returns each violated property, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has the same number of marks as O, or one more.
///
/// X always moves first and the session alternates turns, so any other
/// balance means a move was applied out of turn.
pub struct MarkBalanceInvariant;

impl<R> Invariant<GameSession<R>> for MarkBalanceInvariant {
    fn holds(session: &GameSession<R>) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: the move history replays onto exactly the current board.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<GameSession<R>> for HistoryConsistentInvariant {
    fn holds(session: &GameSession<R>) -> bool {
        let board = session.board();
        let history = session.history();

        let filled = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        if filled != history.len() {
            warn!(filled, history_len = history.len(), "History length mismatch");
            return false;
        }

        history
            .iter()
            .all(|mov| board.get(mov.position) == Square::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}

/// Every invariant a session maintains.
pub type SessionInvariants = (MarkBalanceInvariant, HistoryConsistentInvariant);
