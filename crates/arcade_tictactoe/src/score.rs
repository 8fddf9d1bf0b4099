//! Running tally across repeated games.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins, losses and ties accumulated over the life of the process.
///
/// The score belongs to the loop that plays successive sessions, not to a
/// session. Record each finished game exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    human_wins: u32,
    ai_wins: u32,
    draws: u32,
}

impl MatchScore {
    /// Creates an all-zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Games won by the AI.
    pub fn ai_wins(&self) -> u32 {
        self.ai_wins
    }

    /// Games that ended in a tie.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games recorded.
    pub fn games(&self) -> u32 {
        self.human_wins + self.ai_wins + self.draws
    }

    /// Counts a finished game.
    ///
    /// Returns `false` and changes nothing for [`Outcome::InProgress`].
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, human: Player) -> bool {
        match outcome {
            Outcome::InProgress => return false,
            Outcome::Win(winner) if winner == human => self.human_wins += 1,
            Outcome::Win(_) => self.ai_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        debug!(score = %self, "Score updated");
        true
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player: {}  |  AI: {}  |  Ties: {}",
            self.human_wins, self.ai_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_each_outcome() {
        let mut score = MatchScore::new();
        assert!(score.record(Outcome::Win(Player::X), Player::X));
        assert!(score.record(Outcome::Win(Player::O), Player::X));
        assert!(score.record(Outcome::Draw, Player::X));
        assert!(score.record(Outcome::Draw, Player::X));
        assert_eq!((score.human_wins(), score.ai_wins(), score.draws()), (1, 1, 2));
        assert_eq!(score.games(), 4);
    }

    #[test]
    fn test_in_progress_is_ignored() {
        let mut score = MatchScore::new();
        assert!(!score.record(Outcome::InProgress, Player::X));
        assert_eq!(score, MatchScore::default());
    }

    #[test]
    fn test_display_matches_scoreboard() {
        let mut score = MatchScore::new();
        score.record(Outcome::Win(Player::O), Player::X);
        assert_eq!(score.to_string(), "Player: 0  |  AI: 1  |  Ties: 0");
    }
}
