//! Headless matches against a random opponent.

use arcade_tictactoe::{GameSession, HUMAN, IllegalMove, MatchScore, MoveSelector};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a batch of simulated games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of games played.
    pub games: u32,
    /// Seed shared by the random opponent and the AI.
    pub seed: u64,
    /// Final tally, with the random opponent in the "Player" column.
    pub score: MatchScore,
}

/// Plays `games` sessions where X picks uniformly among legal squares.
///
/// The same seed always produces the same report.
///
/// # Errors
///
/// Returns an [`IllegalMove`] only if the session rejects a move drawn from
/// its own list of empty squares, which indicates a bug.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<SimulationReport, IllegalMove> {
    let mut opponent = ChaCha8Rng::seed_from_u64(seed);
    let mut session = GameSession::new(MoveSelector::seeded(seed.wrapping_add(1)));
    let mut score = MatchScore::new();

    for game in 0..games {
        session.reset();
        while !session.phase().is_terminal() {
            let free = session.board().empty_positions();
            let Some(pos) = free.choose(&mut opponent).copied() else {
                break;
            };
            let snapshot = session.submit_move(pos.row(), pos.col())?;
            if !snapshot.phase.is_terminal() {
                session.request_ai_move()?;
            }
        }
        let outcome = session.outcome();
        score.record(outcome, HUMAN);
        debug!(game, %outcome, "Simulated game finished");
    }

    info!(%score, "Simulation complete");
    Ok(SimulationReport { games, seed, score })
}
