//! Interactive terminal game against the AI.

use crate::config::GameConfig;
use anyhow::Result;
use arcade_tictactoe::{GameSession, HUMAN, MatchScore, Position, Snapshot};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

const HELP: &str =
    "Enter a square as 'row col' (0-2) or a number 1-9. 'new' starts over, 'quit' exits.";

/// Plays games read line by line from `input` until it ends or the player quits.
///
/// Returns the score accumulated over every finished game.
#[instrument(skip_all, fields(ai_delay_ms = config.ai_delay_ms()))]
pub async fn run_interactive<I, W>(config: &GameConfig, input: I, out: &mut W) -> Result<MatchScore>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = GameSession::new(config.selector());
    let mut score = MatchScore::new();

    writeln!(out, "Tic Tac Toe")?;
    writeln!(out, "{}", score)?;
    writeln!(out, "{}", HELP)?;
    render(out, &session.snapshot())?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim().to_lowercase();
        match command.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" | "reset" => {
                let snapshot = session.reset();
                render(out, &snapshot)?;
                continue;
            }
            "help" | "?" => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let position = match Position::parse_input(&command) {
            Some(Ok(position)) => position,
            Some(Err(e)) => {
                writeln!(out, "{}", e)?;
                continue;
            }
            None => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
        };

        let snapshot = match session.submit_move(position.row(), position.col()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        render(out, &snapshot)?;
        if finish(out, &snapshot, &mut score)? {
            continue;
        }

        tokio::time::sleep(config.ai_delay()).await;
        let snapshot = session.request_ai_move()?;
        render(out, &snapshot)?;
        finish(out, &snapshot, &mut score)?;
    }

    info!(%score, "Leaving interactive play");
    Ok(score)
}

/// Prints the board, status line and any winning line.
fn render<W: Write>(out: &mut W, snapshot: &Snapshot) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", snapshot.board)?;
    if let Some(line) = snapshot.winning_line {
        writeln!(out, "Winning line: {}", line)?;
    }
    writeln!(out, "{}", snapshot.phase)?;
    Ok(())
}

/// Scores a finished game. Returns true if the game ended.
fn finish<W: Write>(out: &mut W, snapshot: &Snapshot, score: &mut MatchScore) -> Result<bool> {
    if !snapshot.phase.is_terminal() {
        return Ok(false);
    }
    score.record(snapshot.outcome, HUMAN);
    writeln!(out, "{}", score)?;
    writeln!(out, "Type 'new' to play again.")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::new(0, Some(8))
    }

    async fn play(script: &str) -> (MatchScore, String) {
        let mut out = Vec::new();
        let score = run_interactive(&config(), script.as_bytes(), &mut out)
            .await
            .unwrap();
        (score, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_first_exchange() {
        let (score, text) = play("0 0\nquit\n").await;
        assert_eq!(score, MatchScore::new());
        assert!(text.contains("X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"));
        assert!(text.contains("AI thinking..."));
        assert!(text.ends_with("Your turn (X)\n"));
    }

    #[tokio::test]
    async fn test_rejects_bad_input_and_keeps_going() {
        let (_, text) = play("hello\n3 3\n5\n5\n").await;
        assert!(text.contains(HELP));
        assert!(text.contains("Coordinates (3, 3) are off the board"));
        assert!(text.contains("already occupied"));
    }

    #[tokio::test]
    async fn test_ai_win_is_scored() {
        // Human wastes moves along the edges; the AI takes the center and
        // finishes a line.
        let (score, text) = play("2\n4\n8\n6\n").await;
        assert_eq!(score.games(), 1);
        assert_eq!(score.ai_wins(), 1);
        assert!(text.contains("AI Wins!"));
        assert!(text.contains("Player: 0  |  AI: 1  |  Ties: 0"));
    }

    #[tokio::test]
    async fn test_each_game_scored_once() {
        // Input after the first AI win must not touch the score; the second
        // game repeats the same opening and is scored on its own.
        let (score, text) = play("2\n4\n8\n6\n1\n\nhelp\n9\nnew\n2\n4\n8\n5\n").await;
        assert_eq!(score.games(), 2);
        assert_eq!(score.ai_wins(), 2);
        assert_eq!(text.matches("Game is already over").count(), 4);
        assert_eq!(text.matches("Player: 0  |  AI: 1  |  Ties: 0").count(), 1);
        assert_eq!(text.matches("Player: 0  |  AI: 2  |  Ties: 0").count(), 1);
    }

    #[tokio::test]
    async fn test_new_resets_board() {
        let (_, text) = play("1\nnew\n").await;
        assert!(text.ends_with("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\nYour turn (X)\n"));
    }
}
