//! Arcade Games - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use arcade_games::{GameConfig, run_interactive, simulate};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            seed,
            ai_delay_ms,
        } => run_play(config, seed, ai_delay_ms).await,
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(config_path: PathBuf, seed: Option<u64>, ai_delay_ms: Option<u64>) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)
        .context("Failed to load game configuration")?
        .with_overrides(ai_delay_ms, seed);
    info!(?config, "Starting interactive game");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let score = run_interactive(&config, stdin, &mut stdout).await?;

    println!("Final score - {}", score);
    Ok(())
}

/// Run a headless batch and print the report
#[instrument]
fn run_simulate(games: u32, seed: u64, json: bool) -> Result<()> {
    let report = simulate(games, seed).context("Simulation rejected a legal move")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Games: {}  (seed {})", report.games, report.seed);
        println!("{}", report.score);
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,arcade_games=info")),
        )
        .init();
}
