//! Command-line interface for arcade_games.

use clap::{Parser, Subcommand};

/// Arcade Games - tic-tac-toe against a heuristic AI
#[derive(Parser, Debug)]
#[command(name = "arcade_games")]
#[command(about = "Play tic-tac-toe against a heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the config file (ignored if missing)
        #[arg(short, long, default_value = "arcade.toml")]
        config: std::path::PathBuf,

        /// Seed for the AI's corner choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the AI replies, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Play many games between the AI and a random opponent
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both sides
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
