//! Terminal front-end for the arcade tic-tac-toe engine.
//!
//! - **Config**: `arcade.toml` settings with command-line overrides
//! - **Play**: line-oriented interactive game against the AI
//! - **Simulate**: headless batches against a random opponent

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;
mod simulate;

pub use config::{ConfigError, GameConfig};
pub use play::run_interactive;
pub use simulate::{SimulationReport, simulate};
