//! Command-line interface for the arcade front-end.

use arcade_tictactoe::Difficulty;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Play tic-tac-toe against the engine in the terminal.
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Tic-tac-toe against a three-tier AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// AI difficulty: easy, medium, or hard
    #[arg(short, long, default_value = "medium", value_parser = parse_difficulty)]
    pub difficulty: Difficulty,

    /// Seed for the random tiers, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds the machine "thinks" before replying
    #[arg(long, default_value = "400")]
    pub delay_ms: u64,

    /// JSON file holding win tallies across sessions
    #[arg(long)]
    pub tally_file: Option<PathBuf>,
}

/// Unknown levels are rejected at the argument parser, never
/// silently defaulted.
fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s)
        .map_err(|_| format!("unknown difficulty '{s}' (expected easy, medium, or hard)"))
}
