//! Terminal front-end for the tic-tac-toe engine.
//!
//! Acts as the rendering and score-persistence collaborators: prints
//! board snapshots, relays human commands, honors the machine's
//! thinking delay, and keeps win tallies in an optional JSON file.

mod cli;
mod players;

use anyhow::{Context, Result};
use arcade_tictactoe::{GameController, Outcome, Phase, Tally};
use clap::Parser;
use cli::Cli;
use players::{HumanPlayer, MachinePlayer, Participant, Turn};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(difficulty = %cli.difficulty, seed = ?cli.seed, "Starting arcade");

    let mut game = match cli.seed {
        Some(seed) => GameController::with_seed(cli.difficulty, seed),
        None => GameController::new(cli.difficulty),
    };
    game.set_thinking_delay(Duration::from_millis(cli.delay_ms));

    let tally = Arc::new(Mutex::new(load_tally(cli.tally_file.as_deref())?));
    game.set_score_keeper(Box::new(Arc::clone(&tally)));

    println!("Tic-tac-toe: you are X and move first.");
    println!("Squares are numbered 0-8, left to right, top to bottom.");
    println!("Commands: <square>, restart, difficulty <level>, quit.");

    let mut human = HumanPlayer::new();
    let mut machine = MachinePlayer;
    info!(
        first = human.name(),
        second = machine.name(),
        "Participants ready"
    );

    loop {
        match game.phase() {
            Phase::AwaitingHuman => {
                println!("\n{}", game.board());
                print!("Your move: ");
                flush_prompt();
                match human.act(&mut game).await? {
                    Turn::Played(_) => {}
                    Turn::Quit => break,
                }
            }
            Phase::AwaitingMachine => {
                println!("O is thinking...");
                match machine.act(&mut game).await? {
                    Turn::Played(_) => {}
                    Turn::Quit => break,
                }
            }
            Phase::Over(outcome) => {
                println!("\n{}", game.board());
                announce(outcome);
                println!("Score - {}", *tally.lock().unwrap());
                save_tally(cli.tally_file.as_deref(), &tally.lock().unwrap())?;
                print!("Play again? (restart/quit): ");
                flush_prompt();
                match human.act(&mut game).await? {
                    Turn::Played(_) => {}
                    Turn::Quit => break,
                }
            }
        }
    }

    save_tally(cli.tally_file.as_deref(), &tally.lock().unwrap())?;
    println!("Thanks for playing.");
    Ok(())
}

/// Announces a terminal outcome, including the winning line the
/// renderer would draw through.
fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Won { player, line } => {
            println!(
                "Player {} wins through squares {}, {}, {}!",
                player, line[0], line[1], line[2]
            );
        }
        Outcome::Draw => println!("It's a draw!"),
        Outcome::InProgress => {}
    }
}

fn flush_prompt() {
    use std::io::Write;
    let _ = std::io::stdout().flush();
}

/// Loads tallies from the given file, or starts fresh.
fn load_tally(path: Option<&Path>) -> Result<Tally> {
    match path {
        Some(path) if path.exists() => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        _ => Ok(Tally::new()),
    }
}

/// Persists tallies when a file was configured.
fn save_tally(path: Option<&Path>, tally: &Tally) -> Result<()> {
    if let Some(path) = path {
        let text = serde_json::to_string_pretty(tally)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
