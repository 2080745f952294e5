//! Interactive participants for the terminal front-end.

use anyhow::{Context, Result};
use arcade_tictactoe::{Difficulty, GameController, Snapshot};
use async_trait::async_trait;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::time::sleep;
use tracing::debug;

/// Result of a participant acting on the controller.
pub enum Turn {
    /// The participant changed the game state.
    Played(Snapshot),
    /// The human asked to leave.
    Quit,
}

/// A side of the game loop: the human at the keyboard or the machine
/// behind its thinking delay.
#[async_trait]
pub trait Participant: Send {
    /// Takes one action on the controller.
    async fn act(&mut self, game: &mut GameController) -> Result<Turn>;

    /// Returns the participant's display name.
    fn name(&self) -> &'static str;
}

/// Human player reading commands from stdin.
pub struct HumanPlayer {
    reader: BufReader<Stdin>,
}

impl HumanPlayer {
    /// Creates a player attached to stdin.
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Participant for HumanPlayer {
    /// Reads lines until one changes the game state. Rejected moves
    /// are reported and re-prompted; they never fall through silently.
    async fn act(&mut self, game: &mut GameController) -> Result<Turn> {
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .context("reading stdin")?;
            if read == 0 {
                // EOF: treat like quitting.
                return Ok(Turn::Quit);
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            debug!(input, "Human command");

            match input {
                "quit" | "q" | "exit" => return Ok(Turn::Quit),
                "restart" | "r" => match game.restart() {
                    Ok(snapshot) => return Ok(Turn::Played(snapshot)),
                    Err(error) => println!("{error}"),
                },
                other => {
                    if let Some(level) = other.strip_prefix("difficulty") {
                        match Difficulty::from_str(level.trim()) {
                            Ok(level) => match game.set_difficulty(level) {
                                Ok(snapshot) => return Ok(Turn::Played(snapshot)),
                                Err(error) => println!("{error}"),
                            },
                            Err(_) => println!(
                                "Unknown difficulty '{}' (easy, medium, hard)",
                                level.trim()
                            ),
                        }
                    } else if let Ok(index) = other.parse::<usize>() {
                        match game.apply_human_move(index) {
                            Ok(snapshot) => return Ok(Turn::Played(snapshot)),
                            Err(error) => println!("{error}"),
                        }
                    } else {
                        println!(
                            "Enter a square number 0-8, 'restart', 'difficulty <level>', or 'quit'"
                        );
                    }
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "human"
    }
}

/// Machine player: waits out the thinking delay, then lets the
/// controller's strategy move. The pause lives here so the engine's
/// move selection stays synchronous and timing-free.
pub struct MachinePlayer;

#[async_trait]
impl Participant for MachinePlayer {
    async fn act(&mut self, game: &mut GameController) -> Result<Turn> {
        sleep(game.thinking_delay()).await;
        let snapshot = game.play_machine_turn()?;
        Ok(Turn::Played(snapshot))
    }

    fn name(&self) -> &'static str {
        "machine"
    }
}
