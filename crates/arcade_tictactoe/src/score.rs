//! Score persistence collaborator interface.
//!
//! The engine holds no memory of past games; it emits a win event per
//! terminal `Won` outcome and the collaborator owns the tallies.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Receives a win event on every won game.
pub trait ScoreKeeper: Send {
    /// Records a win for the given player.
    fn record_win(&mut self, player: Player);
}

/// Shared handles count too, so a front-end can keep reading the
/// tallies it registered with the controller.
impl<K: ScoreKeeper> ScoreKeeper for std::sync::Arc<std::sync::Mutex<K>> {
    fn record_win(&mut self, player: Player) {
        self.lock().unwrap().record_win(player);
    }
}

/// In-memory win tallies.
///
/// Serde-serializable so a front-end can persist it between sessions,
/// like the original scoreboard blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Wins by the human player.
    pub human: u64,
    /// Wins by the machine opponent.
    pub machine: u64,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for a player.
    pub fn wins(&self, player: Player) -> u64 {
        match player {
            Player::Human => self.human,
            Player::Machine => self.machine,
        }
    }
}

impl ScoreKeeper for Tally {
    fn record_win(&mut self, player: Player) {
        match player {
            Player::Human => self.human += 1,
            Player::Machine => self.machine += 1,
        }
        info!(%player, human = self.human, machine = self.machine, "Win recorded");
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.human, self.machine)
    }
}
