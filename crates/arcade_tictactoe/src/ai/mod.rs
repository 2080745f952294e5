//! Move selection strategies for the machine opponent.
//!
//! Three tiers: uniform-random, a one-ply win-or-block heuristic, and
//! an exhaustive minimax search that plays optimally. All tiers are
//! synchronous and operate on board snapshots; any "thinking" delay is
//! a front-end scheduling concern, not part of move selection.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::TwoPly;
pub use minimax::{move_values, Minimax};
pub use random::RandomChoice;

use crate::error::GameError;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// A move selection capability.
///
/// The mover's opponent is always `player.opponent()`; with a closed
/// two-player enum there is no third party to name.
pub trait Strategy: Send {
    /// Selects an empty square for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMovesAvailable`] if the board is full.
    /// Callers are expected to check terminality first; a full board
    /// here is a contract violation, not a playable position.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;
}

/// Difficulty tier selecting which strategy the controller uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform-random move selection.
    Easy,
    /// Win-or-block heuristic, one ply deep. Deliberately fork-blind.
    Medium,
    /// Exhaustive minimax search; never loses.
    Hard,
}

impl Difficulty {
    /// Builds the strategy for this tier.
    ///
    /// A seed makes the Easy and Medium tiers deterministic; Hard is
    /// deterministic regardless and ignores it.
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => match seed {
                Some(seed) => Box::new(RandomChoice::seeded(seed)),
                None => Box::new(RandomChoice::new()),
            },
            Difficulty::Medium => match seed {
                Some(seed) => Box::new(TwoPly::seeded(seed)),
                None => Box::new(TwoPly::new()),
            },
            Difficulty::Hard => Box::new(Minimax),
        }
    }
}

impl Default for Difficulty {
    /// Medium is the documented safe default: unknown levels parsed
    /// from text are rejected by `FromStr`, and callers that need a
    /// fallback get this rather than a silent no-op.
    fn default() -> Self {
        Difficulty::Medium
    }
}
