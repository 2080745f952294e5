//! Uniform-random move selection (Easy tier).

use super::Strategy;
use crate::error::GameError;
use crate::types::{Board, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks uniformly among the empty squares.
///
/// Depends on nothing about the board beyond emptiness.
#[derive(Debug)]
pub struct RandomChoice {
    rng: StdRng,
}

impl RandomChoice {
    /// Creates a strategy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic strategy from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomChoice {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize, GameError> {
        let empty: Vec<usize> = board.empty_squares().collect();
        if empty.is_empty() {
            return Err(GameError::NoMovesAvailable);
        }
        let choice = empty[self.rng.gen_range(0..empty.len())];
        debug!(position = choice, candidates = empty.len(), "Random pick");
        Ok(choice)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
