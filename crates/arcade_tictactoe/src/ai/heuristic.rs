//! One-ply win-or-block heuristic (Medium tier).

use super::{RandomChoice, Strategy};
use crate::error::GameError;
use crate::rules::check_winner;
use crate::types::{Board, Player};
use tracing::debug;

/// Two-step priority: take an immediate win, else block the
/// opponent's immediate win, else pick at random.
///
/// Each step scans indices in ascending order and returns the first
/// hit. The strategy only looks one ply ahead, so a double threat
/// (fork) defeats it; that weakness is the intended character of the
/// tier, not a defect.
#[derive(Debug)]
pub struct TwoPly {
    fallback: RandomChoice,
}

impl TwoPly {
    /// Creates a heuristic with an entropy-seeded random fallback.
    pub fn new() -> Self {
        Self {
            fallback: RandomChoice::new(),
        }
    }

    /// Creates a heuristic whose fallback is deterministic.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: RandomChoice::seeded(seed),
        }
    }

    /// First empty index where placing `player`'s mark completes a
    /// line, scanning 0..8 on a scratch copy.
    fn winning_square(board: &Board, player: Player) -> Option<usize> {
        let mut scratch = board.clone();
        for index in 0..9 {
            if scratch.is_empty(index) {
                scratch.put(index, player);
                let wins = check_winner(&scratch).is_some_and(|(winner, _)| winner == player);
                scratch.clear(index);
                if wins {
                    return Some(index);
                }
            }
        }
        None
    }
}

impl Default for TwoPly {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for TwoPly {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        if board.is_full() {
            return Err(GameError::NoMovesAvailable);
        }

        if let Some(index) = Self::winning_square(board, player) {
            debug!(position = index, "Taking immediate win");
            return Ok(index);
        }

        if let Some(index) = Self::winning_square(board, player.opponent()) {
            debug!(position = index, "Blocking opponent win");
            return Ok(index);
        }

        self.fallback.select_move(board, player)
    }

    fn name(&self) -> &'static str {
        "win-or-block"
    }
}
