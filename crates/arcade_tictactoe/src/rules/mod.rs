//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can probe hypothetical boards that are not
//! the live game state.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, WIN_LINES};

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board snapshot.
///
/// Total and deterministic over any board, including hypothetical
/// positions that were never played. Won boards report the first
/// completed line in [`WIN_LINES`] order.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Won { player, line }
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        board.place(4, Player::Machine).unwrap();
        let first = evaluate(&board);
        for _ in 0..10 {
            assert_eq!(evaluate(&board), first);
        }
    }

    #[test]
    fn test_won_board_reports_line() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board.place(index, Player::Human).unwrap();
        }
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                player: Player::Human,
                line: [0, 1, 2],
            }
        );
    }
}
