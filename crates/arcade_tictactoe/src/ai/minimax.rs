//! Exhaustive minimax search (Hard tier).
//!
//! Full game-tree search to terminal states. No pruning: the state
//! space is tiny (board shrinks by one square per ply, recursion depth
//! at most 9), and the tie-break contract below requires visiting every
//! top-level branch anyway.

use super::Strategy;
use crate::error::GameError;
use crate::rules::{check_winner, is_draw};
use crate::types::{Board, Player};
use tracing::debug;

/// Optimal move selection by exhaustive adversarial search.
///
/// Terminal states score `10 - depth` when the mover wins and
/// `depth - 10` when the opponent wins, where `depth` counts plies
/// from the move under evaluation. The depth weighting makes the
/// search win as early and lose as late as possible. Draws score 0.
///
/// Top-level selection keeps only strictly greater values, so the
/// lowest index wins all ties - a deterministic, testable contract.
/// Playing first or second, this strategy never loses.
#[derive(Debug, Clone, Copy)]
pub struct Minimax;

impl Strategy for Minimax {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let mut scratch = board.clone();
        let mut best: Option<(usize, i32)> = None;

        for index in 0..9 {
            if !scratch.is_empty(index) {
                continue;
            }
            scratch.put(index, player);
            let value = search(&mut scratch, player.opponent(), player, 1);
            scratch.clear(index);

            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((index, value));
            }
        }

        match best {
            Some((index, value)) => {
                debug!(position = index, value, "Search selected move");
                Ok(index)
            }
            None => Err(GameError::NoMovesAvailable),
        }
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Evaluates every empty square for `player` and returns
/// `(index, search value)` pairs in ascending index order.
///
/// The selection in [`Minimax`] keeps the first maximal entry of this
/// list; tests use it to check that no alternative scores higher.
pub fn move_values(board: &Board, player: Player) -> Vec<(usize, i32)> {
    let mut scratch = board.clone();
    let mut values = Vec::new();

    for index in 0..9 {
        if !scratch.is_empty(index) {
            continue;
        }
        scratch.put(index, player);
        let value = search(&mut scratch, player.opponent(), player, 1);
        scratch.clear(index);
        values.push((index, value));
    }

    values
}

/// Recursive value of `board` with `to_move` to play, from the
/// perspective of `root`. Maximizes at root's turns, minimizes at the
/// opponent's. `depth` is the ply distance from the move under
/// evaluation at the top level.
fn search(board: &mut Board, to_move: Player, root: Player, depth: i32) -> i32 {
    if let Some((winner, _)) = check_winner(board) {
        return if winner == root { 10 - depth } else { depth - 10 };
    }
    if is_draw(board) {
        return 0;
    }

    let maximizing = to_move == root;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..9 {
        if !board.is_empty(index) {
            continue;
        }
        board.put(index, to_move);
        let value = search(board, to_move.opponent(), root, depth + 1);
        board.clear(index);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        // Machine at 0,1 wins at 2 in one ply: value 10 - 1 = 9.
        let mut board = Board::new();
        board.place(0, Player::Machine).unwrap();
        board.place(1, Player::Machine).unwrap();
        board.place(3, Player::Human).unwrap();
        board.place(4, Player::Human).unwrap();

        let mut strategy = Minimax;
        assert_eq!(strategy.select_move(&board, Player::Machine).unwrap(), 2);

        let values = move_values(&board, Player::Machine);
        let win = values.iter().find(|(i, _)| *i == 2).unwrap();
        assert_eq!(win.1, 9);
    }

    #[test]
    fn test_blocks_forced_loss() {
        // Human at 0,1 threatens the top row; every machine reply
        // except 2 loses.
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        board.place(1, Player::Human).unwrap();
        board.place(4, Player::Machine).unwrap();

        let mut strategy = Minimax;
        assert_eq!(strategy.select_move(&board, Player::Machine).unwrap(), 2);
    }

    #[test]
    fn test_full_board_rejected() {
        let mut board = Board::new();
        for index in [0, 2, 5, 6, 7] {
            board.place(index, Player::Human).unwrap();
        }
        for index in [1, 3, 4, 8] {
            board.place(index, Player::Machine).unwrap();
        }

        let mut strategy = Minimax;
        assert_eq!(
            strategy.select_move(&board, Player::Machine),
            Err(GameError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_tie_break_lowest_index() {
        // On an empty board every reply draws under optimal play, so
        // all nine moves score 0 and index 0 must be chosen.
        let board = Board::new();
        let values = move_values(&board, Player::Machine);
        let max = values.iter().map(|(_, v)| *v).max().unwrap();
        let lowest_max = values.iter().find(|(_, v)| *v == max).unwrap().0;

        let mut strategy = Minimax;
        assert_eq!(
            strategy.select_move(&board, Player::Machine).unwrap(),
            lowest_max
        );
    }

    #[test]
    fn test_recursion_depth_bounded() {
        // A full search from the empty board touches at most 9 plies;
        // this completes quickly or the search has regressed.
        let board = Board::new();
        let values = move_values(&board, Player::Human);
        assert_eq!(values.len(), 9);
        assert!(values.iter().all(|(_, v)| *v == 0));
    }
}
