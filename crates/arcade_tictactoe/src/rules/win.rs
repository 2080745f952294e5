//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 possible winning lines, as board index triples.
///
/// Scan order is part of the contract: rows top-to-bottom, then
/// columns left-to-right, then main diagonal, then anti-diagonal.
/// When a board contains more than one completed line, the first in
/// this order is reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the completed line, or `None` if no
/// line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, [usize; 3])> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            if let Some(Square::Occupied(player)) = sq {
                return Some((player, line));
            }
        }
    }

    None
}
