//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// Cell indices of the eight winning lines, in the fixed scan order:
/// rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal. `winner` reports the first complete line found, which
/// only matters for unreachable boards with more than one complete line.
const LINES: [[usize; 3]; 8] = [
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
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Marked(player) = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Some(player);
            }
        }
    }
    None
}
