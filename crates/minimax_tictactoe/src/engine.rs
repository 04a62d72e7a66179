//! Board queries and the state transition.
//!
//! The player to move is derived from the marks on the board rather
//! than stored next to it: X always moves first and turns alternate, so
//! the mark counts determine whose turn it is on every reachable board.

use crate::action::{Action, ActionError};
use crate::invariants::{Invariant, MarkBalance};
use crate::types::{Board, Cell, Player};
use tracing::{instrument, warn};

/// Returns the player who moves next on the board.
///
/// X moves if X has placed fewer or equal marks, otherwise O.
pub fn active_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every action addressing an empty cell, in row-major order.
///
/// The order is part of the contract: `choose_move` breaks score ties
/// by keeping the first action in this order, so move selection is
/// reproducible. Empty when the board is full.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    let mut actions = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            if board.is_empty_at(row, col) {
                actions.push(Action::new(row, col));
            }
        }
    }
    actions
}

/// Applies an action, returning the successor board.
///
/// The new board holds the active player's mark at the action's cell;
/// the input board is left untouched.
///
/// # Errors
///
/// Returns [`ActionError::OutOfBounds`] if a coordinate is outside the
/// grid and [`ActionError::Occupied`] if the cell is already marked.
#[instrument(level = "debug", skip(board), fields(player = %active_player(board)))]
pub fn apply(board: &Board, action: Action) -> Result<Board, ActionError> {
    // Out-of-contract boards are tolerated, not rejected.
    if !MarkBalance::holds(board) {
        warn!(invariant = MarkBalance::description(), "applying action to unreachable board");
    }

    let index = action.index().ok_or(ActionError::OutOfBounds(action))?;
    if board.cells()[index] != Cell::Empty {
        return Err(ActionError::Occupied(action));
    }

    let mut next = board.clone();
    next.set(index, Cell::Marked(active_player(board)));
    Ok(next)
}

/// Replays a recorded sequence of actions from the empty board.
///
/// # Errors
///
/// Returns the first [`ActionError`] encountered, with the boards up to
/// that point discarded.
pub fn replay(actions: &[Action]) -> Result<Board, ActionError> {
    let mut board = Board::new();
    for action in actions {
        board = apply(&board, *action)?;
    }
    Ok(board)
}
