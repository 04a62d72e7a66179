//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can be built on top of them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::winner;

use crate::types::{Board, Player, Score};

/// Checks if the game is over: a winner exists or the board is full.
///
/// Terminal boards admit no further actions.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a terminal board: +1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful for terminal boards. On a non-terminal board no line
/// is complete, so the result is 0 and advisory at best.
pub fn score(board: &Board) -> Score {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
