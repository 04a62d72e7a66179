//! Pure tic-tac-toe game logic with exhaustive minimax search.
//!
//! The board is an immutable value: queries are pure functions of it and
//! [`apply`] returns a fresh successor board. [`choose_move`] searches
//! every reachable terminal state to pick an optimal action for the
//! player to move. Drivers (a CLI, a GUI, a test harness) own the game
//! loop; this crate owns the rules and the search.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{apply, choose_move, is_terminal, score, Board};
//!
//! # fn main() -> Result<(), minimax_tictactoe::ActionError> {
//! let mut board = Board::new();
//! while let Some(action) = choose_move(&board) {
//!     board = apply(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(score(&board), 0); // optimal play draws
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod invariants;
mod rules;
mod search;
mod types;

// Crate-level exports - Actions
pub use action::{Action, ActionError};

// Crate-level exports - Board queries and transitions
pub use engine::{active_player, apply, legal_actions, replay};

// Crate-level exports - Invariants
pub use invariants::{verify, Invariant, InvariantViolation, MarkBalance, SingleWinner};

// Crate-level exports - Rules
pub use rules::{is_draw, is_full, is_terminal, score, winner};

// Crate-level exports - Search
pub use search::choose_move;

// Crate-level exports - Domain types
pub use types::{Board, Cell, Player, Score};
