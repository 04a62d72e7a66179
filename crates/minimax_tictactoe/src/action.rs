//! First-class action type for tic-tac-toe.
//!
//! An action names the cell a mark goes into. Which mark is placed is
//! derived from the board it is applied to, so actions can be recorded,
//! serialized for replay, and validated independently of execution.

use serde::{Deserialize, Serialize};

/// A move target: the (row, column) coordinates of a cell.
///
/// Valid only when it addresses an empty cell of the board it is
/// applied to; `apply` checks this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0-2, top to bottom).
    pub row: usize,
    /// Column index (0-2, left to right).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major cell index (0-8), or `None` if either coordinate is
    /// outside `0..3`.
    pub fn index(&self) -> Option<usize> {
        if self.row >= 3 || self.col >= 3 {
            return None;
        }
        Some(self.row * 3 + self.col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// A coordinate lies outside the 3x3 grid.
    #[display("Coordinates {_0} are outside the 3x3 grid")]
    OutOfBounds(Action),

    /// The addressed cell is already marked.
    #[display("Cell {_0} is already marked")]
    Occupied(Action),
}

impl std::error::Error for ActionError {}
