//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

/// Backed-up search value of a terminal board: +1 if X has won,
/// -1 if O has won, 0 for a draw.
pub type Score = i8;

/// 3x3 tic-tac-toe board.
///
/// Boards are immutable values: every operation that advances the game
/// returns a fresh board and leaves its input untouched. Callers that
/// need history keep the prior values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board. This is the starting state of a game.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from three rows of three cells.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row, cols) in rows.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                cells[row * 3 + col] = *cell;
            }
        }
        Self { cells }
    }

    /// Gets the cell at the given coordinates, or `None` if either
    /// coordinate is outside `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Some(self.cells[row * 3 + col])
    }

    /// Checks if the cell at the given coordinates is empty.
    ///
    /// Out-of-range coordinates are not empty (nothing can be placed there).
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the marks placed by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(player))
            .count()
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Marked(Player::X) => 'X',
                    Cell::Marked(Player::O) => 'O',
                };
                write!(f, "{}", symbol)?;
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
