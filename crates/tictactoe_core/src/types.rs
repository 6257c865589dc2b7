//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed on a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Sign {
    /// Sign X (moves on odd rounds, so always first).
    X,
    /// Sign O.
    O,
}

impl Sign {
    /// Returns the other sign.
    pub fn opponent(self) -> Self {
        match self {
            Sign::X => Sign::O,
            Sign::O => Sign::X,
        }
    }

    /// Sign whose turn it is on the given 1-based round.
    pub fn for_round(round: u8) -> Self {
        if round % 2 == 1 { Sign::X } else { Sign::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a sign.
    Occupied(Sign),
}

impl Cell {
    /// Sign on this cell, if any.
    pub fn sign(self) -> Option<Sign> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(sign) => Some(sign),
        }
    }
}

/// One side of the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Player {
    sign: Sign,
    name: String,
}

impl Player {
    /// Player with the default name for its sign.
    pub fn with_default_name(sign: Sign) -> Self {
        Self::new(sign, format!("Player {}", sign))
    }

    /// The sign this player places.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 3x3 board.
///
/// The board only stores cells. Whether a move is legal is decided by
/// [`Game`](crate::Game); `set` overwrites whatever is there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `index`, or `None` outside 0-8.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes `sign` at `index`.
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, sign: Sign) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::InvalidIndex(index))?;
        *cell = Cell::Occupied(sign);
        Ok(())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of cells holding `sign`.
    pub fn count(&self, sign: Sign) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(sign))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Formats the board as plain text; empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(sign) => sign.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
