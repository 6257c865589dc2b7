//! Win detection for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the game decides when to call them.

use crate::types::{Board, Cell, Sign};
use tracing::instrument;

/// Three board indices that win when owned by one sign.
pub type WinningLine = [usize; 3];

/// All winning lines, in the order they are checked.
pub const WINNING_LINES: [WinningLine; 8] = [
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

/// Winning lines passing through `index`, in check order (at most 4).
pub fn lines_through(index: usize) -> impl Iterator<Item = &'static WinningLine> {
    let lines: &'static [WinningLine; 8] = &WINNING_LINES;
    lines.iter().filter(move |line| line.contains(&index))
}

/// Whether every cell of `line` holds `sign`.
pub fn owns_line(board: &Board, line: &WinningLine, sign: Sign) -> bool {
    line.iter()
        .all(|&i| board.get(i) == Some(Cell::Occupied(sign)))
}

/// First line through `index` fully owned by `sign`.
///
/// A move can only complete lines through its own cell, so only those are
/// examined.
#[instrument(skip(board))]
pub fn completed_line(board: &Board, index: usize, sign: Sign) -> Option<WinningLine> {
    lines_through(index)
        .find(|line| owns_line(board, line, sign))
        .copied()
}
