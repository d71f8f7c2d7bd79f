//! Win detection generalized to N-by-N boards.

use tracing::instrument;

use super::super::board::{Board, Cell, Marker};

/// Checks whether `marker` owns a full line anywhere on the board.
///
/// Lines are the N rows, the N columns, the main diagonal, and the
/// anti-diagonal; diagonals are checked for every board size. Scanning
/// stops at the first complete line, which cannot change the answer.
#[instrument(skip(board))]
pub fn has_winning_line(board: &Board, marker: Marker) -> bool {
    let n = board.size();
    (0..n).any(|row| line_won(board.row_cells(row), marker))
        || (0..n).any(|col| line_won(board.col_cells(col), marker))
        || line_won(board.main_diagonal(), marker)
        || line_won(board.anti_diagonal(), marker)
}

fn line_won(line: impl Iterator<Item = Cell>, marker: Marker) -> bool {
    line.into_iter().all(|cell| cell == Cell::Occupied(marker))
}
