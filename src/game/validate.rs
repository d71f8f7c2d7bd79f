//! Move legality checking.
//!
//! Validation is separated from board mutation: [`validate`] never touches
//! the board, and [`Board::place`](super::board::Board::place) never
//! re-checks. The session always validates before it applies.

use derive_more::{Display, Error};

use super::board::{Board, Cell, Move};

/// Reasons a candidate move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row index outside `[0, N-1]`.
    #[display("row {row} is out of range, expected 0 to {max}")]
    RowOutOfRange {
        /// The offending row index.
        row: i32,
        /// Largest valid index for the current board.
        max: i32,
    },
    /// Column index outside `[0, N-1]`.
    #[display("column {col} is out of range, expected 0 to {max}")]
    ColOutOfRange {
        /// The offending column index.
        col: i32,
        /// Largest valid index for the current board.
        max: i32,
    },
    /// Target cell already holds a marker.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: i32,
        /// Column of the occupied cell.
        col: i32,
    },
}

/// Checks a candidate move against the board without side effects.
///
/// Checks run in a fixed order (row low, row high, column low, column high,
/// occupancy) and the first violation is reported.
pub fn validate(board: &Board, mv: Move) -> Result<(), MoveError> {
    let max = board.size() as i32 - 1;
    if mv.row < 0 || mv.row > max {
        return Err(MoveError::RowOutOfRange { row: mv.row, max });
    }
    if mv.col < 0 || mv.col > max {
        return Err(MoveError::ColOutOfRange { col: mv.col, max });
    }
    if board.cell(mv.row as usize, mv.col as usize) != Cell::Empty {
        return Err(MoveError::CellOccupied {
            row: mv.row,
            col: mv.col,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::board::Marker;
    use super::*;

    #[test]
    fn test_accepts_in_range_empty_cells() {
        let board = Board::new(3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(validate(&board, Move::new(row, col)), Ok(()));
            }
        }
    }

    #[test]
    fn test_rejects_row_out_of_range() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            validate(&board, Move::new(-1, 0)),
            Err(MoveError::RowOutOfRange { row: -1, max: 2 })
        );
        assert_eq!(
            validate(&board, Move::new(3, 0)),
            Err(MoveError::RowOutOfRange { row: 3, max: 2 })
        );
    }

    #[test]
    fn test_rejects_col_out_of_range() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            validate(&board, Move::new(0, -2)),
            Err(MoveError::ColOutOfRange { col: -2, max: 2 })
        );
        assert_eq!(
            validate(&board, Move::new(0, 5)),
            Err(MoveError::ColOutOfRange { col: 5, max: 2 })
        );
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut board = Board::new(2).unwrap();
        board.place(Move::new(1, 1), Marker::O);
        assert_eq!(
            validate(&board, Move::new(1, 1)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_row_checked_before_col() {
        // Both axes out of range: the row violation wins.
        let board = Board::new(3).unwrap();
        assert_eq!(
            validate(&board, Move::new(7, 7)),
            Err(MoveError::RowOutOfRange { row: 7, max: 2 })
        );
    }
}
