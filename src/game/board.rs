//! Core board types: markers, cells, moves, and the N-by-N grid.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Minimum playable board dimension.
pub const MIN_SIZE: i32 = 2;

/// Marker a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Marker {
    /// The side that moves first in every round.
    X,
    /// The side that moves second.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No marker placed yet.
    Empty,
    /// Cell claimed by a player.
    Occupied(Marker),
}

/// A candidate move as 0-indexed board coordinates.
///
/// Coordinates are signed so that below-range input survives until the
/// validator, which reports it as a range error instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Row index, valid range `[0, N-1]`.
    pub row: i32,
    /// Column index, valid range `[0, N-1]`.
    pub col: i32,
}

impl Move {
    /// Creates a move from row and column indices.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Errors constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Requested dimension below [`MIN_SIZE`].
    #[display("board size {size} is too small, minimum is {MIN_SIZE}")]
    SizeTooSmall {
        /// The rejected dimension.
        size: i32,
    },
}

/// Square grid of cells, stored row-major.
///
/// The grid is always N-by-N; a cell transitions from empty to occupied at
/// most once per round and never back. Rounds get a fresh board rather than
/// clearing an old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] for sizes below [`MIN_SIZE`].
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size < MIN_SIZE {
            return Err(BoardError::SizeTooSmall { size });
        }
        let size = size as usize;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reads a single cell. Both indices must be below [`Board::size`].
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Places `marker` at a move the caller has already validated.
    ///
    /// Legality lives in [`validate`](super::validate::validate); this
    /// method trusts its caller and performs no bounds or occupancy check.
    pub fn place(&mut self, mv: Move, marker: Marker) {
        let index = mv.row as usize * self.size + mv.col as usize;
        self.cells[index] = Cell::Occupied(marker);
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Rows of the grid in order, each a slice of N cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Cells of row `row` in column order.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |col| self.cell(row, col))
    }

    /// Cells of column `col` in row order.
    pub fn col_cells(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |row| self.cell(row, col))
    }

    /// Cells of the main diagonal, top-left to bottom-right.
    pub fn main_diagonal(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |i| self.cell(i, i))
    }

    /// Cells of the anti-diagonal, top-right to bottom-left.
    pub fn anti_diagonal(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |i| self.cell(i, self.size - 1 - i))
    }
}
