//! Terminal-state rules for a round.
//!
//! Pure functions over a board; rules are separated from board storage so
//! the session and the engine share one source of truth for "is this over".

mod win;

pub use win::has_winning_line;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::board::{Board, Marker};

/// Outcome of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The round continues.
    InProgress,
    /// The contained marker completed a line.
    Won(Marker),
    /// The board is full and nobody completed a line.
    Draw,
}

/// Evaluates the board after `last_mover` has played.
///
/// Only `last_mover` is checked for a win: a move can only complete a line
/// for the side that made it. With no win, a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mover: Marker) -> GameStatus {
    if has_winning_line(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
