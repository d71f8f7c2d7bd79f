//! Heuristic move selection for the computer opponent.
//!
//! Every cell is scored by its own task with no data dependency on the
//! others; the caller waits on a completion barrier before scanning the
//! results. The score grid and the task set are locals of one
//! [`choose_move`] call, so repeated or concurrent calls share nothing.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use tokio::task::JoinSet;
use tracing::{debug, instrument};

use super::board::{Board, Cell, Marker, Move};

/// Score assigned to occupied cells so they never compete for the maximum.
const OCCUPIED: i32 = -1;

/// Sentinel score for a move that completes one of our own lines.
fn max_priority(n: usize) -> i32 {
    (n * n * 10) as i32
}

/// Per-invocation result grid, one slot per cell.
///
/// Tasks write disjoint slots; the mutex serializes only the container
/// access. The final scan happens after the barrier, with no writers left.
struct ScoreGrid {
    size: usize,
    scores: Vec<i32>,
}

impl ScoreGrid {
    fn new(size: usize) -> Self {
        Self {
            size,
            scores: vec![OCCUPIED; size * size],
        }
    }

    fn set(&mut self, row: usize, col: usize, score: i32) {
        self.scores[row * self.size + col] = score;
    }

    /// Highest-scoring playable cell, lowest row then lowest column on ties.
    fn best(&self) -> Option<Move> {
        let mut best: Option<(Move, i32)> = None;
        for row in 0..self.size {
            for col in 0..self.size {
                let score = self.scores[row * self.size + col];
                if score < 0 {
                    continue;
                }
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((Move::new(row as i32, col as i32), score));
                }
            }
        }
        best.map(|(mv, _)| mv)
    }
}

/// Marker counts of a single line, with the candidate cell counted as empty.
struct LineTally {
    empty: usize,
    own: usize,
    enemy: usize,
}

impl LineTally {
    fn count(line: impl Iterator<Item = Cell>, marker: Marker) -> Self {
        let mut tally = Self {
            empty: 0,
            own: 0,
            enemy: 0,
        };
        for cell in line {
            match cell {
                Cell::Empty => tally.empty += 1,
                Cell::Occupied(m) if m == marker => tally.own += 1,
                Cell::Occupied(_) => tally.enemy += 1,
            }
        }
        tally
    }
}

/// What a single line contributes to a candidate cell.
enum LineScore {
    /// Playing here completes the line: the move wins outright.
    Win,
    /// The opponent is one move from completing this line: play here now.
    Block,
    /// Non-critical line contribution.
    Plain(i32),
}

/// Scores one line through a candidate cell.
///
/// An all-empty line is worth 1 (keeps options open); an enemy-free line
/// with own markers is worth the marker count (extends a live line); a
/// contested line is worth nothing.
fn score_line(n: usize, tally: &LineTally) -> LineScore {
    if n - tally.own == 1 {
        return LineScore::Win;
    }
    if n - tally.enemy == 1 {
        return LineScore::Block;
    }
    let mut score = 0;
    if tally.empty == n {
        score += 1;
    }
    if tally.enemy == 0 && tally.own > 0 {
        score += tally.own as i32;
    }
    LineScore::Plain(score)
}

/// Scores a single candidate cell for `marker`.
///
/// Lines through the cell are examined in a fixed order: row, column, main
/// diagonal if the cell is on it, anti-diagonal if the cell is on it. A
/// winning or blocking line decides the score outright and stops the
/// examination; otherwise per-line contributions accumulate.
fn score_cell(board: &Board, row: usize, col: usize, marker: Marker) -> i32 {
    if board.cell(row, col) != Cell::Empty {
        return OCCUPIED;
    }

    let n = board.size();
    let top = max_priority(n);

    let mut tallies = Vec::with_capacity(4);
    tallies.push(LineTally::count(board.row_cells(row), marker));
    tallies.push(LineTally::count(board.col_cells(col), marker));
    if row == col {
        tallies.push(LineTally::count(board.main_diagonal(), marker));
    }
    if row + col == n - 1 {
        tallies.push(LineTally::count(board.anti_diagonal(), marker));
    }

    let mut total = 0;
    for tally in &tallies {
        match score_line(n, tally) {
            LineScore::Win => return top,
            LineScore::Block => return top - 1,
            LineScore::Plain(score) => total += score,
        }
    }
    total
}

/// Picks the bot's move for `marker`.
///
/// Spawns one scoring task per cell, waits for every task to finish, then
/// scans the grid row-major so ties resolve to the lowest row and column.
/// Tasks always run to completion; a short-circuit score inside one cell
/// never cancels another cell's work.
///
/// # Errors
///
/// Fails when no empty cell remains, or when a scoring task dies.
#[instrument(skip(board), fields(size = board.size()))]
pub async fn choose_move(board: &Board, marker: Marker) -> Result<Move> {
    let size = board.size();
    let snapshot = Arc::new(board.clone());
    let grid = Arc::new(Mutex::new(ScoreGrid::new(size)));

    let mut tasks = JoinSet::new();
    for row in 0..size {
        for col in 0..size {
            let board = Arc::clone(&snapshot);
            let grid = Arc::clone(&grid);
            tasks.spawn(async move {
                let score = score_cell(&board, row, col, marker);
                grid.lock().unwrap().set(row, col, score);
            });
        }
    }

    // Completion barrier: every cell task finishes before the scan below.
    while let Some(joined) = tasks.join_next().await {
        joined.context("cell scoring task failed")?;
    }

    let grid = grid.lock().unwrap();
    let Some(mv) = grid.best() else {
        bail!("no empty cell left to play");
    };
    debug!(row = mv.row, col = mv.col, "engine selected move");
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let board_size = rows.len() as i32;
        let mut board = Board::new(board_size).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let mv = Move::new(row as i32, col as i32);
                match ch {
                    'x' => board.place(mv, Marker::X),
                    'o' => board.place(mv, Marker::O),
                    _ => {}
                }
            }
        }
        board
    }

    #[tokio::test]
    async fn test_takes_immediate_win() {
        let board = board_from(&["oo_", "xx_", "___"]);
        let mv = choose_move(&board, Marker::O).await.unwrap();
        assert_eq!(mv, Move::new(0, 2));
    }

    #[tokio::test]
    async fn test_blocks_imminent_loss() {
        // Row 0 holds two X and one empty cell, O to move: the only
        // defensible answer is the block, at one below the win sentinel.
        let board = board_from(&["xx_", "_o_", "___"]);
        let mv = choose_move(&board, Marker::O).await.unwrap();
        assert_eq!(mv, Move::new(0, 2));
        assert_eq!(score_cell(&board, 0, 2, Marker::O), max_priority(3) - 1);
    }

    #[tokio::test]
    async fn test_win_preferred_over_block() {
        // (0, 2) blocks X's row, (1, 2) completes O's own: take the win.
        let board = board_from(&["xx_", "oo_", "___"]);
        let mv = choose_move(&board, Marker::O).await.unwrap();
        assert_eq!(mv, Move::new(1, 2));
    }

    #[tokio::test]
    async fn test_empty_board_is_deterministic() {
        // N=3: the center sits on four open lines and scores a unique
        // maximum. Repeated calls must agree.
        let board = Board::new(3).unwrap();
        for _ in 0..10 {
            let mv = choose_move(&board, Marker::X).await.unwrap();
            assert_eq!(mv, Move::new(1, 1));
        }
    }

    #[tokio::test]
    async fn test_tie_break_lowest_row_then_col() {
        // N=2: every cell sits on exactly three open lines, so all four
        // tie and the scan must settle on (0, 0).
        let board = Board::new(2).unwrap();
        let mv = choose_move(&board, Marker::X).await.unwrap();
        assert_eq!(mv, Move::new(0, 0));
    }

    #[tokio::test]
    async fn test_never_picks_occupied_cell() {
        let board = board_from(&["xo", "o_"]);
        let mv = choose_move(&board, Marker::X).await.unwrap();
        assert_eq!(mv, Move::new(1, 1));
    }

    #[tokio::test]
    async fn test_full_board_is_an_error() {
        let board = board_from(&["xo", "ox"]);
        assert!(choose_move(&board, Marker::X).await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let board = Board::new(4).unwrap();
        let (a, b) = tokio::join!(
            choose_move(&board, Marker::X),
            choose_move(&board, Marker::O),
        );
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn test_open_line_accumulation() {
        // Empty 3x3 board: corner = 3 open lines, edge = 2, center = 4.
        let board = Board::new(3).unwrap();
        assert_eq!(score_cell(&board, 0, 0, Marker::X), 3);
        assert_eq!(score_cell(&board, 0, 1, Marker::X), 2);
        assert_eq!(score_cell(&board, 1, 1, Marker::X), 4);
    }

    #[test]
    fn test_live_line_rewards_own_markers() {
        // (2, 0) sees: row 2 all empty (+1), column 0 with two own markers
        // and no enemy (+2), and lies on neither diagonal.
        let board = board_from(&["x___", "x___", "____", "____"]);
        assert_eq!(score_cell(&board, 2, 0, Marker::X), 3);
    }

    #[test]
    fn test_contested_line_contributes_nothing() {
        let board = board_from(&["xo_", "___", "___"]);
        // (0, 2): row contested (0), column open (+1), anti-diagonal open (+1).
        assert_eq!(score_cell(&board, 0, 2, Marker::X), 2);
    }

    #[test]
    fn test_occupied_cell_scores_negative() {
        let board = board_from(&["x__", "___", "___"]);
        assert_eq!(score_cell(&board, 0, 0, Marker::O), OCCUPIED);
    }
}
