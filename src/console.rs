//! Line-oriented console front end.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::game::board::{Board, Cell, Move};
use crate::interact::Interact;

/// Board size used when the size prompt gets unparseable input.
const DEFAULT_SIZE: i32 = 3;

/// Console implementation of [`Interact`] over stdin and stdout.
///
/// Blocking reads run on the blocking thread pool so the async session is
/// never parked on a stdin syscall.
#[derive(Debug, Default)]
pub struct ConsoleInteract;

impl ConsoleInteract {
    /// Creates the console front end.
    pub fn new() -> Self {
        Self
    }
}

/// Prints a prompt without a trailing newline and flushes it out.
fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    std::io::stdout().flush().context("flushing stdout")?;
    Ok(())
}

/// Reads one line from stdin, trimmed. Fails when stdin is closed.
async fn read_line() -> Result<String> {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        let read = std::io::stdin()
            .read_line(&mut line)
            .context("reading from stdin")?;
        if read == 0 {
            anyhow::bail!("stdin closed");
        }
        Ok(line.trim().to_string())
    })
    .await
    .context("stdin reader task failed")?
}

#[async_trait::async_trait]
impl Interact for ConsoleInteract {
    async fn user_move(&mut self, is_first_player: bool, versus_bot: bool) -> Result<Move> {
        loop {
            if versus_bot {
                prompt("Enter row and column, starting from zero: ")?;
            } else {
                let side = if is_first_player { "First" } else { "Second" };
                prompt(&format!(
                    "{side} player, enter row and column, starting from zero: "
                ))?;
            }

            let line = read_line().await?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if let [row, col] = fields[..]
                && let (Ok(row), Ok(col)) = (row.parse(), col.parse())
            {
                return Ok(Move::new(row, col));
            }
            println!("Error: enter two whole numbers separated by a space");
        }
    }

    async fn board_size(&mut self) -> Result<i32> {
        prompt(&format!("Enter board size (default {DEFAULT_SIZE}): "))?;
        let line = read_line().await?;
        match line.parse::<i32>() {
            Ok(size) => Ok(size),
            Err(_) => {
                debug!(input = %line, "unparseable size, using default");
                Ok(DEFAULT_SIZE)
            }
        }
    }

    async fn versus_bot(&mut self) -> Result<bool> {
        prompt("Play against the computer? (y/n): ")?;
        Ok(read_line().await? == "y")
    }

    async fn ask_repeat(&mut self) -> Result<bool> {
        prompt("Play again? (y/n): ")?;
        Ok(read_line().await? == "y")
    }

    async fn show_error(&mut self, err: &(dyn std::error::Error + Send + Sync)) -> Result<()> {
        println!("Error: {err}");
        Ok(())
    }

    async fn show_board(&mut self, board: &Board) -> Result<()> {
        for row in board.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => "_".to_string(),
                    Cell::Occupied(marker) => marker.to_string(),
                })
                .collect();
            println!("{}", line.join(" "));
        }
        Ok(())
    }

    async fn show_result(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }

    async fn show_score(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }

    async fn show_message(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }
}
