//! Round and turn orchestration.

use std::collections::HashMap;

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::game::board::{Board, Marker, Move};
use crate::game::engine;
use crate::game::rules::{self, GameStatus};
use crate::game::validate::validate;
use crate::interact::Interact;

/// The side the computer plays in a versus-bot round; the human keeps
/// [`Marker::X`] and moves first.
const BOT_MARKER: Marker = Marker::O;

/// Cumulative win tally, alive for the whole process run.
///
/// Rounds come and go; the tally is only ever reset by starting a new
/// process. Draws record nothing.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    wins: HashMap<Marker, u32>,
}

impl ScoreBoard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more win for `marker`.
    pub fn record_win(&mut self, marker: Marker) {
        *self.wins.entry(marker).or_insert(0) += 1;
    }

    /// Wins recorded for `marker` so far.
    pub fn wins(&self, marker: Marker) -> u32 {
        self.wins.get(&marker).copied().unwrap_or(0)
    }

    /// One-line summary of the running totals.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = Marker::iter()
            .map(|marker| format!("player \"{marker}\" has won {} time(s)", self.wins(marker)))
            .collect();
        format!("Total: {}.", parts.join(", "))
    }
}

/// Orchestrates rounds against the collaborator surface.
///
/// The session exclusively owns the score board for its whole lifetime and
/// a fresh board per round; moves from either source pass through the
/// validator before they touch the board.
pub struct Session<I: Interact> {
    interact: I,
    scores: ScoreBoard,
}

impl<I: Interact> Session<I> {
    /// Creates a session over the given front end.
    pub fn new(interact: I) -> Self {
        Self {
            interact,
            scores: ScoreBoard::new(),
        }
    }

    /// Wins recorded so far for `marker`.
    pub fn wins(&self, marker: Marker) -> u32 {
        self.scores.wins(marker)
    }

    /// Runs rounds until the user declines another one.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let versus_bot = self.interact.versus_bot().await?;
            let board = self.new_board().await?;
            info!(size = board.size(), versus_bot, "starting round");
            self.play_round(board, versus_bot).await?;
            if !self.interact.ask_repeat().await? {
                info!("session over");
                return Ok(());
            }
        }
    }

    /// Asks for a size until board construction accepts it.
    async fn new_board(&mut self) -> Result<Board> {
        loop {
            let size = self.interact.board_size().await?;
            match Board::new(size) {
                Ok(board) => return Ok(board),
                Err(err) => {
                    debug!(size, "rejected board size");
                    self.interact.show_error(&err).await?;
                }
            }
        }
    }

    /// Plays one round to a win or a draw.
    async fn play_round(&mut self, mut board: Board, versus_bot: bool) -> Result<()> {
        let mut mover = Marker::X;
        loop {
            let mv = self.next_move(&board, mover, versus_bot).await?;
            if let Err(err) = validate(&board, mv) {
                debug!(row = mv.row, col = mv.col, %err, "move rejected");
                self.interact.show_error(&err).await?;
                continue;
            }

            board.place(mv, mover);
            debug!(row = mv.row, col = mv.col, %mover, "move applied");

            match rules::evaluate(&board, mover) {
                GameStatus::InProgress => {
                    self.interact.show_board(&board).await?;
                    mover = mover.opponent();
                }
                GameStatus::Won(winner) => {
                    info!(%winner, "round won");
                    self.scores.record_win(winner);
                    let message = format!("Game over. Player \"{winner}\" wins.");
                    return self.conclude(&board, &message).await;
                }
                GameStatus::Draw => {
                    info!("round drawn");
                    return self.conclude(&board, "Draw. No moves left.").await;
                }
            }
        }
    }

    /// Obtains the next move from the active side.
    async fn next_move(&mut self, board: &Board, mover: Marker, versus_bot: bool) -> Result<Move> {
        if versus_bot && mover == BOT_MARKER {
            let mv = engine::choose_move(board, mover)
                .await
                .context("computer failed to choose a move")?;
            self.interact
                .show_message(&format!("Computer plays ({}, {})", mv.row, mv.col))
                .await?;
            Ok(mv)
        } else {
            self.interact.user_move(mover == Marker::X, versus_bot).await
        }
    }

    /// Shows the final board, the result, and the running score.
    async fn conclude(&mut self, board: &Board, result: &str) -> Result<()> {
        self.interact.show_board(board).await?;
        self.interact.show_result(result).await?;
        self.interact.show_score(&self.scores.summary()).await?;
        Ok(())
    }
}
