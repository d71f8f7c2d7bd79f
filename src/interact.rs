//! Abstract surface between the game core and its front end.

use anyhow::Result;

use crate::game::board::{Board, Move};

/// Collaborator that supplies decisions and renders game output.
///
/// The core drives this trait and validates everything it returns; a move
/// coming back from [`Interact::user_move`] carries no validity guarantee.
#[async_trait::async_trait]
pub trait Interact: Send {
    /// Asks the human side for a candidate move.
    ///
    /// `is_first_player` names the side being prompted; `versus_bot` lets
    /// the front end drop the numbering when only one human is playing.
    async fn user_move(&mut self, is_first_player: bool, versus_bot: bool) -> Result<Move>;

    /// Asks for the board size for a new round.
    async fn board_size(&mut self) -> Result<i32>;

    /// Asks whether the next round is played against the computer.
    async fn versus_bot(&mut self) -> Result<bool>;

    /// Asks whether to start another round.
    async fn ask_repeat(&mut self) -> Result<bool>;

    /// Reports a rejected move or setup value.
    async fn show_error(&mut self, err: &(dyn std::error::Error + Send + Sync)) -> Result<()>;

    /// Renders the current grid.
    async fn show_board(&mut self, board: &Board) -> Result<()>;

    /// Announces how the round ended.
    async fn show_result(&mut self, message: &str) -> Result<()>;

    /// Shows the cumulative score summary.
    async fn show_score(&mut self, message: &str) -> Result<()>;

    /// Shows a general informational line.
    async fn show_message(&mut self, message: &str) -> Result<()>;
}
