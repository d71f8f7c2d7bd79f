//! Noughts and crosses on an N-by-N board.
//!
//! The library splits into a pure game core and the plumbing around it:
//!
//! - **game**: board state, move validation, win/draw rules, and the
//!   parallel heuristic engine behind the computer opponent
//! - **session**: turn alternation, round lifecycle, and the win tally
//!   that persists across rounds
//! - **interact** / **console**: the front-end seam and its line-oriented
//!   console implementation
//!
//! # Example
//!
//! ```no_run
//! use noughts::{ConsoleInteract, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(ConsoleInteract::new());
//! session.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod game;
mod interact;
mod session;

pub use console::ConsoleInteract;
pub use game::board::{Board, BoardError, Cell, MIN_SIZE, Marker, Move};
pub use game::engine::choose_move;
pub use game::rules::{GameStatus, evaluate, has_winning_line};
pub use game::validate::{MoveError, validate};
pub use interact::Interact;
pub use session::{ScoreBoard, Session};
