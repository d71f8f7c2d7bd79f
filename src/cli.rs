//! Command-line interface.

use clap::Parser;

/// Console noughts and crosses with a heuristic computer opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "N-by-N noughts and crosses against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter, e.g. "info" or "noughts=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,
}
