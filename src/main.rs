//! Binary entry point for the console game.

mod cli;

use anyhow::Result;
use clap::Parser;
use noughts::{ConsoleInteract, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::from_default_env(),
    };
    // Logs go to stderr so they never interleave with the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("starting noughts");

    let mut session = Session::new(ConsoleInteract::new());
    session.run().await
}
