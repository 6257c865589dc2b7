//! Tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::cli::Cli;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    tictactoe_tui::run(Cli::parse())
}
