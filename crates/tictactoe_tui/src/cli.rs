//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal, with a scoreboard across rounds.
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Milliseconds between the end of a round and the result panel
    #[arg(long)]
    pub result_delay_ms: Option<u64>,

    /// Display name for the X player
    #[arg(long)]
    pub x_name: Option<String>,

    /// Display name for the O player
    #[arg(long)]
    pub o_name: Option<String>,

    /// Print the final game state as JSON on exit
    #[arg(long)]
    pub summary_json: bool,
}
