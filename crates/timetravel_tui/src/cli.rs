//! Command-line interface for the `timetravel` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./timetravel.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply moves without a terminal UI and print the resulting frame
    Replay {
        /// Cell indices 0-8, row-major, separated by spaces or commas
        #[arg(value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// Jump to this history index after applying the moves
        #[arg(long)]
        jump: Option<usize>,

        /// List history newest first
        #[arg(long)]
        descending: bool,
    },
}
