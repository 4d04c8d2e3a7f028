//! `timetravel` - tic-tac-toe with a rewindable move history.

use anyhow::{Context, Result};
use clap::Parser;
use timetravel_core::DisplayOrder;
use timetravel_tui::logging::{init_file_logging, init_stderr_logging};
use timetravel_tui::{Cli, Command, Settings, replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(settings.logging())?;
            run_tui(&settings)
        }
        Command::Replay {
            moves,
            jump,
            descending,
        } => {
            init_stderr_logging(settings.logging());
            let order = if descending {
                DisplayOrder::Descending
            } else {
                *settings.display().order()
            };
            info!(moves = moves.len(), "Replaying moves");
            let view = replay(&moves, jump, order)?;
            println!("{}", view);
            Ok(())
        }
    }
}
