//! Terminal front end for time-travel tic-tac-toe.
//!
//! The event loop is synchronous: one key press is fully handled and the
//! whole frame redrawn from [`timetravel_core::GameView`] before the next
//! key is read.

#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod replay;
pub mod settings;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument, warn};

pub use app::App;
pub use cli::{Cli, Command};
pub use replay::replay;
pub use settings::{Palette, Settings, SettingsError};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    let palette = settings.palette().context("Invalid display colors")?;

    info!("Starting TUI");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*settings.display().order());
    let res = run_app(&mut terminal, &mut app, &palette);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Dropping restores the terminal on every exit path out of [`run_tui`],
/// including a failed `Terminal::new` or an error from the loop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the screen switch so a failure there still
        // leaves raw mode.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Safe to call when raw mode was never enabled.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    palette: &Palette,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app, palette))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
