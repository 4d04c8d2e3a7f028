//! Tracing subscriber setup.

use crate::settings::LoggingSettings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to the configured file so output does not tear the TUI.
pub fn init_file_logging(settings: &LoggingSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file()).with_context(|| {
        format!("Failed to create log file {}", settings.file().display())
    })?;

    // Don't fail if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(settings.filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(settings: &LoggingSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(settings.filter()))
        .with_writer(std::io::stderr)
        .try_init();
}
