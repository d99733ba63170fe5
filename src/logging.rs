//! File-based logging.
//!
//! The TUI owns stdout, so log output goes to a file. When no log file is
//! configured no subscriber is installed and `tracing` events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

/// Parse a level name such as `"debug"`, falling back to `INFO`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

/// Install a global subscriber appending to `path`.
pub fn init(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    tracing::info!(log_file = %path.display(), "logging started");
    Ok(())
}
