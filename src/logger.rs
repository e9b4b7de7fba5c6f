//! File logging setup.
//!
//! The terminal belongs to the TUI, so log records go to a file through
//! `fern`. Everything else in the crate logs through the `log` macros.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

/// Resolve the log file path: the configured one, else the data directory
pub fn get_log_file_path(config: &LoggingConfig) -> Result<PathBuf> {
    if let Some(path) = &config.file {
        return Ok(path.clone());
    }
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the global logger. Does nothing when logging is disabled.
///
/// Returns the path being written to, if any.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid logging level '{}'", config.level))?;
    let path = get_log_file_path(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .level_for("regconsole", level)
        .chain(file)
        .apply()
        .context("Logger already initialized")?;

    Ok(Some(path))
}
