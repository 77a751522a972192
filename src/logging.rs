//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to a file through a
//! non-blocking writer. Without a configured log file nothing is installed
//! and the `tracing` macros in the library are no-ops.

use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "RADIAL_TIMER_LOG";

/// Builds the filter: [`LOG_ENV`] if set, otherwise the config's level.
pub fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("radial_timer={}", config.log_level())))
}

/// Installs the global subscriber when a log file is configured.
///
/// The returned guard flushes pending lines when dropped; keep it alive for
/// the lifetime of the program.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file {} has no file name", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing the log subscriber")?;

    Ok(Some(guard))
}
