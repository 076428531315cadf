//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `<data dir>/trailcam.log`
//! and rotation on startup, so every session keeps its own file.

use crate::error::{Result, StringError, TrailCamError};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Name of the active log file
pub const LOG_FILE_NAME: &str = "trailcam.log";

/// Maximum number of historical log files to keep (trailcam.log.1 through trailcam.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// `default_level` applies unless `RUST_LOG` is set.
pub fn init_logging(log_dir: &Path, default_level: &str) -> Result<()> {
    fs::create_dir_all(log_dir)?;
    rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

    // Rotation is handled above, the appender only ever writes the fresh file
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("trailcam")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| TrailCamError::ConfigError(Box::new(e)))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| TrailCamError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TrailCamError::ConfigError(Box::new(e)))?;

    tracing::info!("trailcam v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `trailcam.log.N` to `.N+1`, dropping the oldest, then move the
/// current log to `.1`.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| TrailCamError::ConfigError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| TrailCamError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        if current_log.exists() {
            fs::rename(&current_log, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}
