//! Logging configuration using tracing
//!
//! The terminal UI owns stdout, so logs go to a daily rolling file instead.

use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "ANAGRAM_TRACE_LOG";

const LOG_FILE: &str = "anagram-trace.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/anagram-trace/logs/`.
/// Log level is controlled by the `ANAGRAM_TRACE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ANAGRAM_TRACE_LOG=debug anagram-trace --sample 4
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("anagram_trace=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        })?;

    tracing::info!("anagram-trace starting, logging to {}", log_dir.display());
    Ok(log_dir)
}

/// Get the log directory path
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("anagram-trace").join("logs")
}
