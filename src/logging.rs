//! File logging via the tracing ecosystem.
//!
//! The TUI owns the terminal, so everything goes to a daily rolling file.
//! `$FPICK_LOG` overrides the filter (e.g. `fpick=debug`).

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FPICK_LOG";

/// Default log directory path.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fpick")
        .join("logs")
}

/// Filter directive for a configured level such as `"debug"`.
fn default_directive(level: &str) -> String {
    format!("fpick={}", level.to_lowercase())
}

/// Initialize logging.
///
/// Returns the writer guard, which must stay alive for buffered lines to be
/// flushed. Returns `None` when the log directory cannot be created; the
/// program then runs without logs.
pub fn init_logging(level: &str, directory: Option<&Path>) -> Option<WorkerGuard> {
    let log_dir = directory
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_dir);
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: failed to create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "fpick.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Some(guard)
}
