//! Logging setup.
//!
//! The terminal is owned by the TUI, so log output goes to a daily rolling
//! file in the log directory instead of stdout.

use crate::config::{self, LoggingConfig};
use crate::error::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// The returned guard flushes buffered log lines on drop and must be held
/// until the application exits.
pub fn init(logging: &LoggingConfig) -> Result<WorkerGuard> {
    let dir = config::log_dir()?;
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, &logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.level.as_str().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(guard)
}
