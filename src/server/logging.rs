//! Process-wide logging setup.
//!
//! Logs go to the console and to a daily rolling file (`schedulebot.log.<date>`) in
//! the configured directory. Filtering follows `RUST_LOG`, defaulting to `info`.

use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_DIR: &str = "Logs";
const LOG_FILE_PREFIX: &str = "schedulebot.log";
const DEFAULT_FILTER: &str = "info";

/// Log directory from `LOG_DIR`.
///
/// Read before the rest of the configuration so config errors are logged too.
pub fn log_dir() -> String {
    std::env::var("LOG_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())
}

fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer when dropped and must be held for the
/// lifetime of the process. It is `None` when the log directory is unusable, in which
/// case only the console is logged to.
pub fn init(log_dir: impl AsRef<Path>) -> Option<WorkerGuard> {
    let log_dir = log_dir.as_ref();
    let (file_layer, guard, file_error) = match file_appender(log_dir) {
        Ok(appender) => {
            let (file_writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(file_writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(
            "Cannot write logs to {}, logging to console only: {}",
            log_dir.display(),
            e
        );
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_log_dir_is_an_error() {
        let dir = std::env::temp_dir().join(format!("schedulebot-log-test-{}", std::process::id()));
        std::fs::write(&dir, b"not a directory").unwrap();

        let result = file_appender(&dir.join("nested"));

        std::fs::remove_file(&dir).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn writable_log_dir_builds_appender() {
        let dir = std::env::temp_dir().join(format!("schedulebot-log-ok-{}", std::process::id()));

        let result = file_appender(&dir);

        assert!(result.is_ok());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
