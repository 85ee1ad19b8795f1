//! Application logging functionality
//!
//! Headless runs log to stderr and to a daily file under
//! ~/.config/fieldsnap/logs/. The preview window leaves logging to Bevy's
//! `LogPlugin`, which installs its own global subscriber.

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    crate::core::config_file::ConfigFile::config_dir().join("logs")
}

/// Get the path to today's log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("fieldsnap.log.{}", timestamp))
}

/// Default filter, overridden by `RUST_LOG`
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "fieldsnap=debug"
    } else {
        "fieldsnap=info"
    }
}

/// Install the global subscriber for headless runs
///
/// The returned guard flushes the file writer when dropped, so keep it alive
/// until the program exits. No guard is returned when the logs directory
/// cannot be created; logging then goes to stderr only.
pub fn init_logging(verbose: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let logs_dir = logs_dir();
    match fs::create_dir_all(&logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(&logs_dir, "fieldsnap.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()?;

            tracing::debug!("Logging to {:?}", current_log_file());
            Ok(Some(guard))
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()?;

            tracing::warn!("Failed to create logs directory {:?}: {}", logs_dir, e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_logs_dir() {
        assert!(current_log_file().starts_with(logs_dir()));
        assert!(current_log_file()
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("fieldsnap.log.")));
    }

    #[test]
    fn test_verbose_filter() {
        assert_eq!(default_filter(true), "fieldsnap=debug");
        assert_eq!(default_filter(false), "fieldsnap=info");
    }
}
