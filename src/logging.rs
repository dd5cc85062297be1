//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so logs go to a file through a
//! non-blocking `tracing-appender` writer. The returned guard flushes
//! pending lines on drop and must outlive the event loop.

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins; otherwise `default_directive` (e.g. "info", "vitrine=debug").
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Build a subscriber writing to `writer`.
///
/// Shared between the binary and tests.
pub fn build_subscriber(
    writer: NonBlocking,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Initialize the global subscriber logging to `log_file_path`.
pub fn init_global(log_file_path: &Path, default_directive: &str) -> io::Result<WorkerGuard> {
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    build_subscriber(writer, env_filter(default_directive)).init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_subscriber_writes_to_file() {
        let log_file = NamedTempFile::new().unwrap();
        let (writer, guard) = tracing_appender::non_blocking(log_file.reopen().unwrap());
        let subscriber = build_subscriber(writer, EnvFilter::new("debug"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("sidebar toggled");
            tracing::trace!("too chatty");
        });
        // Dropping the guard flushes the worker
        drop(guard);

        let contents = std::fs::read_to_string(log_file.path()).unwrap();
        assert!(contents.contains("INFO"));
        assert!(contents.contains("sidebar toggled"));
        assert!(!contents.contains("too chatty"));
    }

    #[test]
    fn test_bad_directive_falls_back() {
        // Must not panic on garbage
        let _ = env_filter("vitrine=notalevel[");
    }
}
