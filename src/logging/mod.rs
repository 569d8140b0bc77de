//! Logging setup: a `tracing` subscriber writing to
//! `<root>/agriweather/agriweather.log`, plus the `Logger` capability
//! injected into the storage layer.

pub mod level;
pub mod logger;

pub use level::LogLevel;
pub use logger::{LogEntry, Logger, MemoryLogger, TracingLogger};

use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

pub const APP_NAME: &str = "agriweather";

/// Install the process-wide subscriber.
///
/// Falls back to stderr when the log directory or file cannot be created.
/// The returned guard flushes pending lines on drop and must outlive every
/// log call.
pub fn init(root: &Path, level: LogLevel) -> WorkerGuard {
    let dir = root.join(APP_NAME);

    let appender = fs::create_dir_all(&dir).ok().and_then(|_| {
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(format!("{APP_NAME}.log"))
            .build(&dir)
            .ok()
    });

    let (writer, guard) = match appender {
        Some(file) => tracing_appender::non_blocking(file),
        None => {
            eprintln!(
                "⚠️  Cannot write logs under {}, logging to stderr",
                dir.display()
            );
            tracing_appender::non_blocking(std::io::stderr())
        }
    };

    // A second init in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level.to_filter())
        .try_init();

    guard
}
