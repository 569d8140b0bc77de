//! The leveled logging capability consumed by the storage layer.

use super::level::LogLevel;
use std::sync::Mutex;

/// Fire-and-forget leveled logging. Implementations must never panic or
/// report failures back to the caller.
pub trait Logger: Send + Sync {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warning(&self, msg: &str);
    fn error(&self, msg: &str);
    fn critical(&self, msg: &str);
}

/// Forwards every call to the installed `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Logger names are stored lowercase; an empty name falls back to `agriweather`.
    pub fn new(name: &str) -> Self {
        let name = if name.trim().is_empty() {
            "agriweather".to_string()
        } else {
            name.trim().to_lowercase()
        };
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for TracingLogger {
    fn debug(&self, msg: &str) {
        tracing::debug!(logger = %self.name, "{}", msg);
    }

    fn info(&self, msg: &str) {
        tracing::info!(logger = %self.name, "{}", msg);
    }

    fn warning(&self, msg: &str) {
        tracing::warn!(logger = %self.name, "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(logger = %self.name, "{}", msg);
    }

    fn critical(&self, msg: &str) {
        tracing::error!(logger = %self.name, critical = true, "{}", msg);
    }
}

/// A single recorded log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every entry in memory so callers can inspect what was reported.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: LogLevel, msg: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(LogEntry {
            level,
            message: msg.to_string(),
        });
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of entries recorded at exactly `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|e| e.level == level)
            .count()
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, msg: &str) {
        self.push(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.push(LogLevel::Info, msg);
    }

    fn warning(&self, msg: &str) {
        self.push(LogLevel::Warning, msg);
    }

    fn error(&self, msg: &str) {
        self.push(LogLevel::Error, msg);
    }

    fn critical(&self, msg: &str) {
        self.push(LogLevel::Critical, msg);
    }
}
