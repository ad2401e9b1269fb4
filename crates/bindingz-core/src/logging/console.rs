//! Console logger implementation

use super::file_logger::LogLevel;
use super::traits::Logger;

/// Writes `<prefix> LEVEL: message` lines to stderr, dropping anything below
/// `min_level`
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Logger with the `[Bindingz]` prefix showing info and above
    pub fn new() -> Self {
        Self {
            prefix: "[Bindingz]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Logger whose level comes from `BINDINGZ_LOG_LEVEL` (info if unset or
    /// unknown)
    pub fn from_env() -> Self {
        let min_level = std::env::var("BINDINGZ_LOG_LEVEL")
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Info);
        Self::new().with_min_level(min_level)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_min_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{} {}: {}", self.prefix, level.to_string().trim_end(), message);
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }
}
