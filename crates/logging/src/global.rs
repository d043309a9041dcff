//! crates/logging/src/global.rs
//! The process-wide logger and free functions operating on it.
//!
//! The instance is installed at most once. [`init`] installs an explicitly
//! built logger; otherwise the first call to [`global`] installs
//! [`Logger::new`]. An installed logger is never replaced or rebuilt, so
//! reconfiguration goes through its setters.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use logging_sink::SinkError;

use crate::config::LoggerConfig;
use crate::levels::Level;
use crate::logger::Logger;
use crate::timer::DurationReport;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process-wide logger.
///
/// # Errors
///
/// Hands `logger` back when a process-wide logger already exists.
pub fn init(logger: Logger) -> Result<&'static Logger, Logger> {
    GLOBAL.set(logger)?;
    Ok(global())
}

/// Applies `config` to the process-wide logger, installing it first if needed.
///
/// # Errors
///
/// Returns the [`SinkError`] raised while opening the configured log file.
pub fn init_with_config(config: &LoggerConfig) -> Result<&'static Logger, SinkError> {
    let logger = global();
    logger.apply_config(config)?;
    Ok(logger)
}

/// Returns the process-wide logger, installing a default one on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Sets the minimum level of the process-wide logger.
pub fn set_minimum_level(level: Level) -> Level {
    global().set_minimum_level(level)
}

/// Replaces the label printed for `level`.
pub fn set_label(level: Level, label: impl Into<String>) {
    global().set_label(level, label);
}

/// Replaces the color sequence used for `level`.
pub fn set_color(level: Level, color: impl Into<String>) {
    global().set_color(level, color);
}

/// Turns color output on.
pub fn enable_color() {
    global().enable_color();
}

/// Turns color output off.
pub fn disable_color() {
    global().disable_color();
}

/// Opens `directory/file_name` as the process-wide log file.
///
/// # Errors
///
/// See [`Logger::open_file`].
pub fn open_file(
    directory: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
) -> Result<PathBuf, SinkError> {
    global().open_file(directory, file_name)
}

/// Closes the process-wide log file.
pub fn close_file() {
    global().close_file();
}

/// Starts the timer `label` on the process-wide logger.
pub fn start_timer(label: impl Into<String>) -> String {
    global().start_timer(label)
}

/// Stops the timer `label` on the process-wide logger.
pub fn end_timer(label: &str) -> Option<Duration> {
    global().end_timer(label)
}

/// Reads the timer `label` on the process-wide logger without stopping it.
pub fn peek_timer(label: &str) -> Option<Duration> {
    global().peek_timer(label)
}

/// Stops the timer `label` and logs its duration.
pub fn log_duration(label: &str, report: &DurationReport) -> Option<u128> {
    global().log_duration(label, report)
}

/// Logs the duration of the timer `label` and keeps it running.
pub fn log_duration_persistent(label: &str, report: &DurationReport) -> Option<u128> {
    global().log_duration_persistent(label, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_installed_once() {
        let first = global();
        let second = global();
        assert!(std::ptr::eq(first, second));

        let rejected = init(Logger::new());
        assert!(rejected.is_err());
    }

    #[test]
    fn free_timer_functions_use_global_registry() {
        let label = start_timer("global-unit-timer");
        assert!(global().timer_running(&label));
        assert!(peek_timer(&label).is_some());
        assert!(end_timer(&label).is_some());
        assert!(!global().timer_running(&label));
    }
}
