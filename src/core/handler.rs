//! External handler invoked for every emitted entry

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// Callback receiving `(timestamp, level, message)` of each emitted entry
///
/// The handler runs synchronously on the thread that submitted the entry,
/// after the console line and before the entry is queued for the file. It
/// must not block for long. A panic raised inside it unwinds into the caller
/// of the logging function; the logger holds no lock while it runs.
///
/// # Example
///
/// ```
/// use chronos_logger::core::{handler, LogHandler};
///
/// let forward: LogHandler = handler(|_ts, level, message| {
///     eprintln!("[{level}] {message}");
/// });
/// ```
pub type LogHandler = Arc<dyn Fn(&DateTime<Local>, LogLevel, &str) + Send + Sync>;

/// Wrap a closure into a [`LogHandler`]
pub fn handler<F>(f: F) -> LogHandler
where
    F: Fn(&DateTime<Local>, LogLevel, &str) + Send + Sync + 'static,
{
    Arc::new(f)
}
