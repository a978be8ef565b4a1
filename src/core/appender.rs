//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A destination for queued entries.
///
/// Owned by the writer thread and never shared between threads.
pub trait Appender: Send {
    /// Persist or display one entry
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    /// Push buffered output to its destination
    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}
