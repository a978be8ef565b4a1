//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Time-of-day layout shared by the console and file lines
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// One log occurrence. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Local::now(), level, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }

    /// `HH:MM:SS` of the entry timestamp
    pub fn clock_time(&self) -> String {
        self.timestamp.format(CLOCK_FORMAT).to_string()
    }

    /// Message with backslashes, newlines, carriage returns and tabs escaped.
    ///
    /// Keeps a persisted entry on a single line with exactly three
    /// tab-separated fields. Backslashes are escaped first so distinct
    /// messages never produce the same line.
    pub fn sanitized_message(&self) -> String {
        self.message
            .replace('\\', "\\\\")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock_time() {
        let ts = Local.with_ymd_and_hms(2025, 3, 9, 7, 5, 3).unwrap();
        let entry = LogEntry::at(ts, LogLevel::Info, "ready");
        assert_eq!(entry.clock_time(), "07:05:03");
    }

    #[test]
    fn test_message_is_kept_verbatim() {
        let entry = LogEntry::new(LogLevel::Warn, "line one\nline two");
        assert_eq!(entry.message, "line one\nline two");
    }

    #[test]
    fn test_sanitized_message() {
        let entry = LogEntry::new(LogLevel::Error, "a\tb\r\nc");
        assert_eq!(entry.sanitized_message(), "a\\tb\\r\\nc");
    }

    #[test]
    fn test_sanitized_message_keeps_backslash_text_distinct() {
        let real_newline = LogEntry::new(LogLevel::Info, "C:\\new\ndir");
        let literal_escape = LogEntry::new(LogLevel::Info, "C:\\new\\ndir");

        assert_eq!(real_newline.sanitized_message(), "C:\\\\new\\ndir");
        assert_eq!(literal_escape.sanitized_message(), "C:\\\\new\\\\ndir");
        assert_ne!(real_newline.sanitized_message(), literal_escape.sanitized_message());
    }
}
