//! Console appender implementation

use crate::core::{LogEntry, Result};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

/// Writes `HH:MM:SS<TAB>LEVEL<TAB>message` lines, colored by level
///
/// Lines go to stdout unless another target is set with
/// [`ConsoleAppender::with_writer`].
pub struct ConsoleAppender {
    use_colors: bool,
    target: Option<Mutex<Box<dyn Write + Send>>>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            target: None,
        }
    }

    /// Send console lines to `writer` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.target = Some(Mutex::new(Box::new(writer)));
        self
    }

    /// Render the console line for `entry`, without trailing newline
    pub fn format_line(&self, entry: &LogEntry) -> String {
        let line = format!(
            "{}\t{}\t{}",
            entry.clock_time(),
            entry.level.to_str(),
            entry.message
        );

        if self.use_colors {
            line.color(entry.level.color_code()).to_string()
        } else {
            line
        }
    }

    /// Write the line for `entry` through `&self`
    ///
    /// The target is locked for the whole line so concurrent producers
    /// never interleave within a line.
    pub fn emit(&self, entry: &LogEntry) -> Result<()> {
        let line = self.format_line(entry);
        match &self.target {
            Some(target) => writeln!(target.lock(), "{}", line)?,
            None => writeln!(std::io::stdout().lock(), "{}", line)?,
        }
        Ok(())
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        let ts = Local.with_ymd_and_hms(2025, 1, 15, 13, 4, 5).unwrap();
        LogEntry::at(ts, level, message)
    }

    #[test]
    fn test_plain_line() {
        let console = ConsoleAppender::with_colors(false);
        assert_eq!(
            console.format_line(&entry(LogLevel::Warn, "disk at 91%")),
            "13:04:05\tWARN\tdisk at 91%"
        );
    }

    #[test]
    fn test_colored_line_wraps_plain_text() {
        colored::control::set_override(true);
        let console = ConsoleAppender::new();
        let line = console.format_line(&entry(LogLevel::Error, "boom"));
        assert!(line.contains("13:04:05\tERROR\tboom"));
        // red foreground
        assert!(line.starts_with("\u{1b}[31m"));
        assert!(line.ends_with("\u{1b}[0m"));
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_to_writer() {
        let buffer = SharedBuffer::default();
        let console = ConsoleAppender::with_colors(false).with_writer(buffer.clone());

        console.emit(&entry(LogLevel::Info, "hello")).unwrap();
        console.emit(&entry(LogLevel::Fatal, "two\nlines")).unwrap();

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(output, "13:04:05\tINFO\thello\n13:04:05\tFATAL\ttwo\nlines\n");
    }

    #[test]
    fn test_emit_to_stdout() {
        let console = ConsoleAppender::with_colors(false);
        assert!(console.emit(&entry(LogLevel::Info, "hello")).is_ok());
    }
}
