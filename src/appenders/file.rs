//! Period-rotated file appender
//!
//! Every entry opens its destination file in append mode, writes one line and
//! closes the handle again. No handle outlives a single entry, so a crash can
//! never leave a file open mid-write, and a file that could not be opened for
//! one entry is retried from scratch for the next.

use crate::core::{Appender, LogEntry, LoggerError, Result, RotationPolicy};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileAppender {
    directory: PathBuf,
    policy: RotationPolicy,
}

impl FileAppender {
    pub fn new(directory: impl Into<PathBuf>, policy: RotationPolicy) -> Self {
        Self {
            directory: directory.into(),
            policy,
        }
    }

    /// Directory receiving the log files
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Full path of the file `entry` belongs to
    #[must_use]
    pub fn path_for(&self, entry: &LogEntry) -> PathBuf {
        self.directory.join(self.policy.file_name(&entry.timestamp))
    }

    /// Render the persisted line for `entry`, including the trailing newline
    pub fn format_line(entry: &LogEntry) -> String {
        format!(
            "{}\t{}\t{}\n",
            entry.clock_time(),
            entry.level.to_str(),
            entry.sanitized_message()
        )
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let path = self.path_for(entry);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("could not open log file: {}", e),
                )
            })?;

        file.write_all(Self::format_line(entry).as_bytes())
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("could not write to log file: {}", e),
                )
            })?;

        // handle closes on drop
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
