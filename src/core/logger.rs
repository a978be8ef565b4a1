//! Main logger implementation
//!
//! A [`Logger`] owns one bounded queue and the background writer draining it.
//! Submitting an entry filters it by severity, prints it to the console,
//! hands it to the optional external handler and finally queues it for the
//! file. Dropping the logger closes the queue; the writer finishes whatever
//! is still queued and exits on its own.

use super::{
    config::{LoggerConfig, ResolvedConfig},
    error::{LoggerError, Result},
    handler::LogHandler,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    rotation::{RotationPeriod, RotationPolicy},
    writer::{DrainSignal, Writer},
};
use crate::appenders::{ConsoleAppender, FileAppender};
use chrono::{DateTime, Local};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::RwLock;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default time [`Logger::shutdown`] callers wait for the queue to drain
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Logger {
    config: ResolvedConfig,
    policy: RotationPolicy,
    console: ConsoleAppender,
    handler: RwLock<Option<LogHandler>>,
    sender: Sender<LogEntry>,
    /// Metrics for observability (filtered, written, failed writes, ...)
    metrics: Arc<LoggerMetrics>,
    drained: DrainSignal,
}

impl Logger {
    /// Validate `config`, create the log directory and start the writer
    ///
    /// # Errors
    ///
    /// Configuration errors from [`LoggerConfig::resolve`], or an I/O error
    /// if the log directory cannot be created. Nothing keeps running when an
    /// error is returned.
    pub fn new(config: &LoggerConfig) -> Result<Self> {
        Self::from_resolved(config.resolve()?)
    }

    /// Start a logger from an already validated configuration
    pub fn from_resolved(config: ResolvedConfig) -> Result<Self> {
        let console = ConsoleAppender::with_colors(config.console_colors);
        Self::start(config, console)
    }

    fn start(config: ResolvedConfig, console: ConsoleAppender) -> Result<Self> {
        std::fs::create_dir_all(&config.location).map_err(|e| {
            LoggerError::io_operation(
                "creating log directory",
                format!("cannot create '{}'", config.location.display()),
                e,
            )
        })?;

        let policy = config.rotation_policy();
        let (sender, receiver) = bounded(config.queue_capacity);
        let metrics = Arc::new(LoggerMetrics::new());

        let file = FileAppender::new(config.location.clone(), policy);
        let drained = Writer::new(receiver, Box::new(file), Arc::clone(&metrics)).spawn()?;

        Ok(Self {
            console,
            config,
            policy,
            handler: RwLock::new(None),
            sender,
            metrics,
            drained,
        })
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use chronos_logger::prelude::*;
    ///
    /// let logger = Logger::builder("nexus")
    ///     .location("/tmp/nexus-logs")
    ///     .period(RotationPeriod::Day)
    ///     .min_level(LogLevel::Debug)
    ///     .build()
    ///     .unwrap();
    /// logger.info("ready");
    /// ```
    #[must_use]
    pub fn builder(app_name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(app_name)
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn min_level(&self) -> LogLevel {
        self.config.min_level
    }

    pub fn period(&self) -> RotationPeriod {
        self.config.period
    }

    pub fn directory(&self) -> &Path {
        &self.config.location
    }

    /// File an entry stamped `timestamp` is written to
    pub fn log_path_for(&self, timestamp: &DateTime<Local>) -> PathBuf {
        self.config.location.join(self.policy.file_name(timestamp))
    }

    /// Get the logger metrics for detailed observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Signal that fires once the writer has drained and exited
    pub fn drain_signal(&self) -> DrainSignal {
        self.drained.clone()
    }

    /// Replace the external handler; `None` clears it
    pub fn set_handler(&self, handler: Option<LogHandler>) {
        *self.handler.write() = handler;
    }

    /// Submit a fully-formed entry
    pub fn submit(&self, entry: LogEntry) {
        // Clone out so the lock is not held while user code runs
        let handler = self.handler.read().clone();
        self.dispatch(entry, handler.as_ref());
    }

    /// Filter, print, notify `handler`, then queue `entry` for the file
    pub(crate) fn dispatch(&self, entry: LogEntry, handler: Option<&LogHandler>) {
        if !entry.level.passes(self.config.min_level) {
            self.metrics.record_filtered();
            return;
        }

        if let Err(e) = self.console.emit(&entry) {
            eprintln!("[LOGGER ERROR] Console write failed: {}", e);
        }

        if let Some(handler) = handler {
            handler(&entry.timestamp, entry.level, &entry.message);
        }

        self.enqueue(entry);
    }

    /// Queue an entry, waiting for space when the queue is full
    fn enqueue(&self, entry: LogEntry) {
        match self.sender.try_send(entry) {
            Ok(()) => {
                self.metrics.record_enqueued();
            }
            Err(TrySendError::Full(entry)) => {
                self.metrics.record_block();
                // send() blocks until the writer frees a slot
                if self.sender.send(entry).is_ok() {
                    self.metrics.record_enqueued();
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                // Writer is gone, nothing left to persist to
            }
        }
    }

    /// Whether an entry at `level` would currently be emitted
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.config.min_level)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        self.submit(LogEntry::new(level, message));
    }

    /// Log with a level given by name
    ///
    /// Names outside the severity table have no rank and are always
    /// filtered.
    pub fn log_named(&self, level: &str, message: impl Into<String>) {
        match level.parse::<LogLevel>() {
            Ok(level) => self.log(level, message),
            Err(_) => {
                self.metrics.record_filtered();
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Close the queue and wait for the writer to finish
    ///
    /// # Returns
    ///
    /// `true` if every queued entry was processed within `timeout`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chronos_logger::{Logger, LoggerConfig, DEFAULT_SHUTDOWN_TIMEOUT};
    ///
    /// let logger = Logger::new(&LoggerConfig::new("nexus")).unwrap();
    /// logger.info("Important message");
    ///
    /// if !logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
    ///     eprintln!("Warning: logger shutdown timed out");
    /// }
    /// ```
    pub fn shutdown(self, timeout: Duration) -> bool {
        let drained = self.drained.clone();
        // Dropping the logger drops the only sender
        drop(self);

        if drained.wait(timeout) {
            true
        } else {
            eprintln!(
                "[LOGGER WARNING] Writer thread did not finish within {:?}. \
                 Queued entries may still be pending.",
                timeout
            );
            false
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```no_run
/// use chronos_logger::prelude::*;
///
/// let logger = Logger::builder("nexus")
///     .location("/tmp/nexus-logs")
///     .period(RotationPeriod::Hour)
///     .min_level(LogLevel::Warn)
///     .handler(handler(|_ts, level, msg| eprintln!("forwarded {level}: {msg}")))
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    handler: Option<LogHandler>,
    console_writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            config: LoggerConfig::new(app_name),
            handler: None,
            console_writer: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            handler: None,
            console_writer: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn location(mut self, location: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_location(location);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn period(mut self, period: RotationPeriod) -> Self {
        self.config = self.config.with_period(period);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config = self.config.with_level(level.to_str());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_queue_capacity(capacity);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_colors(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console_colors(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: LogHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Print console lines to `writer` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.console_writer = Some(Box::new(writer));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let config = self.config.resolve()?;
        let mut console = ConsoleAppender::with_colors(config.console_colors);
        if let Some(writer) = self.console_writer {
            console = console.with_writer(writer);
        }

        let logger = Logger::start(config, console)?;
        logger.set_handler(self.handler);
        Ok(logger)
    }
}
