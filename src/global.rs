//! Process-wide logger
//!
//! Convenience layer over [`Logger`] for applications that want to log from
//! anywhere without passing a handle around. One logger at most is running
//! at a time. Every function here is safe to call before [`init`] or after
//! [`stop`]; logging calls simply do nothing then.
//!
//! ```no_run
//! use chronos_logger::{self as log, LoggerConfig, RotationPeriod};
//!
//! log::init(&LoggerConfig::new("nexus").with_period(RotationPeriod::Day)).unwrap();
//! log::info("service started");
//! chronos_logger::warnf!("{} retries left", 3);
//! log::stop();
//! ```

use crate::core::{
    LogEntry, LogHandler, LogLevel, Logger, LoggerConfig, LoggerMetrics, ResolvedConfig, Result,
};
use crate::signal::ShutdownListener;
use parking_lot::{const_mutex, const_rwlock, Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

static LOGGER: RwLock<Option<Arc<Logger>>> = const_rwlock(None);
static HANDLER: RwLock<Option<LogHandler>> = const_rwlock(None);

/// Signal listener of the running logger; its lock also serializes
/// init and stop.
static LIFECYCLE: Mutex<Option<ShutdownListener>> = const_mutex(None);

/// Start the process-wide logger
///
/// Resolves `config`, creates the log directory, spawns the writer and, if
/// `auto_stop` is set, starts listening for SIGINT/SIGTERM to call [`stop`].
/// A logger that is already running is replaced: its queue is closed and
/// drains into its own directory.
///
/// # Errors
///
/// Configuration and I/O errors. On error the previously running logger,
/// if any, is left untouched and nothing new keeps running.
pub fn init(config: &LoggerConfig) -> Result<()> {
    let resolved = config.resolve()?;
    let auto_stop = resolved.auto_stop;
    let logger = Arc::new(Logger::from_resolved(resolved)?);

    let mut lifecycle = LIFECYCLE.lock();
    let listener = if auto_stop {
        Some(ShutdownListener::spawn(stop)?)
    } else {
        None
    };

    let previous = LOGGER.write().replace(logger);
    let previous_listener = std::mem::replace(&mut *lifecycle, listener);
    drop(lifecycle);

    drop(previous_listener);
    drop(previous);
    Ok(())
}

/// Stop the process-wide logger
///
/// Closes the queue and forgets the logger without waiting for the writer;
/// entries already queued are still written. Calling it again, or before
/// [`init`], does nothing.
pub fn stop() {
    drop(take_running());
}

/// Stop the logger and wait up to `timeout` for queued entries to land
///
/// Returns `true` once the writer has drained, or immediately when no logger
/// was running.
pub fn stop_and_wait(timeout: Duration) -> bool {
    match take_running() {
        Some(logger) => {
            let drained = logger.drain_signal();
            drop(logger);
            drained.wait(timeout)
        }
        None => true,
    }
}

fn take_running() -> Option<Arc<Logger>> {
    let mut lifecycle = LIFECYCLE.lock();
    let listener = lifecycle.take();
    let logger = LOGGER.write().take();
    drop(lifecycle);

    drop(listener);
    logger
}

fn current() -> Option<Arc<Logger>> {
    LOGGER.read().clone()
}

pub fn is_running() -> bool {
    LOGGER.read().is_some()
}

/// Configuration of the running logger
pub fn config() -> Option<ResolvedConfig> {
    current().map(|logger| logger.config().clone())
}

/// Snapshot of the running logger's metrics
pub fn metrics() -> Option<LoggerMetrics> {
    current().map(|logger| logger.metrics().clone())
}

/// Replace the process-wide external handler; `None` clears it
///
/// The handler survives [`stop`] and [`init`].
pub fn set_handler(handler: Option<LogHandler>) {
    *HANDLER.write() = handler;
}

/// Submit a fully-formed entry to the running logger
pub fn submit(entry: LogEntry) {
    if let Some(logger) = current() {
        dispatch(&logger, entry);
    }
}

fn dispatch(logger: &Logger, entry: LogEntry) {
    let handler = HANDLER.read().clone();
    logger.dispatch(entry, handler.as_ref());
}

pub fn log(level: LogLevel, message: impl Into<String>) {
    let Some(logger) = current() else {
        return;
    };

    if !logger.enabled(level) {
        logger.metrics().record_filtered();
        return;
    }

    dispatch(&logger, LogEntry::new(level, message));
}

/// Log with a level given by name; unknown names are always filtered
pub fn log_named(level: &str, message: impl Into<String>) {
    let Some(logger) = current() else {
        return;
    };

    match level.parse::<LogLevel>() {
        Ok(level) => log(level, message),
        Err(_) => {
            logger.metrics().record_filtered();
        }
    }
}

#[inline]
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

#[inline]
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

#[inline]
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

#[inline]
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

#[inline]
pub fn fatal(message: impl Into<String>) {
    log(LogLevel::Fatal, message);
}
