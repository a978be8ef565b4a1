//! # Chronos Logger
//!
//! An asynchronous, level-filtered logger. Every emitted entry is printed to
//! the console immediately, handed to an optional external handler, and
//! queued for a background writer that appends it to a log file named after
//! the entry's rotation bucket (`nexus_2025-06-02.log` for daily files).
//!
//! ## Features
//!
//! - **Non-blocking file I/O**: one writer thread drains a bounded queue;
//!   producers only wait when the queue is full
//! - **Stateless rotation**: hourly, daily, ISO-weekly, monthly or yearly files
//! - **No lost entries on shutdown**: stopping closes the queue and the
//!   writer drains it before exiting
//! - **Two entry points**: an explicit [`Logger`] handle, or the process-wide
//!   functions in [`global`] (re-exported at the crate root)

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;
pub mod signal;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        handler, Appender, DrainSignal, LogEntry, LogHandler, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, ResolvedConfig, Result, RotationPeriod,
        RotationPolicy, DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    handler, Appender, DrainSignal, LogEntry, LogHandler, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, ResolvedConfig, Result, RotationPeriod,
    RotationPolicy, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use global::{
    debug, error, fatal, info, init, is_running, log, log_named, set_handler, stop,
    stop_and_wait, submit, warn,
};
pub use signal::ShutdownListener;
