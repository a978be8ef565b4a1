//! Logging macros for ergonomic log message formatting.
//!
//! Two families:
//!
//! - `log!`, `debug!`, `info!`, `warn!`, `error!`, `fatal!` take a
//!   [`Logger`](crate::Logger) handle as first argument;
//! - `debugf!`, `infof!`, `warnf!`, `errorf!`, `fatalf!` format and submit
//!   to the process-wide logger.
//!
//! Formatting happens before submission and only when the level clears the
//! logger's threshold.
//!
//! # Examples
//!
//! ```no_run
//! use chronos_logger::prelude::*;
//! use chronos_logger::{info, warnf};
//!
//! let logger = Logger::new(&LoggerConfig::new("nexus")).unwrap();
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! chronos_logger::init(&LoggerConfig::new("nexus")).unwrap();
//! warnf!("{} connections pending", 12);
//! ```

/// Log a formatted message through a logger handle.
///
/// ```no_run
/// # use chronos_logger::prelude::*;
/// # let logger = Logger::new(&LoggerConfig::new("nexus")).unwrap();
/// use chronos_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let level = $level;
        if $logger.enabled(level) {
            $logger.log(level, format!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Format and submit a DEBUG message to the process-wide logger.
///
/// ```no_run
/// chronos_logger::debugf!("cache size: {}", 128);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::global::debug(format!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::global::info(format!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::global::warn(format!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::global::error(format!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::global::fatal(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger, RotationPeriod, DEFAULT_SHUTDOWN_TIMEOUT};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_handle_macros() {
        let dir = tempdir().unwrap();
        let logger = Logger::builder("nexus")
            .location(dir.path())
            .period(RotationPeriod::Year)
            .min_level(LogLevel::Info)
            .console_colors(false)
            .build()
            .unwrap();

        log!(logger, LogLevel::Info, "plain");
        debug!(logger, "filtered {}", 1);
        info!(logger, "items: {}", 100);
        warn!(logger, "retry {} of {}", 1, 3);
        error!(logger, "code: {}", 500);
        fatal!(logger, "failure: {}", "system");

        assert_eq!(logger.metrics().filtered(), 0);
        assert!(logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT));

        let file = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let content = fs::read_to_string(file.path()).unwrap();
        let messages: Vec<&str> = content
            .lines()
            .map(|line| line.splitn(3, '\t').nth(2).unwrap())
            .collect();
        assert_eq!(
            messages,
            vec!["plain", "items: 100", "retry 1 of 3", "code: 500", "failure: system"]
        );
    }

    #[test]
    fn test_global_macros_are_noops_without_logger() {
        // No process-wide logger is ever started in the unit test binary
        debugf!("debug {}", 1);
        infof!("info {}", 2);
        warnf!("warn {}", 3);
        errorf!("error {}", 4);
        fatalf!("fatal {}", 5);
        assert!(!crate::global::is_running());
    }
}
