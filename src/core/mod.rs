//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod handler;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod rotation;
pub mod writer;

pub use appender::Appender;
pub use config::{default_location, LoggerConfig, ResolvedConfig, DEFAULT_QUEUE_CAPACITY};
pub use error::{LoggerError, Result};
pub use handler::{handler, LogHandler};
pub use log_entry::LogEntry;
pub use log_level::{severity_rank, LogLevel};
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use rotation::{RotationPeriod, RotationPolicy, FILE_PREFIX, FILE_SUFFIX};
pub use writer::{DrainSignal, Writer};
