//! Logger configuration
//!
//! `LoggerConfig` is the shape an application hands over (usually read from
//! its own JSON configuration); `ResolvedConfig` is what a running logger
//! actually uses, with every default filled in and every field validated.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::rotation::{RotationPeriod, RotationPolicy};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Capacity of the entry queue between producers and the writer
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Logger configuration as supplied by the host application
///
/// # Example
///
/// ```
/// use chronos_logger::core::{LoggerConfig, RotationPeriod};
///
/// let config = LoggerConfig::new("nexus")
///     .with_location("/tmp/nexus-logs")
///     .with_period(RotationPeriod::Day)
///     .with_level("WARN");
///
/// let resolved = config.resolve().unwrap();
/// assert_eq!(resolved.period, RotationPeriod::Day);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Application name, also used to derive the default location
    pub app_name: String,

    /// Directory receiving the log files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,

    /// Rotation cadence, `Hour` when unset or blank
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_period_as_none"
    )]
    pub file_period: Option<RotationPeriod>,

    /// Minimum emitted level name, `INFO` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Stop the logger on SIGINT/SIGTERM
    pub auto_stop: bool,

    /// Bound of the entry queue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_capacity: Option<usize>,

    /// Colorize console lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console_colors: Option<bool>,
}

impl LoggerConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&text)
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_period(mut self, period: RotationPeriod) -> Self {
        self.file_period = Some(period);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_auto_stop(mut self, auto_stop: bool) -> Self {
        self.auto_stop = auto_stop;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = Some(enabled);
        self
    }

    /// Validate and fill in defaults
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] when the application name
    /// is blank, the level name is not a known level, or the queue capacity
    /// is zero.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let app_name = self.app_name.trim();
        if app_name.is_empty() {
            return Err(LoggerError::config("app_name", "application name is required"));
        }

        let min_level = match self.level.as_deref().map(str::trim) {
            None | Some("") => LogLevel::default(),
            Some(name) => name
                .parse::<LogLevel>()
                .map_err(|e| LoggerError::config("level", e))?,
        };

        let queue_capacity = self.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY);
        if queue_capacity == 0 {
            return Err(LoggerError::config(
                "queue_capacity",
                "queue capacity must be greater than zero",
            ));
        }

        let location = match &self.location {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => default_location(app_name),
        };

        Ok(ResolvedConfig {
            app_name: app_name.to_string(),
            location,
            period: self.file_period.unwrap_or_default(),
            min_level,
            auto_stop: self.auto_stop,
            queue_capacity,
            console_colors: self.console_colors.unwrap_or(true),
        })
    }
}

/// Accepts a missing, null or blank period as unset
fn blank_period_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<RotationPeriod>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Platform default log directory for `app_name`
///
/// `C:\ProgramData\<app>\logs` on Windows, `/var/log/<app>` elsewhere.
pub fn default_location(app_name: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(format!("C:\\ProgramData\\{}\\logs", app_name))
    } else {
        PathBuf::from(format!("/var/log/{}", app_name))
    }
}

/// Validated configuration of a running logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub app_name: String,
    pub location: PathBuf,
    pub period: RotationPeriod,
    pub min_level: LogLevel,
    pub auto_stop: bool,
    pub queue_capacity: usize,
    pub console_colors: bool,
}

impl ResolvedConfig {
    pub fn rotation_policy(&self) -> RotationPolicy {
        RotationPolicy::from(self.period)
    }
}
