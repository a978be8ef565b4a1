//! Rotation periods and log filename derivation
//!
//! A log file covers one bucket of wall-clock time. The bucket is encoded in
//! the filename, so rotation needs no state: every entry computes its own
//! destination and entries of the same bucket land in the same file.

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every log filename
pub const FILE_PREFIX: &str = "nexus_";

/// Suffix shared by every log filename
pub const FILE_SUFFIX: &str = ".log";

/// Cadence at which a new log file begins
///
/// | Period | Filename                  |
/// |--------|---------------------------|
/// | Hour   | `nexus_YYYY-MM-DDTHH.log` |
/// | Day    | `nexus_YYYY-MM-DD.log`    |
/// | Week   | `nexus_GGGG-WW.log`       |
/// | Month  | `nexus_YYYY-MM.log`       |
/// | Year   | `nexus_YYYY.log`          |
///
/// `Week` uses ISO-8601 week numbering: `GGGG` is the ISO week-numbering
/// year, which differs from the calendar year around new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RotationPeriod {
    #[default]
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RotationPeriod {
    pub const ALL: [RotationPeriod; 5] = [
        RotationPeriod::Hour,
        RotationPeriod::Day,
        RotationPeriod::Week,
        RotationPeriod::Month,
        RotationPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RotationPeriod::Hour => "Hour",
            RotationPeriod::Day => "Day",
            RotationPeriod::Week => "Week",
            RotationPeriod::Month => "Month",
            RotationPeriod::Year => "Year",
        }
    }

    /// Bucket label of `timestamp` for this period
    pub fn bucket<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            RotationPeriod::Hour => timestamp.format("%Y-%m-%dT%H").to_string(),
            RotationPeriod::Day => timestamp.format("%Y-%m-%d").to_string(),
            RotationPeriod::Week => {
                let week = timestamp.iso_week();
                format!("{:04}-{:02}", week.year(), week.week())
            }
            RotationPeriod::Month => timestamp.format("%Y-%m").to_string(),
            RotationPeriod::Year => timestamp.format("%Y").to_string(),
        }
    }

    /// Log filename for `timestamp` under this period
    pub fn file_name<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format!("{}{}{}", FILE_PREFIX, self.bucket(timestamp), FILE_SUFFIX)
    }
}

impl fmt::Display for RotationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" | "hourly" => Ok(RotationPeriod::Hour),
            "day" | "daily" => Ok(RotationPeriod::Day),
            "week" | "weekly" => Ok(RotationPeriod::Week),
            "month" | "monthly" => Ok(RotationPeriod::Month),
            "year" | "yearly" => Ok(RotationPeriod::Year),
            _ => Err(format!("Invalid rotation period: '{}'", s)),
        }
    }
}

/// Filename policy applied by the writer
///
/// An unset period falls back to daily files.
///
/// # Examples
///
/// ```
/// use chronos_logger::core::{RotationPeriod, RotationPolicy};
/// use chrono::{TimeZone, Utc};
///
/// let policy = RotationPolicy::new().with_period(RotationPeriod::Week);
/// let ts = Utc.with_ymd_and_hms(2024, 12, 31, 9, 0, 0).unwrap();
/// assert_eq!(policy.file_name(&ts), "nexus_2025-01.log");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationPolicy {
    period: Option<RotationPeriod>,
}

impl RotationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_period(mut self, period: RotationPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Configured period, if any
    #[must_use]
    pub fn period(&self) -> Option<RotationPeriod> {
        self.period
    }

    /// Period actually used to derive filenames
    #[must_use]
    pub fn effective_period(&self) -> RotationPeriod {
        self.period.unwrap_or(RotationPeriod::Day)
    }

    pub fn file_name<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.effective_period().file_name(timestamp)
    }
}

impl From<RotationPeriod> for RotationPolicy {
    fn from(period: RotationPeriod) -> Self {
        Self::new().with_period(period)
    }
}
