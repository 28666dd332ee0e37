//! `chrono`-backed timestamp formatter.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::fmt::Write;
use thiserror::Error;

use crate::card::ports::TimestampFormatter;

/// Default display pattern, e.g. `Mar 5, 2024 2:07 PM`.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%b %-d, %Y %-I:%M %p";

/// Configuration for [`PatternTimestampFormatter`].
///
/// # Examples
///
/// ```
/// use whisper::card::adapters::timestamp::TimestampFormatConfig;
///
/// let config: TimestampFormatConfig =
///     serde_json::from_str(r#"{"utc_offset_seconds": 3600}"#).expect("valid config");
/// assert_eq!(config.pattern, "%b %-d, %Y %-I:%M %p");
/// assert_eq!(config.utc_offset_seconds, 3600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimestampFormatConfig {
    /// `strftime`-style pattern.
    pub pattern: String,
    /// Offset east of UTC in which timestamps are displayed.
    pub utc_offset_seconds: i32,
}

impl Default for TimestampFormatConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_PATTERN.to_owned(),
            utc_offset_seconds: 0,
        }
    }
}

/// Errors raised while building a formatter from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampFormatError {
    /// The pattern contains an unknown or malformed specifier.
    #[error("invalid timestamp pattern: {0}")]
    InvalidPattern(String),
    /// The offset lies outside ±24 hours.
    #[error("invalid UTC offset: {0} seconds")]
    InvalidOffset(i32),
}

/// Formats timestamps with a fixed pattern in a fixed UTC offset.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use whisper::card::adapters::timestamp::PatternTimestampFormatter;
/// use whisper::card::ports::TimestampFormatter;
///
/// let formatter = PatternTimestampFormatter::new();
/// let timestamp = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
/// assert_eq!(formatter.format(timestamp), "Mar 5, 2024 2:07 PM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTimestampFormatter {
    pattern: String,
    offset: FixedOffset,
}

impl PatternTimestampFormatter {
    /// Creates a formatter using [`DEFAULT_TIMESTAMP_PATTERN`] in UTC.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_PATTERN.to_owned(),
            offset: Utc.fix(),
        }
    }

    /// Creates a formatter from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampFormatError`] for malformed patterns or offsets.
    pub fn from_config(config: &TimestampFormatConfig) -> Result<Self, TimestampFormatError> {
        if StrftimeItems::new(&config.pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TimestampFormatError::InvalidPattern(config.pattern.clone()));
        }
        let offset = FixedOffset::east_opt(config.utc_offset_seconds)
            .ok_or(TimestampFormatError::InvalidOffset(config.utc_offset_seconds))?;
        Ok(Self {
            pattern: config.pattern.clone(),
            offset,
        })
    }
}

impl Default for PatternTimestampFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampFormatter for PatternTimestampFormatter {
    fn format(&self, timestamp: DateTime<Utc>) -> String {
        let local = timestamp.with_timezone(&self.offset);
        let mut rendered = String::new();
        if write!(rendered, "{}", local.format(&self.pattern)).is_err() {
            return local.to_rfc3339();
        }
        rendered
    }
}
