//! Timestamp formatting port.

use chrono::{DateTime, Utc};

/// Converts creation timestamps into display strings.
pub trait TimestampFormatter: Send + Sync {
    /// Formats `timestamp` for display, e.g. `Mar 5, 2024 2:07 PM`.
    fn format(&self, timestamp: DateTime<Utc>) -> String;
}
