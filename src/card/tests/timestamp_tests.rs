//! Unit tests for the timestamp formatter adapter.

use super::fixtures::fixed_timestamp;
use crate::card::{
    adapters::timestamp::{
        DEFAULT_TIMESTAMP_PATTERN, PatternTimestampFormatter, TimestampFormatConfig,
        TimestampFormatError,
    },
    ports::TimestampFormatter,
};
use chrono::{TimeZone, Utc};
use rstest::rstest;

#[rstest]
fn default_formatter_uses_utc() {
    let formatter = PatternTimestampFormatter::default();
    assert_eq!(formatter.format(fixed_timestamp()), "Mar 5, 2024 2:07 PM");
}

#[rstest]
#[case(2024, 1, 9, 0, 5, "Jan 9, 2024 12:05 AM")]
#[case(2023, 12, 31, 23, 59, "Dec 31, 2023 11:59 PM")]
#[case(2024, 7, 14, 12, 0, "Jul 14, 2024 12:00 PM")]
fn default_pattern_matches_display_format(
    #[case] year: i32,
    #[case] month: u32,
    #[case] day: u32,
    #[case] hour: u32,
    #[case] minute: u32,
    #[case] expected: &str,
) {
    let timestamp = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp");
    assert_eq!(PatternTimestampFormatter::new().format(timestamp), expected);
}

#[rstest]
fn configured_offset_shifts_display_time() {
    let config = TimestampFormatConfig {
        utc_offset_seconds: -5 * 3600,
        ..TimestampFormatConfig::default()
    };
    let formatter = PatternTimestampFormatter::from_config(&config).expect("valid config");

    assert_eq!(formatter.format(fixed_timestamp()), "Mar 5, 2024 9:07 AM");
}

#[rstest]
fn configured_pattern_is_used() {
    let config = TimestampFormatConfig {
        pattern: "%Y-%m-%d %H:%M".to_owned(),
        utc_offset_seconds: 0,
    };
    let formatter = PatternTimestampFormatter::from_config(&config).expect("valid config");

    assert_eq!(formatter.format(fixed_timestamp()), "2024-03-05 14:07");
}

#[rstest]
fn malformed_pattern_is_rejected() {
    let config = TimestampFormatConfig {
        pattern: "%Q".to_owned(),
        utc_offset_seconds: 0,
    };
    assert_eq!(
        PatternTimestampFormatter::from_config(&config),
        Err(TimestampFormatError::InvalidPattern("%Q".to_owned()))
    );
}

#[rstest]
fn offset_beyond_a_day_is_rejected() {
    let config = TimestampFormatConfig {
        pattern: DEFAULT_TIMESTAMP_PATTERN.to_owned(),
        utc_offset_seconds: 90_000,
    };
    assert_eq!(
        PatternTimestampFormatter::from_config(&config),
        Err(TimestampFormatError::InvalidOffset(90_000))
    );
}

#[rstest]
fn empty_config_deserializes_to_defaults() {
    let config: TimestampFormatConfig = serde_json::from_str("{}").expect("valid config");
    assert_eq!(config, TimestampFormatConfig::default());
}
