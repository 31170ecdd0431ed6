//! Error types for calendar and timestamp handling.

use thiserror::Error;

/// Errors from calendar validation or timestamp parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields do not name a real date/time.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    /// Year outside the supported calendar range.
    #[error("year {0} outside supported range -9999..=9999")]
    YearOutOfRange(i32),
    /// ISO-8601 timestamp could not be parsed.
    #[error("timestamp parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
