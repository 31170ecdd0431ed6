//! Error types for chart construction.

use orrery_time::TimeError;
use thiserror::Error;

/// Errors from chart input validation or chart geometry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A required input field was not supplied.
    #[error("missing required field: {0}")]
    Missing(&'static str),
    /// A field is outside its domain.
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// The ascendant is undefined at the geographic poles.
    #[error("ascendant undefined at latitude {0}°")]
    PolarLatitude(f64),
    /// Year outside the supported calendar range.
    #[error(transparent)]
    Time(#[from] TimeError),
}
