//! Error types for scan configuration.

use orrery_time::TimeError;
use thiserror::Error;

/// Errors from validating scan or phase-solver settings.
///
/// The scanners themselves never fail; only their configuration and
/// calendar arguments can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
    #[error(transparent)]
    Time(#[from] TimeError),
}
