//! Calendar and time conversions for the orrery engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Gregorian proleptic)
//! - `UtcTime`, a whole-second UTC calendar stamp with ISO-8601 serde
//! - Greenwich mean and local sidereal time
//!
//! Every JD in the workspace is a UT Julian Date. No ΔT or leap-second
//! correction is applied; the mean-element model does not resolve them.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MAX_YEAR, MIN_YEAR, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    check_year, days_in_month, is_leap_year, jd_to_calendar, jd_to_centuries, month_bounds_jd,
    year_bounds_jd,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::{UtcTime, datetime_to_jd, jd_to_datetime, try_jd_to_datetime};
