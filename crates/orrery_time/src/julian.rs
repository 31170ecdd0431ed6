//! Julian Date ↔ calendar conversions.
//!
//! Gregorian proleptic calendar throughout: the Gregorian leap-year rule is
//! applied to every date, including those before the 1582 reform.
//!
//! Day counting follows the March-based civil-day algorithm (H. Hinnant,
//! "chrono-Compatible Low-Level Date Algorithms"), carried in f64 so every
//! `i32` year converts without overflow.

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Earliest calendar year accepted by chart and scan entry points.
pub const MIN_YEAR: i32 = -9999;

/// Latest calendar year accepted by chart and scan entry points.
pub const MAX_YEAR: i32 = 9999;

/// Reject years outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn check_year(year: i32) -> Result<(), TimeError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::YearOutOfRange(year))
    }
}

/// Julian Date of 0000-Mar-01 00:00, the origin of the March-based day count.
const MARCH_1_YEAR_0_JD: f64 = 1_721_119.5;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: f64 = 146_097.0;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `15.5` = 15th at 12:00). January and February are counted as
/// months 11 and 12 of the previous March-based year.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    gregorian_jd(year as f64, month, day)
}

// Year carried as f64 so that neighbouring-year arithmetic cannot overflow.
fn gregorian_jd(year: f64, month: u32, day: f64) -> f64 {
    let y = if month <= 2 { year - 1.0 } else { year };
    let mp = ((month % 12 + 9) % 12) as f64;
    let days = 365.0 * y + (y / 4.0).floor() - (y / 100.0).floor()
        + (y / 400.0).floor()
        + ((153.0 * mp + 2.0) / 5.0).floor();
    MARCH_1_YEAR_0_JD + days + day - 1.0
}

/// Convert a Julian Date back to a calendar date.
///
/// Returns `(year, month, day_with_fraction)`. Inverse of [`calendar_to_jd`]
/// for every year, including negative (astronomical) years.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let frac = shifted - z;
    let n = z - (MARCH_1_YEAR_0_JD + 0.5);
    let era = (n / DAYS_PER_ERA).floor();
    let doe = n - era * DAYS_PER_ERA;
    let yoe = ((doe - (doe / 1460.0).floor() + (doe / 36_524.0).floor()
        - (doe / 146_096.0).floor())
        / 365.0)
        .floor();
    let doy = doe - (365.0 * yoe + (yoe / 4.0).floor() - (yoe / 100.0).floor());
    let mp = ((5.0 * doy + 2.0) / 153.0).floor();
    let day = doy - ((153.0 * mp + 2.0) / 5.0).floor() + 1.0 + frac;
    let month = if mp < 10.0 { mp + 3.0 } else { mp - 9.0 };
    let year = yoe + era * 400.0 + if month <= 2.0 { 1.0 } else { 0.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Half-open JD range `[Jan 1 0h, next Jan 1 0h)` covering a calendar year.
pub fn year_bounds_jd(year: i32) -> (f64, f64) {
    let y = year as f64;
    (gregorian_jd(y, 1, 1.0), gregorian_jd(y + 1.0, 1, 1.0))
}

/// Half-open JD range covering a calendar month.
pub fn month_bounds_jd(year: i32, month: u32) -> (f64, f64) {
    let y = year as f64;
    let start = gregorian_jd(y, month, 1.0);
    let end = if month == 12 {
        gregorian_jd(y + 1.0, 1, 1.0)
    } else {
        gregorian_jd(y, month + 1, 1.0)
    };
    (start, end)
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
