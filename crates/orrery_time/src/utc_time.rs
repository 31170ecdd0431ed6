//! UTC calendar stamps and chrono interop.
//!
//! `UtcTime` is the plain calendar form of a UT Julian Date, rounded to the
//! whole second. It serializes as an ISO-8601 string
//! (`YYYY-MM-DDTHH:MM:SSZ`).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, check_year, days_in_month, jd_to_calendar,
};

/// UTC calendar date and time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Checked constructor: rejects impossible calendar fields and years
    /// outside the supported range.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        check_year(year)?;
        let dim = days_in_month(year, month);
        let valid = dim > 0
            && (1..=dim).contains(&day)
            && hour < 24
            && minute < 60
            && (0.0..60.0).contains(&second);
        if !valid {
            return Err(TimeError::InvalidDate {
                year,
                month,
                day,
                hour,
                minute,
            });
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// UT Julian Date of this stamp.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar stamp of a UT Julian Date, rounded to the nearest second.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let mut midnight = shifted.floor() - 0.5;
        let mut secs = ((shifted - shifted.floor()) * SECONDS_PER_DAY).round() as u32;
        if secs >= SECONDS_PER_DAY as u32 {
            midnight += 1.0;
            secs -= SECONDS_PER_DAY as u32;
        }
        let (year, month, day) = jd_to_calendar(midnight);
        Self {
            year,
            month,
            day: day.round() as u32,
            hour: secs / 3600,
            minute: (secs % 3600) / 60,
            second: (secs % 60) as f64,
        }
    }

    /// Convert to a chrono timestamp. `None` when outside chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let whole = self.second.floor();
        let nanos = ((self.second - whole) * 1e9).round() as u32;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos.min(999_999_999))
            .map(|naive| naive.and_utc())
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

/// Timestamp of a UT Julian Date, rounded to the whole second.
/// `None` when the JD is beyond chrono's range (about ±262 000 years).
pub fn try_jd_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let secs = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round() as i64;
    DateTime::from_timestamp(secs, 0)
}

/// Timestamp of a UT Julian Date, rounded to the whole second.
///
/// Saturates to [`DateTime::<Utc>::MIN_UTC`] / [`DateTime::<Utc>::MAX_UTC`]
/// outside chrono's range. Years inside [`MIN_YEAR`](crate::MIN_YEAR)..=
/// [`MAX_YEAR`](crate::MAX_YEAR) are always represented exactly.
pub fn jd_to_datetime(jd: f64) -> DateTime<Utc> {
    try_jd_to_datetime(jd).unwrap_or(if jd < UNIX_EPOCH_JD {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// UT Julian Date of a chrono timestamp.
pub fn datetime_to_jd(dt: &DateTime<Utc>) -> f64 {
    let secs = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self::from(dt.with_timezone(&Utc)))
    }
}

impl TryFrom<String> for UtcTime {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UtcTime> for String {
    fn from(t: UtcTime) -> Self {
        t.to_string()
    }
}
