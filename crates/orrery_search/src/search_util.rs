//! Sampling and bracket-bisection helpers shared by the scanners.

use orrery_time::{check_year, year_bounds_jd};

use crate::error::SearchError;

/// `[Jan 1, next Jan 1)` of a supported calendar year.
pub(crate) fn year_window(year: i32) -> Result<(f64, f64), SearchError> {
    check_year(year)?;
    Ok(year_bounds_jd(year))
}

/// Sample instants `start + i·step` for every `i` with the instant `< end`.
///
/// Yields nothing for a non-positive or non-finite step.
pub fn sample_times(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step.is_finite() && step > 0.0 && end > start {
        ((end - start) / step).ceil() as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| start + i as f64 * step)
        .filter(move |&t| t < end)
}

/// Bisect `[lo, hi]` for the zero of an increasing error function.
///
/// Each iteration evaluates `error(mid)`: a positive error moves the upper
/// bound, anything else the lower bound. Returns `mid` as soon as
/// `|error| < tolerance`, otherwise the bracket midpoint after
/// `max_iterations`.
pub fn bisect_bracket<F>(mut lo: f64, mut hi: f64, max_iterations: u32, tolerance: f64, error: F) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..max_iterations {
        let mid = 0.5 * (lo + hi);
        let e = error(mid);
        if e.abs() < tolerance {
            return mid;
        }
        if e > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}
