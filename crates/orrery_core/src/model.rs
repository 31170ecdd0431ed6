//! Mean-element orbital model and the position-provider seam.
//!
//! Each body advances uniformly from its J2000.0 mean longitude. Planets
//! ride circular, coplanar heliocentric orbits; Earth sits opposite the
//! mean Sun at 1 AU. The apparent geocentric longitude of a planet is the
//! direction of the Earth→planet vector, which reverses for a few weeks
//! around each inferior conjunction (inner planets) or opposition (outer
//! planets).
//!
//! Accuracy is a few degrees at best for the planets and degrades slowly
//! with distance from J2000.0. No perturbations, nutation or precession.

use orrery_time::J2000_JD;

use crate::angle::{normalize_360, unwrap_delta};
use crate::body::Body;

/// Half-width of the central difference used for speed, in days.
pub const SPEED_STEP_DAYS: f64 = 0.5;

/// Source of geocentric ecliptic longitudes.
///
/// Implement this to plug in a higher-precision ephemeris; all scanners
/// and chart builders are generic over it.
pub trait PositionProvider {
    /// Apparent geocentric ecliptic longitude in [0, 360) at a UT JD.
    fn longitude(&self, body: Body, jd: f64) -> f64;

    /// Longitudinal speed in degrees/day, negative when retrograde.
    fn speed(&self, body: Body, jd: f64) -> f64 {
        let before = self.longitude(body, jd - SPEED_STEP_DAYS);
        let after = self.longitude(body, jd + SPEED_STEP_DAYS);
        unwrap_delta(before, after) / (2.0 * SPEED_STEP_DAYS)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn longitude(&self, body: Body, jd: f64) -> f64 {
        (**self).longitude(body, jd)
    }

    fn speed(&self, body: Body, jd: f64) -> f64 {
        (**self).speed(body, jd)
    }
}

/// Mean longitude: `epoch + motion × (jd − J2000)`, normalized.
pub fn mean_longitude(body: Body, jd: f64) -> f64 {
    let el = body.elements();
    normalize_360(el.epoch_longitude_deg + el.daily_motion_deg * (jd - J2000_JD))
}

/// Apparent geocentric longitude under the circular-orbit projection.
pub fn apparent_longitude(body: Body, jd: f64) -> f64 {
    let el = body.elements();
    let l = mean_longitude(body, jd);
    if el.semi_major_axis_au == 0.0 {
        return l;
    }
    let earth = normalize_360(mean_longitude(Body::Sun, jd) + 180.0).to_radians();
    let l = l.to_radians();
    let x = el.semi_major_axis_au * l.cos() - earth.cos();
    let y = el.semi_major_axis_au * l.sin() - earth.sin();
    normalize_360(y.atan2(x).to_degrees())
}

/// The built-in mean-element ephemeris.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanElementModel;

impl PositionProvider for MeanElementModel {
    fn longitude(&self, body: Body, jd: f64) -> f64 {
        apparent_longitude(body, jd)
    }
}
