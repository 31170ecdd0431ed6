//! Ascendant and Midheaven from sidereal time and location.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12–13.

use orrery_core::{SignPosition, normalize_360, sign_of};
use orrery_time::{gmst_deg, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Fixed obliquity of the ecliptic, degrees (J2000 mean value).
pub const OBLIQUITY_DEG: f64 = 23.4393;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Midheaven longitude from Local Sidereal Time.
///
/// `MC = atan2(sin(LST), cos(LST)·cos(ε))`, normalized to [0, 360).
pub fn midheaven_deg(lst_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    normalize_360(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Ascendant longitude from Local Sidereal Time and latitude.
///
/// `Asc = atan(−cos(LST) / (sin(LST)·cos(ε) + tan(φ)·sin(ε)))`, with the
/// branch chosen so the ascendant lies on the eastern horizon, i.e.
/// 0° < Asc − MC < 180°. For most LST this matches "add 180° when
/// LST < 180°"; the two-argument form stays correct where the
/// denominator changes sign.
///
/// Returns [`ChartError::PolarLatitude`] for |φ| ≥ 90°, where tan(φ)
/// diverges.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64) -> Result<f64, ChartError> {
    if latitude_deg.abs() >= 90.0 {
        return Err(ChartError::PolarLatitude(latitude_deg));
    }
    let lst = normalize_360(lst_deg).to_radians();
    let eps = OBLIQUITY_DEG.to_radians();
    let phi = latitude_deg.to_radians();

    let denom = lst.sin() * eps.cos() + phi.tan() * eps.sin();
    let asc = f64::atan2(lst.cos(), -denom);
    Ok(normalize_360(asc.to_degrees()))
}

/// Sidereal time and chart angles at one instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    pub gmst_deg: f64,
    pub lst_deg: f64,
    pub ascendant: SignPosition,
    pub midheaven: SignPosition,
}

/// Compute GMST, LST, Ascendant and Midheaven for a UT JD and location.
pub fn chart_angles(jd_ut: f64, location: &GeoLocation) -> Result<ChartAngles, ChartError> {
    let gmst = gmst_deg(jd_ut);
    let lst = local_sidereal_time_deg(gmst, location.longitude_deg);
    let asc = ascendant_deg(lst, location.latitude_deg)?;
    let mc = midheaven_deg(lst);
    Ok(ChartAngles {
        gmst_deg: gmst,
        lst_deg: lst,
        ascendant: sign_of(asc),
        midheaven: sign_of(mc),
    })
}
