//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! All functions take UT Julian Dates and return degrees in [0, 360).
//! The difference between UT1 and UTC is ignored at this model's precision.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees at a UT Julian Date.
///
/// GMST = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///        + 0.000387933·T² − T³/38710000
///
/// where T = Julian centuries since J2000.0.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t2
        - t3 / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, both in degrees.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn gmst_j2000_midnight() {
        // At 2000-Jan-01 0h UT, GMST ≈ 6h 39m 52s ≈ 99.97°
        let gmst = gmst_deg(2_451_544.5);
        assert!((gmst - 99.97).abs() < 0.05, "GMST = {gmst}°, expected ~99.97°");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987-Apr-10 0h UT: GMST = 13h10m46.3668s = 197.693195°
        let jd = calendar_to_jd(1987, 4, 10.0);
        let gmst = gmst_deg(jd);
        assert!((gmst - 197.693_195).abs() < 1e-5, "GMST = {gmst}°");
    }

    #[test]
    fn gmst_advances_about_one_degree_per_solar_day() {
        let g1 = gmst_deg(2_460_000.5);
        let g2 = gmst_deg(2_460_001.5);
        let advance = (g2 - g1).rem_euclid(360.0);
        assert!((advance - 0.9856).abs() < 0.001, "advance = {advance}°");
    }

    #[test]
    fn lst_east_offset() {
        let lst = local_sidereal_time_deg(350.0, 20.0);
        assert!((lst - 10.0).abs() < 1e-12);
        let lst = local_sidereal_time_deg(10.0, -74.006);
        assert!((lst - 295.994).abs() < 1e-9);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5, 2_400_000.0] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "GMST out of range: {g}");
        }
    }
}
