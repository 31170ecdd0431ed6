//! Ecliptic angle arithmetic.

/// Normalize an angle to [0, 360) degrees.
///
/// A tiny negative input can round to exactly 360.0 after the correction;
/// that edge folds back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Fold an angle into (-180, 180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Shortest arc between two longitudes, in [0, 180]. Symmetric.
pub fn shortest_separation(a: f64, b: f64) -> f64 {
    let d = (normalize_360(a) - normalize_360(b)).abs();
    if d > 180.0 { 360.0 - d } else { d }
}

/// Signed motion from `prev` to `curr`, folded to (-180, 180].
///
/// Positive means prograde (increasing longitude) across the 0°/360° seam.
pub fn unwrap_delta(prev: f64, curr: f64) -> f64 {
    normalize_to_pm180(curr - prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(45.0, 45.0)]
    #[case(360.0, 0.0)]
    #[case(-10.0, 350.0)]
    #[case(730.0, 10.0)]
    #[case(-370.0, 350.0)]
    fn normalize_cases(#[case] input: f64, #[case] expected: f64) {
        assert!((normalize_360(input) - expected).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_is_in_range() {
        let r = normalize_360(-1e-15);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_range_and_idempotence() {
        let mut x = -10_000.0;
        while x < 10_000.0 {
            let n = normalize_360(x);
            assert!((0.0..360.0).contains(&n), "normalize({x}) = {n}");
            assert_eq!(normalize_360(n), n);
            x += 7.3;
        }
    }

    #[test]
    fn pm180_bounds() {
        assert_eq!(normalize_to_pm180(180.0), 180.0);
        assert_eq!(normalize_to_pm180(-180.0), 180.0);
        assert!((normalize_to_pm180(270.0) + 90.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-270.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn separation_symmetric_and_bounded() {
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let s = shortest_separation(a, b);
                assert!((0.0..=180.0).contains(&s));
                assert_eq!(s, shortest_separation(b, a));
                b += 17.0;
            }
            a += 13.0;
        }
    }

    #[test]
    fn separation_across_seam() {
        assert!((shortest_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((shortest_separation(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn unwrap_delta_across_seam() {
        assert!((unwrap_delta(359.5, 0.5) - 1.0).abs() < 1e-12);
        assert!((unwrap_delta(0.5, 359.5) + 1.0).abs() < 1e-12);
        assert_eq!(unwrap_delta(120.0, 120.0), 0.0);
    }
}
