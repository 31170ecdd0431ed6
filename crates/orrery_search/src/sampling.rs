//! Per-body sampling cadence for the event scanners.
//!
//! Fast movers are sampled more often so short retrograde loops and brief
//! sign visits are not stepped over near a body's slowest point.

use orrery_core::Body;

/// Sampling step in days for ingress and station scans.
pub const fn sample_step_days(body: Body) -> f64 {
    match body {
        Body::Sun => 1.0,
        Body::Moon => 0.5,
        Body::Mercury => 0.5,
        Body::Venus => 1.0,
        Body::Mars => 1.0,
        Body::Jupiter => 5.0,
        Body::Saturn => 5.0,
        Body::Uranus => 10.0,
        Body::Neptune => 10.0,
        Body::Pluto => 10.0,
    }
}
