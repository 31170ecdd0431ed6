//! Sign ingress scanning.
//!
//! Consecutive samples are compared by sign index; a change is reported at
//! the later sample. No sub-step refinement, so dates carry up to one
//! sampling step of error.

use orrery_core::{Body, PositionProvider, ZodiacSign, sign_index};
use orrery_time::jd_to_datetime;

use crate::sampling::sample_step_days;
use crate::search_util::sample_times;
use crate::transit_types::{IngressEvent, TransitEvent};

/// All ingresses of `body` between `jd_start` (inclusive) and `jd_end`.
pub fn scan_ingresses<P: PositionProvider>(
    provider: &P,
    body: Body,
    jd_start: f64,
    jd_end: f64,
) -> Vec<TransitEvent> {
    let mut events = Vec::new();
    let mut prev: Option<usize> = None;

    for t in sample_times(jd_start, jd_end, sample_step_days(body)) {
        let lon = provider.longitude(body, t);
        let idx = sign_index(lon);
        if let Some(p) = prev.filter(|&p| p != idx) {
            events.push(TransitEvent::Ingress(IngressEvent {
                body,
                from_sign: ZodiacSign::from_index(p),
                to_sign: ZodiacSign::from_index(idx),
                jd: t,
                date: jd_to_datetime(t),
                longitude_deg: lon,
            }));
        }
        prev = Some(idx);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Longitude rising 1°/day from 25° at t = 0, dipping back after t = 10.
    struct Linear;

    impl PositionProvider for Linear {
        fn longitude(&self, _body: Body, jd: f64) -> f64 {
            if jd <= 10.0 { 25.0 + jd } else { 35.0 - (jd - 10.0) }
        }
    }

    #[test]
    fn reports_later_sample() {
        // Sun steps 1 day: 25..35 then back down
        let events = scan_ingresses(&Linear, Body::Sun, 0.0, 20.0);
        assert_eq!(events.len(), 2);
        let TransitEvent::Ingress(first) = events[0] else {
            panic!("expected ingress");
        };
        assert_eq!(first.jd, 5.0);
        assert_eq!(first.from_sign, ZodiacSign::Aries);
        assert_eq!(first.to_sign, ZodiacSign::Taurus);

        let TransitEvent::Ingress(back) = events[1] else {
            panic!("expected ingress");
        };
        assert_eq!((back.from_sign, back.to_sign), (ZodiacSign::Taurus, ZodiacSign::Aries));
        assert_eq!(back.jd, 16.0);
    }

    #[test]
    fn wraps_pisces_to_aries() {
        struct Seam;
        impl PositionProvider for Seam {
            fn longitude(&self, _body: Body, jd: f64) -> f64 {
                orrery_core::normalize_360(358.0 + jd)
            }
        }
        let events = scan_ingresses(&Seam, Body::Sun, 0.0, 5.0);
        assert_eq!(events.len(), 1);
        let TransitEvent::Ingress(e) = events[0] else {
            panic!("expected ingress");
        };
        assert_eq!((e.from_sign, e.to_sign), (ZodiacSign::Pisces, ZodiacSign::Aries));
        assert_eq!(e.jd, 2.0);
    }
}
