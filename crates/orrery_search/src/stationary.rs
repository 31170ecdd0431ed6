//! Retrograde station scanning.
//!
//! Direction comes from the sign of the wrap-aware longitude change between
//! consecutive samples. A direct → retrograde flip emits a `Start` station
//! at the detecting sample; the next retrograde → direct flip emits an
//! `End` carrying the days elapsed since that start.

use orrery_core::{Body, PositionProvider, sign_of, unwrap_delta};
use orrery_time::jd_to_datetime;

use crate::sampling::sample_step_days;
use crate::search_util::sample_times;
use crate::transit_types::{
    RetrogradePeriod, StationEvent, StationKind, StationPoint, TransitEvent, sort_by_jd,
};

/// Shadow window either side of a retrograde loop, in days.
pub const fn shadow_days(body: Body) -> f64 {
    match body {
        Body::Mercury => 15.0,
        Body::Venus | Body::Mars => 20.0,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Station scan
// ---------------------------------------------------------------------------

/// All stations of `body` between `jd_start` (inclusive) and `jd_end`.
///
/// The first sample pair only establishes the direction. A zero change
/// keeps the previous direction. A `Start` with no following `End` in the
/// range stays unpaired; an `End` with no remembered `Start` gets no
/// duration.
pub fn scan_stations<P: PositionProvider>(
    provider: &P,
    body: Body,
    jd_start: f64,
    jd_end: f64,
) -> Vec<TransitEvent> {
    let mut events = Vec::new();
    let mut prev_lon: Option<f64> = None;
    let mut direct: Option<bool> = None;
    let mut start_jd: Option<f64> = None;

    for t in sample_times(jd_start, jd_end, sample_step_days(body)) {
        let lon = provider.longitude(body, t);
        if let Some(prev) = prev_lon {
            let delta = unwrap_delta(prev, lon);
            let now_direct = if delta > 0.0 {
                Some(true)
            } else if delta < 0.0 {
                Some(false)
            } else {
                direct
            };

            let kind = match (direct, now_direct) {
                (Some(true), Some(false)) => Some(StationKind::Start),
                (Some(false), Some(true)) => Some(StationKind::End),
                _ => None,
            };
            if let Some(kind) = kind {
                let paired_duration_days = match kind {
                    StationKind::Start => {
                        start_jd = Some(t);
                        None
                    }
                    StationKind::End => start_jd.take().map(|s| t - s),
                };
                events.push(TransitEvent::RetrogradeStation(StationEvent {
                    body,
                    kind,
                    jd: t,
                    date: jd_to_datetime(t),
                    position: sign_of(lon),
                    paired_duration_days,
                }));
            }
            direct = now_direct;
        }
        prev_lon = Some(lon);
    }
    events
}

/// Stations of several bodies merged into one JD-ordered list.
pub fn scan_stations_for<P: PositionProvider>(
    provider: &P,
    bodies: &[Body],
    jd_start: f64,
    jd_end: f64,
) -> Vec<TransitEvent> {
    let mut events: Vec<TransitEvent> = bodies
        .iter()
        .flat_map(|&b| scan_stations(provider, b, jd_start, jd_end))
        .collect();
    sort_by_jd(&mut events);
    events
}

// ---------------------------------------------------------------------------
// Retrograde periods
// ---------------------------------------------------------------------------

fn station_point(e: &StationEvent) -> StationPoint {
    StationPoint {
        jd: e.jd,
        date: e.date,
        position: e.position,
    }
}

/// Complete retrograde loops of `bodies`, ordered by their start station.
///
/// Only loops with both stations inside the range are returned.
pub fn retrograde_periods<P: PositionProvider>(
    provider: &P,
    bodies: &[Body],
    jd_start: f64,
    jd_end: f64,
) -> Vec<RetrogradePeriod> {
    let mut periods = Vec::new();
    for &body in bodies {
        let mut open: Option<StationEvent> = None;
        for event in scan_stations(provider, body, jd_start, jd_end) {
            let TransitEvent::RetrogradeStation(station) = event else {
                continue;
            };
            match station.kind {
                StationKind::Start => open = Some(station),
                StationKind::End => {
                    let Some(start) = open.take() else { continue };
                    let shadow = shadow_days(body);
                    let (shadow_start, shadow_end) = if shadow > 0.0 {
                        (
                            Some(jd_to_datetime(start.jd - shadow)),
                            Some(jd_to_datetime(station.jd + shadow)),
                        )
                    } else {
                        (None, None)
                    };
                    periods.push(RetrogradePeriod {
                        body,
                        station_retrograde: station_point(&start),
                        station_direct: station_point(&station),
                        duration_days: station.jd - start.jd,
                        shadow_start,
                        shadow_end,
                    });
                }
            }
        }
    }
    periods.sort_by(|a, b| a.station_retrograde.jd.total_cmp(&b.station_retrograde.jd));
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: f64 = 2_460_676.5;

    /// Prograde 1°/day, retrograde 0.5°/day from S+10 to S+30, then prograde.
    struct DoubleReversal;

    impl PositionProvider for DoubleReversal {
        fn longitude(&self, _body: Body, jd: f64) -> f64 {
            let a = S + 10.0;
            let b = S + 30.0;
            if jd <= a {
                100.0 + (jd - S)
            } else if jd <= b {
                110.0 - 0.5 * (jd - a)
            } else {
                100.0 + (jd - b)
            }
        }
    }

    fn stations(events: &[TransitEvent]) -> Vec<StationEvent> {
        events
            .iter()
            .filter_map(|e| match e {
                TransitEvent::RetrogradeStation(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn double_reversal_yields_one_pair() {
        let events = scan_stations(&DoubleReversal, Body::Mercury, S, S + 60.0);
        let st = stations(&events);
        assert_eq!(st.len(), 2);
        assert_eq!(st[0].kind, StationKind::Start);
        assert_eq!(st[0].jd, S + 10.5);
        assert_eq!(st[0].paired_duration_days, None);
        assert_eq!(st[1].kind, StationKind::End);
        assert_eq!(st[1].jd, S + 30.5);
        assert_eq!(st[1].paired_duration_days, Some(20.0));
    }

    #[test]
    fn unpaired_start_emits_no_end() {
        let events = scan_stations(&DoubleReversal, Body::Mercury, S, S + 25.0);
        let st = stations(&events);
        assert_eq!(st.len(), 1);
        assert_eq!(st[0].kind, StationKind::Start);
    }

    #[test]
    fn end_without_start_has_no_duration() {
        let events = scan_stations(&DoubleReversal, Body::Mercury, S + 15.0, S + 60.0);
        let st = stations(&events);
        assert_eq!(st.len(), 1);
        assert_eq!(st[0].kind, StationKind::End);
        assert_eq!(st[0].paired_duration_days, None);
    }

    #[test]
    fn flat_stretch_keeps_direction() {
        struct Plateau;
        impl PositionProvider for Plateau {
            fn longitude(&self, _body: Body, jd: f64) -> f64 {
                // rise, hold still, rise again
                if jd < 5.0 {
                    jd
                } else if jd < 10.0 {
                    5.0
                } else {
                    jd - 5.0
                }
            }
        }
        assert!(scan_stations(&Plateau, Body::Venus, 0.0, 20.0).is_empty());
    }

    #[test]
    fn seam_crossing_is_not_a_reversal() {
        struct Seam;
        impl PositionProvider for Seam {
            fn longitude(&self, _body: Body, jd: f64) -> f64 {
                orrery_core::normalize_360(355.0 + jd)
            }
        }
        assert!(scan_stations(&Seam, Body::Mars, 0.0, 20.0).is_empty());
    }

    #[test]
    fn period_with_shadow() {
        let periods = retrograde_periods(&DoubleReversal, &[Body::Mercury], S, S + 60.0);
        assert_eq!(periods.len(), 1);
        let p = &periods[0];
        assert_eq!(p.duration_days, 20.0);
        assert_eq!(p.station_retrograde.jd, S + 10.5);
        let shadow_start = p.shadow_start.unwrap();
        assert_eq!(shadow_start, jd_to_datetime(S + 10.5 - 15.0));
        assert_eq!(p.shadow_end.unwrap(), jd_to_datetime(S + 30.5 + 15.0));
    }

    #[test]
    fn outer_planets_have_no_shadow() {
        let periods = retrograde_periods(&DoubleReversal, &[Body::Saturn], S, S + 200.0);
        // Saturn samples every 5 days: still one loop
        assert_eq!(periods.len(), 1);
        assert!(periods[0].shadow_start.is_none());
        assert!(periods[0].shadow_end.is_none());
    }

    #[test]
    fn shadow_table() {
        assert_eq!(shadow_days(Body::Mercury), 15.0);
        assert_eq!(shadow_days(Body::Venus), 20.0);
        assert_eq!(shadow_days(Body::Mars), 20.0);
        assert_eq!(shadow_days(Body::Jupiter), 0.0);
    }
}
