//! Aspect scanning between pairs of moving bodies.
//!
//! For each pair and aspect kind the scanner tracks whether the separation
//! is inside the orb and the closest sample of the current run. Leaving the
//! orb emits one event at that closest sample. Runs still open when the
//! range ends are dropped, like unpaired stations.

use orrery_chart::{ALL_ASPECT_KINDS, AspectKind, HARD_ASPECTS};
use orrery_core::{Body, PositionProvider, SignPosition, shortest_separation, sign_of};
use orrery_time::jd_to_datetime;

use crate::search_util::sample_times;
use crate::transit_types::{AspectEvent, TransitEvent, sort_by_jd};

#[derive(Debug, Clone, Copy)]
struct BestSample {
    jd: f64,
    separation: f64,
    exactness: f64,
    pos_a: SignPosition,
    pos_b: SignPosition,
}

/// Aspect runs for one pair of bodies.
///
/// Each kind in `kinds` is tracked independently, so one sample can sit in
/// two overlapping windows when `orb_override` widens them.
pub fn scan_pair_aspects<P: PositionProvider>(
    provider: &P,
    (body_a, body_b): (Body, Body),
    kinds: &[AspectKind],
    orb_override: Option<f64>,
    step_days: f64,
    jd_start: f64,
    jd_end: f64,
) -> Vec<TransitEvent> {
    let mut events = Vec::new();
    let mut runs: Vec<Option<BestSample>> = vec![None; kinds.len()];

    for t in sample_times(jd_start, jd_end, step_days) {
        let lon_a = provider.longitude(body_a, t);
        let lon_b = provider.longitude(body_b, t);
        let separation = shortest_separation(lon_a, lon_b);

        for (kind, run) in kinds.iter().zip(runs.iter_mut()) {
            let exactness = (separation - kind.angle_deg()).abs();
            let orb = orb_override.unwrap_or(kind.orb_deg());
            if exactness <= orb {
                if run.is_none_or(|best| exactness < best.exactness) {
                    *run = Some(BestSample {
                        jd: t,
                        separation,
                        exactness,
                        pos_a: sign_of(lon_a),
                        pos_b: sign_of(lon_b),
                    });
                }
            } else if let Some(best) = run.take() {
                events.push(TransitEvent::Aspect(AspectEvent {
                    body_a,
                    body_b,
                    aspect: *kind,
                    jd: best.jd,
                    date: jd_to_datetime(best.jd),
                    separation_deg: best.separation,
                    exactness_deg: best.exactness,
                    position_a: best.pos_a,
                    position_b: best.pos_b,
                }));
            }
        }
    }
    events
}

/// All five aspects between every pair of `bodies`, at nominal orbs.
pub fn scan_outer_aspects<P: PositionProvider>(
    provider: &P,
    bodies: &[Body],
    step_days: f64,
    jd_start: f64,
    jd_end: f64,
) -> Vec<TransitEvent> {
    let mut events = Vec::new();
    for (i, &a) in bodies.iter().enumerate() {
        for &b in &bodies[i + 1..] {
            events.extend(scan_pair_aspects(
                provider,
                (a, b),
                &ALL_ASPECT_KINDS,
                None,
                step_days,
                jd_start,
                jd_end,
            ));
        }
    }
    sort_by_jd(&mut events);
    events
}

/// Hard aspects from the Sun to each target, inside a fixed corridor.
pub fn scan_sun_aspects<P: PositionProvider>(
    provider: &P,
    targets: &[Body],
    corridor_deg: f64,
    step_days: f64,
    jd_start: f64,
    jd_end: f64,
) -> Vec<TransitEvent> {
    let mut events: Vec<TransitEvent> = targets
        .iter()
        .filter(|&&b| b != Body::Sun)
        .flat_map(|&b| {
            scan_pair_aspects(
                provider,
                (Body::Sun, b),
                &HARD_ASPECTS,
                Some(corridor_deg),
                step_days,
                jd_start,
                jd_end,
            )
        })
        .collect();
    sort_by_jd(&mut events);
    events
}
