//! Lunar phase search and instantaneous classification.
//!
//! Cardinal phases are found by sampling the Moon − Sun elongation and
//! bisecting each bracketed crossing. The new-moon target sits on the
//! 0°/360° seam, so its crossing test and bisection error are handled
//! here rather than in the generic bracket helper.

use orrery_core::{Body, PositionProvider, normalize_360, sign_of};
use orrery_time::jd_to_datetime;
use tracing::debug;

use crate::error::SearchError;
use crate::lunar_phase_types::{
    ALL_CARDINAL_PHASES, ALL_LUNAR_PHASES, CardinalPhase, LunarPhase, MoonPhaseEvent,
    MoonPhaseState, PhaseConfig, SYNODIC_MONTH_DAYS,
};
use crate::search_util::{bisect_bracket, sample_times, year_window};

/// Moon − Sun elongation in [0, 360).
pub fn elongation_deg<P: PositionProvider>(provider: &P, jd: f64) -> f64 {
    normalize_360(provider.longitude(Body::Moon, jd) - provider.longitude(Body::Sun, jd))
}

/// Eight-way bucket of an elongation angle.
pub fn classify_phase(elongation_deg: f64) -> LunarPhase {
    let bucket = (normalize_360(elongation_deg + 22.5) / 45.0).floor() as usize;
    ALL_LUNAR_PHASES[bucket % 8]
}

/// Phase, illumination and age at one instant.
pub fn current_moon_phase<P: PositionProvider>(provider: &P, jd: f64) -> MoonPhaseState {
    let elongation = elongation_deg(provider, jd);
    MoonPhaseState {
        jd,
        phase: classify_phase(elongation),
        elongation_deg: elongation,
        illumination: (1.0 - elongation.to_radians().cos()) / 2.0,
        age_days: elongation / 360.0 * SYNODIC_MONTH_DAYS,
    }
}

fn crossed(prev: f64, curr: f64, phase: CardinalPhase) -> bool {
    match phase {
        CardinalPhase::New => prev > 270.0 && curr < 90.0,
        _ => {
            let target = phase.target_deg();
            prev < target && target <= curr
        }
    }
}

/// Signed distance from the target, continuous across the bracket.
fn phase_error(elongation: f64, phase: CardinalPhase) -> f64 {
    let e = if phase == CardinalPhase::New && elongation > 180.0 {
        elongation - 360.0
    } else {
        elongation
    };
    e - phase.target_deg()
}

fn exactness(elongation: f64, phase: CardinalPhase) -> f64 {
    let diff = (elongation - phase.target_deg()).abs();
    if phase == CardinalPhase::New && diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Every cardinal phase in a calendar year, ordered by instant.
///
/// The year is sampled every `config.step_days`; each bracketed crossing is
/// refined by bisection until the elongation is within
/// `config.tolerance_deg` of its target or the iteration cap is reached.
pub fn solve_moon_phases<P: PositionProvider>(
    provider: &P,
    year: i32,
    config: &PhaseConfig,
) -> Result<Vec<MoonPhaseEvent>, SearchError> {
    let (start, end) = year_window(year)?;
    let mut events = Vec::new();
    let mut prev: Option<(f64, f64)> = None;

    for t in sample_times(start, end, config.step_days) {
        let curr = elongation_deg(provider, t);
        if let Some((prev_t, prev_e)) = prev {
            for phase in ALL_CARDINAL_PHASES {
                if !crossed(prev_e, curr, phase) {
                    continue;
                }
                let jd = bisect_bracket(
                    prev_t,
                    t,
                    config.max_iterations,
                    config.tolerance_deg,
                    |x| phase_error(elongation_deg(provider, x), phase),
                );
                let sun = provider.longitude(Body::Sun, jd);
                let moon = provider.longitude(Body::Moon, jd);
                let elongation = normalize_360(moon - sun);
                events.push(MoonPhaseEvent {
                    phase,
                    jd,
                    date: jd_to_datetime(jd),
                    sun: sign_of(sun),
                    moon: sign_of(moon),
                    elongation_deg: elongation,
                    exactness_deg: exactness(elongation, phase),
                });
            }
        }
        prev = Some((t, curr));
    }

    events.sort_by(|a, b| a.jd.total_cmp(&b.jd));
    debug!(year, phases = events.len(), "moon phases solved");
    Ok(events)
}
