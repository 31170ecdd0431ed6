//! Free functions over the global engine.

use orrery_chart::{ChartInput, NatalChart, SynastryResult};
use orrery_search::{
    CuratedYear, DailyPositions, MoonPhaseEvent, MoonPhaseState, RetrogradePeriod, YearTransits,
};
use tracing::{debug, warn};

use crate::error::OrreryError;
use crate::global::engine;
use crate::request::ChartRequest;

/// Natal chart with placements, whole-sign houses and aspects.
pub fn compute_natal_chart(input: &ChartInput) -> Result<NatalChart, OrreryError> {
    let chart = engine().natal_chart(input)?;
    debug!(
        jd = chart.jd_ut,
        aspects = chart.aspects.len(),
        "natal chart computed"
    );
    Ok(chart)
}

/// Natal chart from a request with optional fields.
pub fn compute_natal_chart_from_request(request: ChartRequest) -> Result<NatalChart, OrreryError> {
    let input = request.into_input().inspect_err(|err| {
        warn!(%err, "chart request rejected");
    })?;
    compute_natal_chart(&input)
}

/// Cross aspects, house overlays and compatibility between two charts.
pub fn compute_synastry(a: &ChartInput, b: &ChartInput) -> Result<SynastryResult, OrreryError> {
    engine().synastry(a, b)
}

/// Ingresses, stations and aspects in one calendar year.
pub fn scan_year_events(year: i32) -> Result<YearTransits, OrreryError> {
    engine().scan_year(year)
}

/// The year's new, first-quarter, full and last-quarter moons.
pub fn solve_moon_phases(year: i32) -> Result<Vec<MoonPhaseEvent>, OrreryError> {
    engine().moon_phases(year)
}

/// Phase, illumination and age at a UT Julian Date.
pub fn current_moon_phase(jd: f64) -> MoonPhaseState {
    engine().moon_phase_at(jd)
}

/// Curated digest: cardinal phases, retrograde periods, slow-planet
/// ingresses and rare conjunctions.
pub fn curated_year(year: i32) -> Result<CuratedYear, OrreryError> {
    engine().curated_year(year)
}

pub fn retrograde_periods(year: i32) -> Result<Vec<RetrogradePeriod>, OrreryError> {
    engine().retrograde_periods(year)
}

pub fn daily_positions(year: i32, month: u32) -> Result<Vec<DailyPositions>, OrreryError> {
    engine().daily_positions(year, month)
}
