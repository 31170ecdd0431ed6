//! The configured engine: a position provider plus validated settings.

use orrery_chart::{ChartInput, NatalChart, SynastryResult, build_natal_chart, compare_charts};
use orrery_config::OrreryConfig;
use orrery_core::{MeanElementModel, PositionProvider};
use orrery_search::{
    CuratedYear, DailyPositions, MoonPhaseEvent, MoonPhaseState, PhaseConfig, RetrogradePeriod, ScanConfig,
    YearTransits, current_moon_phase, curated_year, daily_positions, scan_year_events, solve_moon_phases,
    year_retrograde_periods,
};
use tracing::{debug, warn};

use crate::error::OrreryError;

/// Chart and scan entry points over one position provider.
///
/// Holds only immutable state, so a shared reference can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct Orrery<P = MeanElementModel> {
    provider: P,
    config: OrreryConfig,
    scan: ScanConfig,
    phase: PhaseConfig,
}

impl Orrery<MeanElementModel> {
    /// The mean-element model with validated settings.
    pub fn new(config: OrreryConfig) -> Result<Self, OrreryError> {
        Self::with_provider(MeanElementModel, config)
    }
}

impl Default for Orrery<MeanElementModel> {
    fn default() -> Self {
        let config = OrreryConfig::default();
        Self {
            provider: MeanElementModel,
            scan: config.scan.to_scan_config(),
            phase: config.phase.to_phase_config(),
            config,
        }
    }
}

impl<P: PositionProvider> Orrery<P> {
    /// A custom ephemeris with validated settings.
    pub fn with_provider(provider: P, config: OrreryConfig) -> Result<Self, OrreryError> {
        config.validate()?;
        Ok(Self {
            provider,
            scan: config.scan.to_scan_config(),
            phase: config.phase.to_phase_config(),
            config,
        })
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn natal_chart(&self, input: &ChartInput) -> Result<NatalChart, OrreryError> {
        build_natal_chart(&self.provider, input, &self.config.chart.bodies).map_err(|err| {
            warn!(%err, "chart request rejected");
            OrreryError::from(err)
        })
    }

    pub fn synastry(&self, a: &ChartInput, b: &ChartInput) -> Result<SynastryResult, OrreryError> {
        let chart_a = self.natal_chart(a)?;
        let chart_b = self.natal_chart(b)?;
        let result = compare_charts(&chart_a, &chart_b);
        debug!(
            cross_aspects = result.cross_aspects.len(),
            compatibility = result.compatibility,
            "synastry computed"
        );
        Ok(result)
    }

    pub fn scan_year(&self, year: i32) -> Result<YearTransits, OrreryError> {
        Ok(scan_year_events(&self.provider, year, &self.scan)?)
    }

    pub fn moon_phases(&self, year: i32) -> Result<Vec<MoonPhaseEvent>, OrreryError> {
        Ok(solve_moon_phases(&self.provider, year, &self.phase)?)
    }

    /// Moon phases, retrograde periods and headline events of one year.
    pub fn curated_year(&self, year: i32) -> Result<CuratedYear, OrreryError> {
        Ok(curated_year(&self.provider, year, &self.scan, &self.phase)?)
    }

    pub fn moon_phase_at(&self, jd: f64) -> MoonPhaseState {
        current_moon_phase(&self.provider, jd)
    }

    pub fn retrograde_periods(&self, year: i32) -> Result<Vec<RetrogradePeriod>, OrreryError> {
        Ok(year_retrograde_periods(&self.provider, year, &self.scan)?)
    }

    /// One row per day of the month for the configured chart bodies.
    pub fn daily_positions(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyPositions>, OrreryError> {
        Ok(daily_positions(
            &self.provider,
            year,
            month,
            &self.config.chart.bodies,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::Body;

    #[test]
    fn rejects_invalid_config() {
        let mut config = OrreryConfig::default();
        config.chart.bodies.clear();
        assert!(matches!(Orrery::new(config), Err(OrreryError::Config(_))));
    }

    #[test]
    fn chart_uses_configured_bodies() {
        let mut config = OrreryConfig::default();
        config.chart.bodies = vec![Body::Sun, Body::Moon];
        let engine = Orrery::new(config).unwrap();
        let input = ChartInput {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            utc_offset_hours: 0.0,
            latitude_deg: 51.5,
            longitude_deg: 0.0,
        };
        let chart = engine.natal_chart(&input).unwrap();
        assert_eq!(chart.placements.len(), 2);
        assert!(chart.aspects.len() <= 1);
    }

    #[test]
    fn polar_chart_is_rejected() {
        let input = ChartInput {
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            utc_offset_hours: 0.0,
            latitude_deg: 90.0,
            longitude_deg: 0.0,
        };
        let engine: Orrery = Orrery::default();
        let err = engine.natal_chart(&input).unwrap_err();
        assert!(matches!(err, OrreryError::Chart(_)), "{err}");
    }

    #[test]
    fn unsupported_years_surface_as_errors() {
        let engine: Orrery = Orrery::default();
        assert!(matches!(engine.scan_year(i32::MAX), Err(OrreryError::Search(_))));
        assert!(matches!(engine.moon_phases(i32::MIN), Err(OrreryError::Search(_))));
        assert!(matches!(engine.retrograde_periods(300_000), Err(OrreryError::Search(_))));
        let input = ChartInput {
            year: i32::MIN,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            utc_offset_hours: 0.0,
            latitude_deg: 0.0,
            longitude_deg: 0.0,
        };
        let err = engine.natal_chart(&input).unwrap_err();
        assert!(err.to_string().contains("outside supported range"), "{err}");
    }
}
