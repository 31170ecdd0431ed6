//! Year-scoped transit report.

use orrery_core::PositionProvider;
use tracing::debug;

use crate::aspect_scan::{scan_outer_aspects, scan_sun_aspects};
use crate::error::SearchError;
use crate::ingress::scan_ingresses;
use crate::search_util::year_window;
use crate::stationary::{retrograde_periods, scan_stations_for};
use crate::transit_types::{RetrogradePeriod, ScanConfig, TransitEvent, YearTransits, sort_by_jd};

/// Scan one calendar year `[Jan 1, next Jan 1)` for ingresses, stations
/// and aspects.
///
/// Only years outside [`orrery_time::MIN_YEAR`]..=[`orrery_time::MAX_YEAR`]
/// are rejected; supported years far from J2000 merely lose accuracy. The
/// config is expected to have passed [`ScanConfig::validate`]; a
/// non-positive cadence simply yields no samples.
pub fn scan_year_events<P: PositionProvider>(
    provider: &P,
    year: i32,
    config: &ScanConfig,
) -> Result<YearTransits, SearchError> {
    let (start, end) = year_window(year)?;

    let mut ingresses: Vec<TransitEvent> = config
        .ingress_bodies
        .iter()
        .flat_map(|&b| scan_ingresses(provider, b, start, end))
        .collect();
    sort_by_jd(&mut ingresses);

    let retrogrades = scan_stations_for(provider, &config.retrograde_bodies, start, end);

    let mut aspects = scan_outer_aspects(
        provider,
        &config.outer_bodies,
        config.outer_cadence_days,
        start,
        end,
    );
    aspects.extend(scan_sun_aspects(
        provider,
        &config.outer_bodies,
        config.sun_corridor_deg,
        config.sun_cadence_days,
        start,
        end,
    ));
    sort_by_jd(&mut aspects);

    debug!(
        year,
        ingresses = ingresses.len(),
        stations = retrogrades.len(),
        aspects = aspects.len(),
        "year scan complete"
    );

    Ok(YearTransits {
        year,
        ingresses,
        retrogrades,
        aspects,
    })
}

/// Complete retrograde loops for the configured bodies in one year.
pub fn year_retrograde_periods<P: PositionProvider>(
    provider: &P,
    year: i32,
    config: &ScanConfig,
) -> Result<Vec<RetrogradePeriod>, SearchError> {
    let (start, end) = year_window(year)?;
    let periods = retrograde_periods(provider, &config.retrograde_bodies, start, end);
    debug!(year, periods = periods.len(), "retrograde periods");
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{Body, MeanElementModel};
    use orrery_time::{TimeError, year_bounds_jd};

    #[test]
    fn lists_are_sorted_and_typed() {
        let report = scan_year_events(&MeanElementModel, 2025, &ScanConfig::default()).unwrap();
        for list in [&report.ingresses, &report.retrogrades, &report.aspects] {
            assert!(list.windows(2).all(|w| w[0].jd() <= w[1].jd()));
        }
        assert!(report.ingresses.iter().all(|e| matches!(e, TransitEvent::Ingress(_))));
        assert!(
            report
                .retrogrades
                .iter()
                .all(|e| matches!(e, TransitEvent::RetrogradeStation(_)))
        );
        assert!(report.aspects.iter().all(|e| matches!(e, TransitEvent::Aspect(_))));
    }

    #[test]
    fn events_fall_inside_the_year() {
        let (start, end) = year_bounds_jd(2025);
        let report = scan_year_events(&MeanElementModel, 2025, &ScanConfig::default()).unwrap();
        assert!(!report.is_empty());
        for e in report.timeline() {
            assert!(e.jd() >= start && e.jd() < end);
        }
    }

    #[test]
    fn body_filter_is_respected() {
        let config = ScanConfig {
            ingress_bodies: vec![Body::Sun],
            retrograde_bodies: vec![Body::Mars],
            ..ScanConfig::default()
        };
        let report = scan_year_events(&MeanElementModel, 2025, &config).unwrap();
        // Sun visits all 12 signs; 2025-01-01 begins mid-Capricorn
        assert_eq!(report.ingresses.len(), 12);
        assert!(report.ingresses.iter().all(|e| e.body() == Body::Sun));
        assert!(report.retrogrades.iter().all(|e| e.body() == Body::Mars));
    }

    #[test]
    fn unsupported_years_are_errors() {
        let config = ScanConfig::default();
        for year in [i32::MAX, i32::MIN, 300_000] {
            let expected = Err(SearchError::Time(TimeError::YearOutOfRange(year)));
            assert_eq!(scan_year_events(&MeanElementModel, year, &config), expected);
            assert_eq!(
                year_retrograde_periods(&MeanElementModel, year, &config),
                Err(SearchError::Time(TimeError::YearOutOfRange(year)))
            );
        }
    }
}
