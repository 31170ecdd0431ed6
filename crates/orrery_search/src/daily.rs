//! Day-by-day position tables.

use chrono::{DateTime, Utc};
use orrery_core::{Body, PositionProvider, SignPosition, sign_of};
use orrery_time::{check_year, days_in_month, jd_to_datetime, month_bounds_jd};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::lunar_phase::current_moon_phase;
use crate::lunar_phase_types::MoonPhaseState;
use crate::search_util::sample_times;

/// One body on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBodyPosition {
    pub body: Body,
    pub position: SignPosition,
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
}

/// Every requested body at 0h UT on one day, plus the Moon's phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPositions {
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub bodies: Vec<DailyBodyPosition>,
    pub moon_phase: MoonPhaseState,
}

impl DailyPositions {
    pub fn get(&self, body: Body) -> Option<&DailyBodyPosition> {
        self.bodies.iter().find(|p| p.body == body)
    }
}

/// One row per day of `month`, each at 0h UT.
pub fn daily_positions<P: PositionProvider>(
    provider: &P,
    year: i32,
    month: u32,
    bodies: &[Body],
) -> Result<Vec<DailyPositions>, SearchError> {
    check_year(year)?;
    if days_in_month(year, month) == 0 {
        return Err(SearchError::InvalidMonth(month));
    }
    let (start, end) = month_bounds_jd(year, month);

    Ok(sample_times(start, end, 1.0)
        .map(|jd| DailyPositions {
            jd,
            date: jd_to_datetime(jd),
            bodies: bodies
                .iter()
                .map(|&body| {
                    let speed = provider.speed(body, jd);
                    DailyBodyPosition {
                        body,
                        position: sign_of(provider.longitude(body, jd)),
                        speed_deg_per_day: speed,
                        retrograde: speed < 0.0,
                    }
                })
                .collect(),
            moon_phase: current_moon_phase(provider, jd),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use orrery_core::{ALL_BODIES, MeanElementModel};

    #[test]
    fn one_row_per_day() {
        let rows = daily_positions(&MeanElementModel, 2024, 2, &ALL_BODIES).unwrap();
        assert_eq!(rows.len(), 29);
        assert_eq!(rows[0].date.day(), 1);
        assert_eq!(rows[28].date.day(), 29);
        assert!(rows.iter().all(|r| r.bodies.len() == 10));
    }

    #[test]
    fn luminaries_never_retrograde() {
        let rows = daily_positions(&MeanElementModel, 2025, 3, &[Body::Sun, Body::Moon]).unwrap();
        for row in &rows {
            assert!(row.bodies.iter().all(|p| !p.retrograde));
            assert!(row.get(Body::Mars).is_none());
        }
    }

    #[test]
    fn rejects_unsupported_year() {
        assert_eq!(
            daily_positions(&MeanElementModel, i32::MAX, 12, &ALL_BODIES),
            Err(SearchError::Time(orrery_time::TimeError::YearOutOfRange(i32::MAX)))
        );
    }

    #[test]
    fn rejects_month_13() {
        assert_eq!(
            daily_positions(&MeanElementModel, 2025, 13, &ALL_BODIES),
            Err(SearchError::InvalidMonth(13))
        );
    }
}
