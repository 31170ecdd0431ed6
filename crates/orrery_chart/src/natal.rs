//! Natal chart assembly.

use orrery_core::{Body, PositionProvider, SignPosition, sign_of};
use orrery_time::{UtcTime, calendar_to_jd, check_year, days_in_month};
use serde::{Deserialize, Serialize};

use crate::aspect::{AspectMatch, find_aspect};
use crate::error::ChartError;
use crate::geometry::{GeoLocation, chart_angles};
use crate::houses::{House, house_of, whole_sign_houses};

/// Birth data in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Local offset from UTC in hours (e.g. -5.0 for US Eastern Standard).
    pub utc_offset_hours: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl ChartInput {
    /// Check every field's domain. Run before any computation.
    pub fn validate(&self) -> Result<(), ChartError> {
        check_year(self.year)?;
        check_range("month", self.month as f64, 1.0, 12.0, "1..=12")?;
        let dim = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > dim {
            return Err(ChartError::OutOfRange {
                field: "day",
                value: self.day as f64,
                expected: "a day of the given month",
            });
        }
        check_range("hour", self.hour as f64, 0.0, 23.0, "0..=23")?;
        check_range("minute", self.minute as f64, 0.0, 59.0, "0..=59")?;
        check_range(
            "utc_offset_hours",
            self.utc_offset_hours,
            -14.0,
            14.0,
            "-14..=14",
        )?;
        check_range("latitude", self.latitude_deg, -90.0, 90.0, "-90..=90")?;
        check_range("longitude", self.longitude_deg, -180.0, 180.0, "-180..=180")?;
        Ok(())
    }

    /// Universal Time of day in hours: `hour − offset + minute/60`.
    ///
    /// May fall outside [0, 24); the day fraction carries into the JD.
    pub fn ut_hours(&self) -> f64 {
        self.hour as f64 - self.utc_offset_hours + self.minute as f64 / 60.0
    }

    /// UT Julian Date of the birth instant.
    pub fn jd_ut(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.ut_hours() / 24.0)
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg)
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<(), ChartError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ChartError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

/// A body's place in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub position: SignPosition,
    /// 1-based whole-sign house.
    pub house: u8,
    /// Degrees per day; negative when retrograde.
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
}

/// An aspect between two bodies of the same chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAspect {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect: AspectMatch,
}

/// A complete whole-sign natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub input: ChartInput,
    pub jd_ut: f64,
    pub utc: UtcTime,
    pub lst_deg: f64,
    pub ascendant: SignPosition,
    pub midheaven: SignPosition,
    pub houses: Vec<House>,
    pub placements: Vec<BodyPlacement>,
    pub aspects: Vec<ChartAspect>,
}

impl NatalChart {
    pub fn placement(&self, body: Body) -> Option<&BodyPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }
}

/// Build a natal chart for `bodies`, in the given order.
///
/// Aspects are searched over every unordered pair, earlier body first.
pub fn build_natal_chart<P: PositionProvider>(
    provider: &P,
    input: &ChartInput,
    bodies: &[Body],
) -> Result<NatalChart, ChartError> {
    input.validate()?;
    let jd = input.jd_ut();
    let angles = chart_angles(jd, &input.location())?;
    let asc = angles.ascendant.longitude_deg;

    let placements: Vec<BodyPlacement> = bodies
        .iter()
        .map(|&body| {
            let lon = provider.longitude(body, jd);
            let speed = provider.speed(body, jd);
            BodyPlacement {
                body,
                position: sign_of(lon),
                house: house_of(lon, asc),
                speed_deg_per_day: speed,
                retrograde: speed < 0.0,
            }
        })
        .collect();

    let mut aspects = Vec::new();
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            if let Some(aspect) = find_aspect(a.position.longitude_deg, b.position.longitude_deg) {
                aspects.push(ChartAspect {
                    body_a: a.body,
                    body_b: b.body,
                    aspect,
                });
            }
        }
    }

    Ok(NatalChart {
        input: *input,
        jd_ut: jd,
        utc: UtcTime::from_jd(jd),
        lst_deg: angles.lst_deg,
        ascendant: angles.ascendant,
        midheaven: angles.midheaven,
        houses: whole_sign_houses(asc),
        placements,
        aspects,
    })
}
