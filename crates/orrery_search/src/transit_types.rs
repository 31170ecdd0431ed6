//! Types for year-scoped transit scanning.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use orrery_chart::AspectKind;
use orrery_core::{ALL_BODIES, Body, OUTER_BODIES, RETROGRADE_BODIES, SignPosition, ZodiacSign};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Direction change reported by the station scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationKind {
    /// Direct → retrograde.
    Start,
    /// Retrograde → direct.
    End,
}

/// A body entering a new sign, dated at the first sample inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngressEvent {
    pub body: Body,
    pub from_sign: ZodiacSign,
    pub to_sign: ZodiacSign,
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub longitude_deg: f64,
}

/// A change in apparent direction, dated at the detecting sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationEvent {
    pub body: Body,
    pub kind: StationKind,
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub position: SignPosition,
    /// Days since the matching `Start`; `None` on starts and unpaired ends.
    pub paired_duration_days: Option<f64>,
}

/// The closest sample of one in-orb run between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectEvent {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect: AspectKind,
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub separation_deg: f64,
    pub exactness_deg: f64,
    pub position_a: SignPosition,
    pub position_b: SignPosition,
}

/// One detected transit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitEvent {
    Ingress(IngressEvent),
    RetrogradeStation(StationEvent),
    Aspect(AspectEvent),
}

impl TransitEvent {
    pub fn jd(&self) -> f64 {
        match self {
            Self::Ingress(e) => e.jd,
            Self::RetrogradeStation(e) => e.jd,
            Self::Aspect(e) => e.jd,
        }
    }

    /// The (first) body involved.
    pub fn body(&self) -> Body {
        match self {
            Self::Ingress(e) => e.body,
            Self::RetrogradeStation(e) => e.body,
            Self::Aspect(e) => e.body_a,
        }
    }
}

/// Stable sort by JD; equal instants keep scan order.
pub(crate) fn sort_by_jd(events: &mut [TransitEvent]) {
    events.sort_by(|a, b| a.jd().total_cmp(&b.jd()));
}

/// Every transit found in one calendar year, each list ordered by JD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTransits {
    pub year: i32,
    pub ingresses: Vec<TransitEvent>,
    pub retrogrades: Vec<TransitEvent>,
    pub aspects: Vec<TransitEvent>,
}

impl YearTransits {
    /// All three lists merged into one JD-ordered timeline.
    pub fn timeline(&self) -> Vec<TransitEvent> {
        let mut all: Vec<TransitEvent> = self
            .ingresses
            .iter()
            .chain(&self.retrogrades)
            .chain(&self.aspects)
            .copied()
            .collect();
        sort_by_jd(&mut all);
        all
    }

    pub fn len(&self) -> usize {
        self.ingresses.len() + self.retrogrades.len() + self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A station's instant and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationPoint {
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub position: SignPosition,
}

/// A complete retrograde loop: a `Start` station and the `End` that follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrogradePeriod {
    pub body: Body,
    pub station_retrograde: StationPoint,
    pub station_direct: StationPoint,
    pub duration_days: f64,
    /// Start of the pre-retrograde shadow, for bodies that have one.
    pub shadow_start: Option<DateTime<Utc>>,
    /// End of the post-retrograde shadow, for bodies that have one.
    pub shadow_end: Option<DateTime<Utc>>,
}

/// Which bodies and cadences the year scan uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Bodies checked for sign ingresses.
    pub ingress_bodies: Vec<Body>,
    /// Bodies checked for retrograde stations.
    pub retrograde_bodies: Vec<Body>,
    /// Slow bodies scanned pairwise for aspects, and the Sun's aspect targets.
    pub outer_bodies: Vec<Body>,
    /// Orb used for the Sun's hard-aspect corridor, degrees.
    pub sun_corridor_deg: f64,
    /// Sampling step for outer-pair aspects, days.
    pub outer_cadence_days: f64,
    /// Sampling step for Sun aspects, days.
    pub sun_cadence_days: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ingress_bodies: ALL_BODIES.to_vec(),
            retrograde_bodies: RETROGRADE_BODIES.to_vec(),
            outer_bodies: OUTER_BODIES.to_vec(),
            sun_corridor_deg: 3.0,
            outer_cadence_days: 1.0,
            sun_cadence_days: 0.5,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.sun_corridor_deg.is_finite() || self.sun_corridor_deg <= 0.0 {
            return Err(SearchError::InvalidConfig("sun_corridor_deg must be positive"));
        }
        if !self.outer_cadence_days.is_finite() || self.outer_cadence_days <= 0.0 {
            return Err(SearchError::InvalidConfig("outer_cadence_days must be positive"));
        }
        if !self.sun_cadence_days.is_finite() || self.sun_cadence_days <= 0.0 {
            return Err(SearchError::InvalidConfig("sun_cadence_days must be positive"));
        }
        if self.ingress_bodies.is_empty() {
            return Err(SearchError::InvalidConfig("ingress_bodies must not be empty"));
        }
        if self.retrograde_bodies.is_empty() {
            return Err(SearchError::InvalidConfig("retrograde_bodies must not be empty"));
        }
        if self.retrograde_bodies.iter().any(|b| !b.can_retrograde()) {
            return Err(SearchError::InvalidConfig(
                "Sun and Moon do not have retrograde stations",
            ));
        }
        if self.outer_bodies.is_empty() {
            return Err(SearchError::InvalidConfig("outer_bodies must not be empty"));
        }
        if has_duplicates(&self.ingress_bodies) {
            return Err(SearchError::InvalidConfig("ingress_bodies lists a body twice"));
        }
        if has_duplicates(&self.retrograde_bodies) {
            return Err(SearchError::InvalidConfig("retrograde_bodies lists a body twice"));
        }
        if has_duplicates(&self.outer_bodies) {
            return Err(SearchError::InvalidConfig("outer_bodies lists a body twice"));
        }
        Ok(())
    }
}

fn has_duplicates(bodies: &[Body]) -> bool {
    let mut seen = BTreeSet::new();
    !bodies.iter().all(|b| seen.insert(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = ScanConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.sun_corridor_deg, 3.0);
        assert_eq!(c.outer_bodies.len(), 5);
    }

    #[test]
    fn rejects_zero_cadence() {
        let c = ScanConfig {
            outer_cadence_days: 0.0,
            ..ScanConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_corridor() {
        let c = ScanConfig {
            sun_corridor_deg: -3.0,
            ..ScanConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_luminary_stations() {
        let c = ScanConfig {
            retrograde_bodies: vec![Body::Moon],
            ..ScanConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(SearchError::InvalidConfig(
                "Sun and Moon do not have retrograde stations"
            ))
        );
    }

    #[test]
    fn rejects_empty_lists() {
        let c = ScanConfig {
            ingress_bodies: vec![],
            ..ScanConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_repeated_bodies() {
        let c = ScanConfig {
            outer_bodies: vec![Body::Jupiter, Body::Saturn, Body::Jupiter],
            ..ScanConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(SearchError::InvalidConfig("outer_bodies lists a body twice"))
        );
        let c = ScanConfig {
            ingress_bodies: vec![Body::Sun, Body::Sun],
            ..ScanConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(SearchError::InvalidConfig("ingress_bodies lists a body twice"))
        );
    }

    #[test]
    fn station_kind_serde() {
        assert_eq!(serde_json::to_string(&StationKind::Start).unwrap(), "\"start\"");
    }
}
