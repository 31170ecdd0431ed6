//! Curated yearly digest for a general audience.
//!
//! Keeps the cardinal moon phases and retrograde periods of a year, plus
//! the slow-planet ingresses and rare conjunctions listed in the tables
//! below, each tagged with how often it recurs and what it is read as.

use chrono::{DateTime, Utc};
use orrery_chart::AspectKind;
use orrery_core::{Body, PositionProvider, ZodiacSign};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aspect_scan::scan_pair_aspects;
use crate::error::SearchError;
use crate::ingress::scan_ingresses;
use crate::lunar_phase::solve_moon_phases;
use crate::lunar_phase_types::{MoonPhaseEvent, PhaseConfig};
use crate::search_util::year_window;
use crate::stationary::retrograde_periods;
use crate::transit_types::{RetrogradePeriod, ScanConfig, TransitEvent};

/// How widely an event is felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Moderate,
    Major,
    Generational,
}

/// Recurrence and interpretation attached to a curated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMeta {
    pub frequency: &'static str,
    pub importance: Importance,
    pub themes: &'static [&'static str],
}

/// Bodies whose sign changes make the digest.
pub const INGRESS_METADATA: [(Body, EventMeta); 4] = [
    (
        Body::Neptune,
        EventMeta {
            frequency: "Every ~14 years per sign",
            importance: Importance::Generational,
            themes: &[
                "collective dreams",
                "spirituality",
                "illusion",
                "compassion",
                "artistic movements",
            ],
        },
    ),
    (
        Body::Uranus,
        EventMeta {
            frequency: "Every ~7 years per sign",
            importance: Importance::Generational,
            themes: &["innovation", "revolution", "technology", "awakening", "disruption"],
        },
    ),
    (
        Body::Saturn,
        EventMeta {
            frequency: "Every ~2.5 years per sign",
            importance: Importance::Major,
            themes: &["responsibility", "structure", "lessons", "maturity", "discipline"],
        },
    ),
    (
        Body::Jupiter,
        EventMeta {
            frequency: "Every ~1 year per sign",
            importance: Importance::Major,
            themes: &["expansion", "growth", "luck", "wisdom", "opportunity"],
        },
    ),
];

/// Conjunction pairs that make the digest, in reporting order.
pub const RARE_CONJUNCTIONS: [((Body, Body), EventMeta); 12] = [
    (
        (Body::Saturn, Body::Neptune),
        EventMeta {
            frequency: "Every ~36 years",
            importance: Importance::Generational,
            themes: &[
                "dissolution of structures",
                "spiritual awakening",
                "collective dreams",
                "institutional reform",
            ],
        },
    ),
    (
        (Body::Saturn, Body::Uranus),
        EventMeta {
            frequency: "Every ~45 years",
            importance: Importance::Generational,
            themes: &[
                "revolution vs tradition",
                "systemic change",
                "technological disruption",
                "liberation",
            ],
        },
    ),
    (
        (Body::Saturn, Body::Pluto),
        EventMeta {
            frequency: "Every ~33-38 years",
            importance: Importance::Generational,
            themes: &[
                "power structures",
                "transformation",
                "endings and beginnings",
                "karmic reckoning",
            ],
        },
    ),
    (
        (Body::Jupiter, Body::Saturn),
        EventMeta {
            frequency: "Every ~20 years",
            importance: Importance::Major,
            themes: &["new era", "social cycles", "expansion meets contraction", "economic shifts"],
        },
    ),
    (
        (Body::Jupiter, Body::Uranus),
        EventMeta {
            frequency: "Every ~14 years",
            importance: Importance::Major,
            themes: &[
                "breakthrough",
                "innovation",
                "sudden expansion",
                "freedom",
                "technological leaps",
            ],
        },
    ),
    (
        (Body::Jupiter, Body::Neptune),
        EventMeta {
            frequency: "Every ~13 years",
            importance: Importance::Major,
            themes: &[
                "spiritual expansion",
                "idealism",
                "creativity",
                "compassion",
                "dreams realized",
            ],
        },
    ),
    (
        (Body::Jupiter, Body::Pluto),
        EventMeta {
            frequency: "Every ~13 years",
            importance: Importance::Major,
            themes: &["power expansion", "transformation", "wealth cycles", "truth revealed"],
        },
    ),
    (
        (Body::Uranus, Body::Neptune),
        EventMeta {
            frequency: "Every ~171 years",
            importance: Importance::Generational,
            themes: &["cultural renaissance", "consciousness shift", "collective awakening"],
        },
    ),
    (
        (Body::Uranus, Body::Pluto),
        EventMeta {
            frequency: "Every ~127 years",
            importance: Importance::Generational,
            themes: &["revolutionary transformation", "power to the people", "radical change"],
        },
    ),
    (
        (Body::Neptune, Body::Pluto),
        EventMeta {
            frequency: "Every ~492 years",
            importance: Importance::Generational,
            themes: &["civilization shifts", "spiritual transformation", "collective unconscious"],
        },
    ),
    (
        (Body::Venus, Body::Jupiter),
        EventMeta {
            frequency: "Every ~1 year",
            importance: Importance::Moderate,
            themes: &["love", "abundance", "beauty", "harmony", "good fortune"],
        },
    ),
    (
        (Body::Mars, Body::Neptune),
        EventMeta {
            frequency: "Every ~2 years",
            importance: Importance::Moderate,
            themes: &["inspired action", "spiritual warrior", "imagination", "creative drive"],
        },
    ),
];

pub fn ingress_metadata(body: Body) -> Option<&'static EventMeta> {
    INGRESS_METADATA
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, meta)| meta)
}

/// Metadata of a rare conjunction pair, in either order.
pub fn conjunction_metadata(a: Body, b: Body) -> Option<&'static EventMeta> {
    RARE_CONJUNCTIONS
        .iter()
        .find(|((x, y), _)| (*x, *y) == (a, b) || (*x, *y) == (b, a))
        .map(|(_, meta)| meta)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuratedKind {
    PlanetaryIngress,
    Conjunction,
}

/// One headline event of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedEvent {
    #[serde(rename = "type")]
    pub kind: CuratedKind,
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub bodies: Vec<Body>,
    pub from_sign: Option<ZodiacSign>,
    pub to_sign: Option<ZodiacSign>,
    /// Sign of the (first) body at the event.
    pub sign: ZodiacSign,
    pub degree: f64,
    pub title: String,
    pub description: String,
    pub frequency: String,
    pub importance: Importance,
    pub themes: Vec<String>,
}

impl CuratedEvent {
    fn new(
        kind: CuratedKind,
        jd: f64,
        date: DateTime<Utc>,
        bodies: Vec<Body>,
        meta: &EventMeta,
    ) -> Self {
        Self {
            kind,
            jd,
            date,
            bodies,
            from_sign: None,
            to_sign: None,
            sign: ZodiacSign::Aries,
            degree: 0.0,
            title: String::new(),
            description: String::new(),
            frequency: meta.frequency.to_owned(),
            importance: meta.importance,
            themes: meta.themes.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// The year's digest, each list ordered by instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedYear {
    pub year: i32,
    pub moon_phases: Vec<MoonPhaseEvent>,
    pub retrogrades: Vec<RetrogradePeriod>,
    pub major_events: Vec<CuratedEvent>,
}

impl CuratedYear {
    /// Major events at or above `level`.
    pub fn events_at_least(&self, level: Importance) -> impl Iterator<Item = &CuratedEvent> {
        self.major_events.iter().filter(move |e| e.importance >= level)
    }
}

/// Ingresses of the tabled slow planets and runs of the rare conjunction
/// pairs, merged by instant.
///
/// Conjunction pairs are sampled every `config.outer_cadence_days`; a run
/// still inside its orb at the end of the range is dropped.
pub fn curated_major_events<P: PositionProvider>(
    provider: &P,
    config: &ScanConfig,
    jd_start: f64,
    jd_end: f64,
) -> Vec<CuratedEvent> {
    let mut events = Vec::new();

    for (body, meta) in &INGRESS_METADATA {
        for event in scan_ingresses(provider, *body, jd_start, jd_end) {
            let TransitEvent::Ingress(ingress) = event else {
                continue;
            };
            let mut curated = CuratedEvent::new(
                CuratedKind::PlanetaryIngress,
                ingress.jd,
                ingress.date,
                vec![ingress.body],
                meta,
            );
            let theme = meta.themes.first().copied().unwrap_or("transformation");
            curated.from_sign = Some(ingress.from_sign);
            curated.to_sign = Some(ingress.to_sign);
            curated.sign = ingress.to_sign;
            curated.degree = ingress.longitude_deg - ingress.to_sign.start_deg();
            curated.title = format!("{} enters {}", ingress.body, ingress.to_sign);
            curated.description = format!(
                "{} moves into {}, beginning a new phase of {theme}",
                ingress.body, ingress.to_sign
            );
            events.push(curated);
        }
    }

    for ((a, b), meta) in &RARE_CONJUNCTIONS {
        let runs = scan_pair_aspects(
            provider,
            (*a, *b),
            &[AspectKind::Conjunction],
            None,
            config.outer_cadence_days,
            jd_start,
            jd_end,
        );
        for event in runs {
            let TransitEvent::Aspect(aspect) = event else {
                continue;
            };
            let mut curated = CuratedEvent::new(
                CuratedKind::Conjunction,
                aspect.jd,
                aspect.date,
                vec![aspect.body_a, aspect.body_b],
                meta,
            );
            curated.sign = aspect.position_a.sign;
            curated.degree = aspect.position_a.degree_in_sign;
            curated.title = format!("{}-{} Conjunction", aspect.body_a, aspect.body_b);
            curated.description = format!(
                "{} and {} align in {}, marking a significant cosmic event",
                aspect.body_a, aspect.body_b, aspect.position_a.sign
            );
            events.push(curated);
        }
    }

    events.sort_by(|x, y| x.jd.total_cmp(&y.jd));
    events
}

/// Cardinal moon phases, retrograde periods and headline events of one
/// calendar year. Eclipses are not covered.
pub fn curated_year<P: PositionProvider>(
    provider: &P,
    year: i32,
    scan: &ScanConfig,
    phase: &PhaseConfig,
) -> Result<CuratedYear, SearchError> {
    let (start, end) = year_window(year)?;
    let moon_phases = solve_moon_phases(provider, year, phase)?;
    let retrogrades = retrograde_periods(provider, &scan.retrograde_bodies, start, end);
    let major_events = curated_major_events(provider, scan, start, end);
    debug!(
        year,
        phases = moon_phases.len(),
        retrogrades = retrogrades.len(),
        major = major_events.len(),
        "curated year assembled"
    );
    Ok(CuratedYear {
        year,
        moon_phases,
        retrogrades,
        major_events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{MeanElementModel, normalize_360};

    const S: f64 = 2_460_676.5;

    /// Venus passes a fixed Jupiter at 100° on day 20. Neptune crosses 0°
    /// Aries on day 12, first sampled there on day 20.
    struct Flyby;

    impl PositionProvider for Flyby {
        fn longitude(&self, body: Body, jd: f64) -> f64 {
            let d = jd - S;
            match body {
                Body::Venus => 80.0 + d,
                Body::Jupiter => 100.0,
                Body::Neptune => normalize_360(358.8 + 0.1 * d),
                Body::Uranus => 200.0,
                Body::Saturn => 250.0,
                Body::Mars => 300.0,
                _ => 150.0,
            }
        }
    }

    #[test]
    fn lookups_are_order_insensitive() {
        let meta = conjunction_metadata(Body::Neptune, Body::Saturn).unwrap();
        assert_eq!(meta.frequency, "Every ~36 years");
        assert_eq!(meta.importance, Importance::Generational);
        let venus = conjunction_metadata(Body::Jupiter, Body::Venus).unwrap();
        assert_eq!(venus.importance, Importance::Moderate);
        assert!(conjunction_metadata(Body::Sun, Body::Moon).is_none());
        assert_eq!(ingress_metadata(Body::Jupiter).unwrap().themes[0], "expansion");
        assert!(ingress_metadata(Body::Mars).is_none());
    }

    #[test]
    fn flyby_yields_ingress_and_conjunction() {
        let events = curated_major_events(&Flyby, &ScanConfig::default(), S, S + 60.0);
        let kinds: Vec<CuratedKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![CuratedKind::PlanetaryIngress, CuratedKind::Conjunction]);

        let ingress = &events[0];
        assert_eq!(ingress.bodies, vec![Body::Neptune]);
        assert_eq!(ingress.to_sign, Some(ZodiacSign::Aries));
        assert_eq!(ingress.title, "Neptune enters Aries");
        assert!(ingress.description.ends_with("new phase of collective dreams"));
        assert!((ingress.jd - (S + 20.0)).abs() < 1e-9, "{}", ingress.jd);

        let conj = &events[1];
        assert_eq!(conj.bodies, vec![Body::Venus, Body::Jupiter]);
        assert!((conj.jd - (S + 20.0)).abs() < 1e-9);
        assert_eq!(conj.title, "Venus-Jupiter Conjunction");
        assert_eq!(conj.sign, ZodiacSign::Cancer);
        assert_eq!(conj.importance, Importance::Moderate);
        assert_eq!(conj.themes.len(), 5);
    }

    #[test]
    fn serializes_with_type_tag() {
        let events = curated_major_events(&Flyby, &ScanConfig::default(), S, S + 60.0);
        let json = serde_json::to_value(&events[1]).unwrap();
        assert_eq!(json["type"], "conjunction");
        assert_eq!(json["importance"], "moderate");
        assert_eq!(json["from_sign"], serde_json::Value::Null);
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let err = curated_year(
            &MeanElementModel,
            10_000,
            &ScanConfig::default(),
            &PhaseConfig::default(),
        );
        assert!(matches!(err, Err(SearchError::Time(_))));
    }
}
