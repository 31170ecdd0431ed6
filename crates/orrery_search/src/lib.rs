//! Event search over a calendar year: sign ingresses, retrograde stations,
//! planetary aspects and lunar phases.
//!
//! This crate provides:
//! - Sampled ingress and station scanners with a fixed per-body step
//! - Aspect-run scanning for slow pairs and the Sun's hard-aspect corridor
//! - Cardinal moon phases refined by bisection, and the 8-way phase state
//! - Retrograde periods with shadow windows, and daily position tables
//! - A curated yearly digest of slow-planet ingresses and rare conjunctions
//!
//! Every scanner is generic over [`orrery_core::PositionProvider`] and
//! infallible; only configuration and calendar arguments (including years
//! outside [`orrery_time::MIN_YEAR`]..=[`orrery_time::MAX_YEAR`]) are
//! validated.

pub mod aspect_scan;
pub mod curated;
pub mod daily;
pub mod error;
pub mod ingress;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod sampling;
pub(crate) mod search_util;
pub mod stationary;
pub mod transit;
pub mod transit_types;

pub use aspect_scan::{scan_outer_aspects, scan_pair_aspects, scan_sun_aspects};
pub use curated::{
    CuratedEvent, CuratedKind, CuratedYear, EventMeta, INGRESS_METADATA, Importance,
    RARE_CONJUNCTIONS, conjunction_metadata, curated_major_events, curated_year, ingress_metadata,
};
pub use daily::{DailyBodyPosition, DailyPositions, daily_positions};
pub use error::SearchError;
pub use ingress::scan_ingresses;
pub use lunar_phase::{classify_phase, current_moon_phase, elongation_deg, solve_moon_phases};
pub use lunar_phase_types::{
    ALL_CARDINAL_PHASES, ALL_LUNAR_PHASES, CardinalPhase, LunarPhase, MoonPhaseEvent,
    MoonPhaseState, PhaseConfig, SYNODIC_MONTH_DAYS,
};
pub use sampling::sample_step_days;
pub use stationary::{retrograde_periods, scan_stations, scan_stations_for, shadow_days};
pub use transit::{scan_year_events, year_retrograde_periods};
pub use transit_types::{
    AspectEvent, IngressEvent, RetrogradePeriod, ScanConfig, StationEvent, StationKind,
    StationPoint, TransitEvent, YearTransits,
};
