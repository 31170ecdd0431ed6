//! Convenience facade for the orrery engine.
//!
//! Provides a process-wide engine and free functions for charts, synastry,
//! year scans and moon phases, so callers need neither a provider nor a
//! config handle.
//!
//! # Quick start
//!
//! ```rust
//! use orrery_rs::*;
//!
//! let input = ChartInput {
//!     year: 1990,
//!     month: 6,
//!     day: 15,
//!     hour: 14,
//!     minute: 30,
//!     utc_offset_hours: -5.0,
//!     latitude_deg: 40.7128,
//!     longitude_deg: -74.006,
//! };
//! let chart = compute_natal_chart(&input).unwrap();
//! println!("Ascendant: {}", chart.ascendant.sign);
//!
//! let transits = scan_year_events(2025).unwrap();
//! println!("{} events in 2025", transits.len());
//! ```

pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;
pub mod request;

pub use convenience::{
    compute_natal_chart, compute_natal_chart_from_request, compute_synastry, current_moon_phase,
    curated_year, daily_positions, retrograde_periods, scan_year_events, solve_moon_phases,
};
pub use engine::Orrery;
pub use error::OrreryError;
pub use global::{init, init_from_env, is_initialized};
pub use request::ChartRequest;

// Re-export the value types so callers need only this crate.
pub use orrery_chart::{
    AspectKind, AspectMatch, AspectNature, BodyPlacement, ChartAspect, ChartError, ChartInput,
    CrossAspect, House, HouseOverlay, NatalChart, SynastryResult,
};
pub use orrery_config::{ConfigError, OrreryConfig};
pub use orrery_core::{Body, MeanElementModel, PositionProvider, SignPosition, ZodiacSign};
pub use orrery_search::{
    AspectEvent, CardinalPhase, CuratedEvent, CuratedKind, CuratedYear, DailyBodyPosition, DailyPositions, IngressEvent, LunarPhase,
    Importance, MoonPhaseEvent, MoonPhaseState, RetrogradePeriod, SearchError, StationEvent, StationKind,
    StationPoint, TransitEvent, YearTransits,
};
pub use orrery_time::{
    MAX_YEAR, MIN_YEAR, TimeError, UtcTime, datetime_to_jd, jd_to_datetime, try_jd_to_datetime,
};
