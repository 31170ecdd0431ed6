//! Chart construction on top of the orbital model.
//!
//! This crate provides:
//! - Ascendant/Midheaven geometry from sidereal time ([`chart_angles`])
//! - Whole-sign houses ([`whole_sign_houses`], [`house_of`])
//! - The five major aspects and the first-match [`find_aspect`]
//! - Natal charts ([`build_natal_chart`]) and synastry ([`compare_charts`])

pub mod aspect;
pub mod error;
pub mod geometry;
pub mod houses;
pub mod natal;
pub mod synastry;

pub use aspect::{
    ALL_ASPECT_KINDS, ASPECTS, AspectDefinition, AspectKind, AspectMatch, AspectNature,
    EXACT_THRESHOLD_DEG, HARD_ASPECTS, find_aspect, find_aspect_among,
};
pub use error::ChartError;
pub use geometry::{
    ChartAngles, GeoLocation, OBLIQUITY_DEG, ascendant_deg, chart_angles, midheaven_deg,
};
pub use houses::{HOUSE_MEANINGS, House, house_of, whole_sign_houses};
pub use natal::{BodyPlacement, ChartAspect, ChartInput, NatalChart, build_natal_chart};
pub use synastry::{
    CrossAspect, HouseOverlay, SynastryResult, compare_charts, compatibility_index,
};
