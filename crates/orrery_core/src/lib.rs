//! Bodies, angles and the orbital model.
//!
//! This crate provides:
//! - [`Body`] and its fixed mean-element table
//! - Angle helpers ([`normalize_360`], [`shortest_separation`], [`unwrap_delta`])
//! - [`ZodiacSign`] and [`sign_of`]
//! - The [`PositionProvider`] trait and the built-in [`MeanElementModel`]

pub mod angle;
pub mod body;
pub mod model;
pub mod zodiac;

pub use angle::{normalize_360, normalize_to_pm180, shortest_separation, unwrap_delta};
pub use body::{ALL_BODIES, Body, BodyElements, OUTER_BODIES, RETROGRADE_BODIES};
pub use model::{
    MeanElementModel, PositionProvider, SPEED_STEP_DAYS, apparent_longitude, mean_longitude,
};
pub use zodiac::{ALL_SIGNS, SignPosition, ZodiacSign, round6, sign_index, sign_of};
