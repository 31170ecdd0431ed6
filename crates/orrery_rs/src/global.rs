//! Process-wide engine.
//!
//! The first call to any convenience function creates the engine from
//! defaults unless [`init`] or [`init_from_env`] ran first.

use std::sync::OnceLock;

use orrery_config::OrreryConfig;
use tracing::debug;

use crate::engine::Orrery;
use crate::error::OrreryError;

static ENGINE: OnceLock<Orrery> = OnceLock::new();

/// Install the global engine with explicit settings.
///
/// Fails with [`OrreryError::AlreadyInitialized`] once the engine exists,
/// including after a convenience call created the default one.
pub fn init(config: OrreryConfig) -> Result<(), OrreryError> {
    let engine = Orrery::new(config)?;
    ENGINE
        .set(engine)
        .map_err(|_| OrreryError::AlreadyInitialized)?;
    debug!("global engine initialized");
    Ok(())
}

/// Install the global engine from config files and `ORRERY_*` variables.
pub fn init_from_env() -> Result<(), OrreryError> {
    init(OrreryConfig::load()?)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> &'static Orrery {
    ENGINE.get_or_init(Orrery::default)
}
