//! Layered configuration for the orrery engine, loaded with figment.
//!
//! Sources in priority order, highest wins:
//! 1. Environment variables (`ORRERY_*` prefix, `__` between sections)
//! 2. Project-level `.orrery/config.toml`
//! 3. User-level `<config dir>/orrery/config.toml`
//! 4. Built-in defaults
//!
//! `ORRERY_SCAN__SUN_CORRIDOR_DEG=2.5` maps to `scan.sun_corridor_deg`,
//! `ORRERY_CHART__BODIES='["Sun","Moon"]'` to `chart.bodies`.
//!
//! ```no_run
//! use orrery_config::OrreryConfig;
//!
//! let config = OrreryConfig::load().expect("config");
//! let scan = config.scan.to_scan_config();
//! ```

mod chart;
mod error;
mod scan;

pub use chart::ChartConfig;
pub use error::ConfigError;
pub use scan::{PhaseSettings, ScanSettings};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ORRERY_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrreryConfig {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub phase: PhaseSettings,
}

impl OrreryConfig {
    /// Load and validate configuration from every source.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from a caller-built figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider chain used by [`load`](Self::load).
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global));
        }

        let local = PathBuf::from(".orrery/config.toml");
        if local.exists() {
            figment = figment.merge(Toml::file(local));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("orrery").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart.validate()?;
        self.scan.validate()?;
        self.phase.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = OrreryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.phase.max_iterations, 50);
        assert_eq!(config.scan.sun_corridor_deg, 3.0);
    }

    #[test]
    fn figment_extracts_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = OrreryConfig::load().expect("defaults load");
            assert_eq!(config, OrreryConfig::default());
            Ok(())
        });
    }
}
