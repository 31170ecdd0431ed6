//! Year-scan and moon-phase settings.

use orrery_core::{ALL_BODIES, Body, OUTER_BODIES, RETROGRADE_BODIES};
use orrery_search::{PhaseConfig, ScanConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_ingress_bodies() -> Vec<Body> {
    ALL_BODIES.to_vec()
}

fn default_retrograde_bodies() -> Vec<Body> {
    RETROGRADE_BODIES.to_vec()
}

fn default_outer_bodies() -> Vec<Body> {
    OUTER_BODIES.to_vec()
}

const fn default_sun_corridor() -> f64 {
    3.0
}

const fn default_outer_cadence() -> f64 {
    1.0
}

const fn default_sun_cadence() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanSettings {
    #[serde(default = "default_ingress_bodies")]
    pub ingress_bodies: Vec<Body>,

    /// Must not include the Sun or Moon.
    #[serde(default = "default_retrograde_bodies")]
    pub retrograde_bodies: Vec<Body>,

    #[serde(default = "default_outer_bodies")]
    pub outer_bodies: Vec<Body>,

    /// Orb of the Sun's hard-aspect corridor, degrees.
    #[serde(default = "default_sun_corridor")]
    pub sun_corridor_deg: f64,

    #[serde(default = "default_outer_cadence")]
    pub outer_cadence_days: f64,

    #[serde(default = "default_sun_cadence")]
    pub sun_cadence_days: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            ingress_bodies: default_ingress_bodies(),
            retrograde_bodies: default_retrograde_bodies(),
            outer_bodies: default_outer_bodies(),
            sun_corridor_deg: default_sun_corridor(),
            outer_cadence_days: default_outer_cadence(),
            sun_cadence_days: default_sun_cadence(),
        }
    }
}

impl ScanSettings {
    pub fn to_scan_config(&self) -> ScanConfig {
        ScanConfig {
            ingress_bodies: self.ingress_bodies.clone(),
            retrograde_bodies: self.retrograde_bodies.clone(),
            outer_bodies: self.outer_bodies.clone(),
            sun_corridor_deg: self.sun_corridor_deg,
            outer_cadence_days: self.outer_cadence_days,
            sun_cadence_days: self.sun_cadence_days,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_scan_config()
            .validate()
            .map_err(|e| ConfigError::invalid("scan", e.to_string()))
    }
}

const fn default_step() -> f64 {
    0.5
}

const fn default_max_iterations() -> u32 {
    50
}

const fn default_tolerance() -> f64 {
    0.01
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PhaseSettings {
    /// Elongation sampling step, days.
    #[serde(default = "default_step")]
    pub step_days: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Bisection tolerance, degrees.
    #[serde(default = "default_tolerance")]
    pub tolerance_deg: f64,
}

impl Default for PhaseSettings {
    fn default() -> Self {
        Self {
            step_days: default_step(),
            max_iterations: default_max_iterations(),
            tolerance_deg: default_tolerance(),
        }
    }
}

impl PhaseSettings {
    pub const fn to_phase_config(&self) -> PhaseConfig {
        PhaseConfig {
            step_days: self.step_days,
            max_iterations: self.max_iterations,
            tolerance_deg: self.tolerance_deg,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_phase_config()
            .validate()
            .map_err(|e| ConfigError::invalid("phase", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_defaults_match_engine_defaults() {
        assert_eq!(ScanSettings::default().to_scan_config(), ScanConfig::default());
    }

    #[test]
    fn phase_defaults_match_engine_defaults() {
        assert_eq!(PhaseSettings::default().to_phase_config(), PhaseConfig::default());
    }

    #[test]
    fn luminary_station_is_rejected() {
        let s = ScanSettings {
            retrograde_bodies: vec![Body::Sun],
            ..ScanSettings::default()
        };
        let err = s.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "scan", .. }));
    }

    #[test]
    fn repeated_outer_body_is_rejected() {
        let s = ScanSettings {
            outer_bodies: vec![Body::Uranus, Body::Neptune, Body::Uranus],
            ..ScanSettings::default()
        };
        match s.validate() {
            Err(ConfigError::InvalidValue { field, reason }) => {
                assert_eq!(field, "scan");
                assert!(reason.contains("outer_bodies lists a body twice"), "{reason}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_tolerance_is_rejected() {
        let p = PhaseSettings {
            tolerance_deg: 0.0,
            ..PhaseSettings::default()
        };
        assert!(p.validate().is_err());
    }
}
