//! Natal chart settings.

use std::collections::BTreeSet;

use orrery_core::{ALL_BODIES, Body};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_bodies() -> Vec<Body> {
    ALL_BODIES.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Bodies placed in natal charts, in the order aspects are paired.
    #[serde(default = "default_bodies")]
    pub bodies: Vec<Body>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::invalid("chart.bodies", "must not be empty"));
        }
        let mut seen = BTreeSet::new();
        match self.bodies.iter().find(|&&b| !seen.insert(b)) {
            Some(b) => Err(ConfigError::invalid("chart.bodies", format!("{b} listed twice"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_track_all_bodies() {
        assert_eq!(ChartConfig::default().bodies.len(), 10);
        assert!(ChartConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_duplicates() {
        let c = ChartConfig {
            bodies: vec![Body::Sun, Body::Moon, Body::Sun],
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("Sun listed twice"), "{err}");
    }
}
