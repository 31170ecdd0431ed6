//! Types for lunar phase search and classification.

use chrono::{DateTime, Utc};
use orrery_core::SignPosition;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// One of the four exact Sun–Moon elongation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardinalPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

/// Cardinal phases in target-angle order.
pub const ALL_CARDINAL_PHASES: [CardinalPhase; 4] = [
    CardinalPhase::New,
    CardinalPhase::FirstQuarter,
    CardinalPhase::Full,
    CardinalPhase::LastQuarter,
];

impl CardinalPhase {
    /// Moon − Sun elongation at this phase, degrees.
    pub const fn target_deg(self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::FirstQuarter => 90.0,
            Self::Full => 180.0,
            Self::LastQuarter => 270.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::Full => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }
}

impl std::fmt::Display for CardinalPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Eight-way phase bucket, each 45° wide and centred on a multiple of 45°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Buckets in elongation order starting at 0°.
pub const ALL_LUNAR_PHASES: [LunarPhase; 8] = [
    LunarPhase::New,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::Full,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    /// Bucket index (0 = New, 4 = Full).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A refined cardinal phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseEvent {
    pub phase: CardinalPhase,
    /// Refined instant (JD UT).
    pub jd: f64,
    pub date: DateTime<Utc>,
    pub sun: SignPosition,
    pub moon: SignPosition,
    /// Moon − Sun elongation at `jd`, degrees in [0, 360).
    pub elongation_deg: f64,
    /// Distance from the target angle, across the 0°/360° seam for new moons.
    pub exactness_deg: f64,
}

/// Instantaneous phase state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseState {
    pub jd: f64,
    pub phase: LunarPhase,
    pub elongation_deg: f64,
    /// Illuminated fraction of the disc, 0 (new) to 1 (full).
    pub illumination: f64,
    /// Days since new moon, from the mean synodic month.
    pub age_days: f64,
}

/// Sampling and refinement settings for [`solve_moon_phases`](crate::solve_moon_phases).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Coarse elongation sampling step, days.
    pub step_days: f64,
    /// Bisection iteration cap.
    pub max_iterations: u32,
    /// Convergence tolerance on the elongation, degrees.
    pub tolerance_deg: f64,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            step_days: 0.5,
            max_iterations: 50,
            tolerance_deg: 0.01,
        }
    }
}

impl PhaseConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err(SearchError::InvalidConfig("step_days must be positive"));
        }
        // Quarter phases are ~7.4 days apart; a coarser step could skip one.
        if self.step_days > 7.0 {
            return Err(SearchError::InvalidConfig("step_days must not exceed 7 days"));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig("max_iterations must be at least 1"));
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err(SearchError::InvalidConfig("tolerance_deg must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_targets() {
        let targets: Vec<f64> = ALL_CARDINAL_PHASES.iter().map(|p| p.target_deg()).collect();
        assert_eq!(targets, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn lunar_phase_indices_follow_elongation() {
        for (i, p) in ALL_LUNAR_PHASES.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
        assert_eq!(LunarPhase::Full.name(), "Full Moon");
    }

    #[test]
    fn default_config_validates() {
        let c = PhaseConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.max_iterations, 50);
    }

    #[test]
    fn rejects_bad_config() {
        for c in [
            PhaseConfig { step_days: 0.0, ..PhaseConfig::default() },
            PhaseConfig { step_days: 10.0, ..PhaseConfig::default() },
            PhaseConfig { max_iterations: 0, ..PhaseConfig::default() },
            PhaseConfig { tolerance_deg: f64::NAN, ..PhaseConfig::default() },
        ] {
            assert!(c.validate().is_err(), "{c:?}");
        }
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&CardinalPhase::FirstQuarter).unwrap();
        assert_eq!(json, "\"first_quarter\"");
        let json = serde_json::to_string(&LunarPhase::WaningGibbous).unwrap();
        assert_eq!(json, "\"waning_gibbous\"");
    }
}
