//! The tracked celestial bodies and their mean orbital elements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bodies known to the engine, in canonical order.
///
/// The Sun and Moon are geocentric; the planets orbit the Sun and are
/// projected onto Earth's sky by the orbital model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in canonical order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Bodies that can turn retrograde (everything but the luminaries).
pub const RETROGRADE_BODIES: [Body; 8] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Slow outer planets, used for outer-pair aspect scanning.
pub const OUTER_BODIES: [Body; 5] = [
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// Mean orbital elements of one body, referred to J2000.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyElements {
    /// Mean longitude at J2000.0, degrees.
    pub epoch_longitude_deg: f64,
    /// Mean daily motion, degrees/day. Always positive.
    pub daily_motion_deg: f64,
    /// Heliocentric orbit radius in AU; 0 for the geocentric Sun and Moon.
    pub semi_major_axis_au: f64,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index in canonical order (Sun=0 .. Pluto=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    pub const fn elements(self) -> BodyElements {
        let (epoch_longitude_deg, daily_motion_deg, semi_major_axis_au) = match self {
            Self::Sun => (280.466_46, 0.985_647_36, 0.0),
            Self::Moon => (218.316_5, 13.176_396_48, 0.0),
            Self::Mercury => (252.250_84, 4.092_334_45, 0.387_098),
            Self::Venus => (181.979_73, 1.602_130_34, 0.723_332),
            Self::Mars => (355.453_32, 0.524_020_68, 1.523_679),
            Self::Jupiter => (34.404_38, 0.083_085_29, 5.202_603),
            Self::Saturn => (49.944_32, 0.033_444_14, 9.554_909),
            Self::Uranus => (313.232_18, 0.011_728_34, 19.218_446),
            Self::Neptune => (304.880_03, 0.005_981_03, 30.110_387),
            Self::Pluto => (238.928_81, 0.003_976_71, 39.482_117),
        };
        BodyElements {
            epoch_longitude_deg,
            daily_motion_deg,
            semi_major_axis_au,
        }
    }

    /// True for bodies whose apparent motion can reverse.
    pub const fn can_retrograde(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon)
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
