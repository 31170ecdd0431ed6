//! Tropical zodiac signs and sign-relative positions.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }

    /// Longitude of the sign's first degree.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude resolved to its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    /// Normalized ecliptic longitude in [0, 360).
    pub longitude_deg: f64,
    pub sign: ZodiacSign,
    /// Degrees into the sign, rounded to 6 decimals, in [0, 30).
    pub degree_in_sign: f64,
}

/// Largest degree-in-sign representable at 6 decimals.
const MAX_DEGREE_IN_SIGN: f64 = 29.999_999;

/// Round to 6 decimal places.
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Sign index (0..=11) of a longitude.
pub fn sign_index(longitude_deg: f64) -> usize {
    let idx = (normalize_360(longitude_deg) / 30.0).floor() as usize;
    idx.min(11)
}

/// Resolve a longitude to its sign and degree within the sign.
pub fn sign_of(longitude_deg: f64) -> SignPosition {
    let lon = normalize_360(longitude_deg);
    let idx = sign_index(lon);
    let degree = round6(lon - idx as f64 * 30.0).min(MAX_DEGREE_IN_SIGN);
    SignPosition {
        longitude_deg: lon,
        sign: ALL_SIGNS[idx],
        degree_in_sign: degree,
    }
}
