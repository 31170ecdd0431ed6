//! Whole-sign houses.
//!
//! House 1 is the whole sign holding the Ascendant; each following house
//! is the next sign in zodiac order.

use orrery_core::{ZodiacSign, sign_index};
use serde::{Deserialize, Serialize};

/// Thematic meaning of each house, house 1 first.
pub const HOUSE_MEANINGS: [&str; 12] = [
    "Self and identity",
    "Money and possessions",
    "Communication and siblings",
    "Home and family",
    "Creativity and romance",
    "Health and daily work",
    "Partnerships and marriage",
    "Transformation and shared resources",
    "Philosophy and long journeys",
    "Career and public image",
    "Friends and community",
    "Spirituality and the hidden",
];

/// One whole-sign house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1-based house number.
    pub number: u8,
    pub sign: ZodiacSign,
    /// Starting longitude of the house's sign.
    pub cusp_longitude_deg: f64,
    pub meaning: String,
}

/// The 12 whole-sign houses for an Ascendant longitude.
pub fn whole_sign_houses(ascendant_deg: f64) -> Vec<House> {
    let asc = sign_index(ascendant_deg);
    HOUSE_MEANINGS
        .iter()
        .enumerate()
        .map(|(i, meaning)| {
            let sign = ZodiacSign::from_index(asc + i);
            House {
                number: i as u8 + 1,
                sign,
                cusp_longitude_deg: sign.start_deg(),
                meaning: (*meaning).to_string(),
            }
        })
        .collect()
}

/// 1-based house holding `longitude_deg` for a given Ascendant.
pub fn house_of(longitude_deg: f64, ascendant_deg: f64) -> u8 {
    let body = sign_index(longitude_deg);
    let asc = sign_index(ascendant_deg);
    ((body + 12 - asc) % 12) as u8 + 1
}
