//! Synastry: cross-aspects and house overlays between two charts.

use orrery_core::Body;
use serde::{Deserialize, Serialize};

use crate::aspect::{AspectKind, AspectMatch, AspectNature, find_aspect};
use crate::houses::house_of;
use crate::natal::NatalChart;

/// Aspect between a body of chart A and a body of chart B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossAspect {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect: AspectMatch,
}

/// One body of a chart placed into the other chart's houses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseOverlay {
    pub body: Body,
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynastryResult {
    pub cross_aspects: Vec<CrossAspect>,
    /// A's bodies in B's houses.
    pub a_in_b_houses: Vec<HouseOverlay>,
    /// B's bodies in A's houses.
    pub b_in_a_houses: Vec<HouseOverlay>,
    pub harmonious_count: usize,
    pub challenging_count: usize,
    pub conjunction_count: usize,
    /// `round((harmonious + 0.5·conjunctions) / total × 100)`, 0 without aspects.
    pub compatibility: u32,
}

/// Compare two charts body by body.
pub fn compare_charts(a: &NatalChart, b: &NatalChart) -> SynastryResult {
    let mut cross_aspects = Vec::new();
    for pa in &a.placements {
        for pb in &b.placements {
            if let Some(aspect) = find_aspect(pa.position.longitude_deg, pb.position.longitude_deg)
            {
                cross_aspects.push(CrossAspect {
                    body_a: pa.body,
                    body_b: pb.body,
                    aspect,
                });
            }
        }
    }

    let (mut harmonious, mut challenging, mut conjunctions) = (0, 0, 0);
    for c in &cross_aspects {
        match c.aspect.kind.nature() {
            AspectNature::Harmonious => harmonious += 1,
            AspectNature::Challenging => challenging += 1,
            AspectNature::Major => {}
        }
        if c.aspect.kind == AspectKind::Conjunction {
            conjunctions += 1;
        }
    }

    SynastryResult {
        a_in_b_houses: overlay(a, b),
        b_in_a_houses: overlay(b, a),
        compatibility: compatibility_index(harmonious, conjunctions, cross_aspects.len()),
        harmonious_count: harmonious,
        challenging_count: challenging,
        conjunction_count: conjunctions,
        cross_aspects,
    }
}

fn overlay(guest: &NatalChart, host: &NatalChart) -> Vec<HouseOverlay> {
    let asc = host.ascendant.longitude_deg;
    guest
        .placements
        .iter()
        .map(|p| HouseOverlay {
            body: p.body,
            house: house_of(p.position.longitude_deg, asc),
        })
        .collect()
}

/// Compatibility percentage, rounding half away from zero.
pub fn compatibility_index(harmonious: usize, conjunctions: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = (harmonious as f64 + 0.5 * conjunctions as f64) / total as f64 * 100.0;
    score.round() as u32
}
