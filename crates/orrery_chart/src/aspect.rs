//! Major aspects and the first-match aspect finder.

use std::fmt;

use orrery_core::shortest_separation;
use serde::{Deserialize, Serialize};

/// Deviation below which an aspect counts as exact, degrees.
pub const EXACT_THRESHOLD_DEG: f64 = 1.0;

/// The five major (Ptolemaic) aspects, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Interpretive tag of an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectNature {
    Major,
    Harmonious,
    Challenging,
}

/// Constant record for one aspect kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle_deg: f64,
    pub orb_deg: f64,
    pub symbol: &'static str,
    pub nature: AspectNature,
}

/// Aspect table in canonical order. Order is the tie-break.
pub const ASPECTS: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        angle_deg: 0.0,
        orb_deg: 8.0,
        symbol: "☌",
        nature: AspectNature::Major,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        angle_deg: 60.0,
        orb_deg: 4.0,
        symbol: "⚹",
        nature: AspectNature::Harmonious,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        angle_deg: 90.0,
        orb_deg: 6.0,
        symbol: "□",
        nature: AspectNature::Challenging,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        angle_deg: 120.0,
        orb_deg: 6.0,
        symbol: "△",
        nature: AspectNature::Harmonious,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        angle_deg: 180.0,
        orb_deg: 8.0,
        symbol: "☍",
        nature: AspectNature::Challenging,
    },
];

/// All aspect kinds in canonical order.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

/// Hard aspects, used for the Sun transit corridor.
pub const HARD_ASPECTS: [AspectKind; 3] = [
    AspectKind::Conjunction,
    AspectKind::Square,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn definition(self) -> AspectDefinition {
        ASPECTS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    pub const fn angle_deg(self) -> f64 {
        self.definition().angle_deg
    }

    pub const fn orb_deg(self) -> f64 {
        self.definition().orb_deg
    }

    pub const fn symbol(self) -> &'static str {
        self.definition().symbol
    }

    pub const fn nature(self) -> AspectNature {
        self.definition().nature
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect found between two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Shortest-arc separation of the two longitudes, [0, 180].
    pub separation_deg: f64,
    /// |separation − aspect angle|.
    pub exactness_deg: f64,
    pub is_exact: bool,
}

/// First aspect in canonical order whose orb holds the separation.
pub fn find_aspect(lon_a: f64, lon_b: f64) -> Option<AspectMatch> {
    find_aspect_among(&ALL_ASPECT_KINDS, lon_a, lon_b, None)
}

/// Like [`find_aspect`], restricted to `kinds` and optionally replacing
/// every orb with `orb_override`.
///
/// Candidates are still tried in canonical table order, whatever the order
/// of `kinds`.
pub fn find_aspect_among(
    kinds: &[AspectKind],
    lon_a: f64,
    lon_b: f64,
    orb_override: Option<f64>,
) -> Option<AspectMatch> {
    let separation = shortest_separation(lon_a, lon_b);
    ASPECTS
        .iter()
        .filter(|def| kinds.contains(&def.kind))
        .find_map(|def| {
            let exactness = (separation - def.angle_deg).abs();
            let orb = orb_override.unwrap_or(def.orb_deg);
            (exactness <= orb).then_some(AspectMatch {
                kind: def.kind,
                separation_deg: separation,
                exactness_deg: exactness,
                is_exact: exactness < EXACT_THRESHOLD_DEG,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_order_is_canonical() {
        for (def, kind) in ASPECTS.iter().zip(ALL_ASPECT_KINDS) {
            assert_eq!(def.kind, kind);
            assert_eq!(kind.definition(), *def);
        }
        let angles: Vec<f64> = ASPECTS.iter().map(|d| d.angle_deg).collect();
        assert_eq!(angles, vec![0.0, 60.0, 90.0, 120.0, 180.0]);
    }

    #[rstest]
    #[case(10.0, 15.0, Some(AspectKind::Conjunction))]
    #[case(10.0, 72.0, Some(AspectKind::Sextile))]
    #[case(0.0, 95.5, Some(AspectKind::Square))]
    #[case(350.0, 115.0, Some(AspectKind::Trine))]
    #[case(5.0, 180.0, Some(AspectKind::Opposition))]
    #[case(0.0, 45.0, None)]
    #[case(0.0, 150.0, None)]
    fn nominal_orbs(#[case] a: f64, #[case] b: f64, #[case] expected: Option<AspectKind>) {
        assert_eq!(find_aspect(a, b).map(|m| m.kind), expected);
    }

    #[test]
    fn orb_boundary_is_inclusive() {
        let m = find_aspect(0.0, 64.0).unwrap();
        assert_eq!(m.kind, AspectKind::Sextile);
        assert_eq!(m.exactness_deg, 4.0);
        assert!(!m.is_exact);
    }

    #[test]
    fn exact_flag() {
        let m = find_aspect(100.0, 219.5).unwrap();
        assert_eq!(m.kind, AspectKind::Trine);
        assert!((m.exactness_deg - 0.5).abs() < 1e-9);
        assert!(m.is_exact);
    }

    #[test]
    fn first_match_wins_over_closest() {
        // 30° sits inside a 35° conjunction window and a 35° sextile window;
        // the sextile is closer but the conjunction comes first.
        let m = find_aspect_among(&ALL_ASPECT_KINDS, 0.0, 30.0, Some(35.0)).unwrap();
        assert_eq!(m.kind, AspectKind::Conjunction);
        assert_eq!(m.exactness_deg, 30.0);
    }

    #[test]
    fn kinds_order_does_not_change_tie_break() {
        let reversed = [AspectKind::Sextile, AspectKind::Conjunction];
        let m = find_aspect_among(&reversed, 0.0, 30.0, Some(35.0)).unwrap();
        assert_eq!(m.kind, AspectKind::Conjunction);
    }

    #[test]
    fn hard_corridor() {
        assert!(find_aspect_among(&HARD_ASPECTS, 0.0, 120.0, Some(3.0)).is_none());
        assert!(find_aspect_among(&HARD_ASPECTS, 0.0, 94.0, Some(3.0)).is_none());
        let m = find_aspect_among(&HARD_ASPECTS, 0.0, 92.5, Some(3.0)).unwrap();
        assert_eq!(m.kind, AspectKind::Square);
    }

    #[test]
    fn symmetric_in_arguments() {
        for (a, b) in [(10.0, 75.0), (300.0, 30.0), (0.0, 179.0)] {
            assert_eq!(find_aspect(a, b), find_aspect(b, a));
        }
    }

    #[test]
    fn natures() {
        assert_eq!(AspectKind::Conjunction.nature(), AspectNature::Major);
        assert_eq!(AspectKind::Trine.nature(), AspectNature::Harmonious);
        assert_eq!(AspectKind::Opposition.nature(), AspectNature::Challenging);
        assert_eq!(AspectKind::Square.symbol(), "□");
    }
}
