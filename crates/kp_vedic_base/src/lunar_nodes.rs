//! Mean lunar nodes: Rahu (ascending) and Ketu (descending = Rahu + 180°).
//!
//! Mean node polynomial from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Eq. 47.7, in Julian centuries from J2000.0. The mean node regresses
//! steadily, so both nodes are always reported retrograde.

use kp_time::julian_centuries;

use crate::graha::Graha;
use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (North Node).
    Rahu,
    /// Descending node (South Node). Always Rahu + 180 deg.
    Ketu,
}

/// All node variants.
pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

impl LunarNode {
    pub const fn graha(self) -> Graha {
        match self {
            Self::Rahu => Graha::Rahu,
            Self::Ketu => Graha::Ketu,
        }
    }
}

/// Mean Rahu longitude in degrees [0, 360).
///
/// Ω = 125.0445479 − 1934.1362891·T + 0.0020754·T² + T³/467441 − T⁴/60616000
pub fn mean_rahu_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let t2 = t * t;
    normalize_360(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t2 * t / 467_441.0
            - t2 * t2 / 60_616_000.0,
    )
}

/// Mean Ketu longitude in degrees [0, 360).
pub fn mean_ketu_deg(jd: f64) -> f64 {
    normalize_360(mean_rahu_deg(jd) + 180.0)
}

/// Tropical longitude of a node.
pub fn lunar_node_deg(node: LunarNode, jd: f64) -> f64 {
    match node {
        LunarNode::Rahu => mean_rahu_deg(jd),
        LunarNode::Ketu => mean_ketu_deg(jd),
    }
}
