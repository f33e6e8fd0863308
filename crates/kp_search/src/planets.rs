//! Sidereal positions of the nine grahas.

use kp_core::EphemerisProvider;
use kp_vedic_base::{ALL_GRAHAS, Graha, LunarNode, lunar_node_deg, normalize_360};
use serde::Serialize;

use crate::error::SearchError;

/// Tropical and sidereal longitude of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    pub tropical_longitude: f64,
    pub sidereal_longitude: f64,
    pub latitude: f64,
    pub retrograde: bool,
}

/// Positions of all nine grahas in chart order.
///
/// The seven bodies come from `provider`; Rahu and Ketu are the mean nodes
/// and always retrograde.
pub fn graha_positions<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    ayanamsa_deg: f64,
) -> Result<[GrahaPosition; 9], SearchError> {
    let mut out = [GrahaPosition {
        graha: Graha::Surya,
        tropical_longitude: 0.0,
        sidereal_longitude: 0.0,
        latitude: 0.0,
        retrograde: false,
    }; 9];
    for (slot, graha) in out.iter_mut().zip(ALL_GRAHAS) {
        let (tropical, latitude, retrograde) = match graha.body() {
            Some(body) => {
                let p = provider.position(body, jd)?;
                (p.longitude_deg, p.latitude_deg, p.retrograde)
            }
            None => {
                let node = if graha == Graha::Rahu {
                    LunarNode::Rahu
                } else {
                    LunarNode::Ketu
                };
                (lunar_node_deg(node, jd), 0.0, true)
            }
        };
        *slot = GrahaPosition {
            graha,
            tropical_longitude: normalize_360(tropical),
            sidereal_longitude: normalize_360(tropical - ayanamsa_deg),
            latitude,
            retrograde,
        };
    }
    Ok(out)
}

/// Sidereal longitude of the Moon alone.
pub fn moon_sidereal_longitude<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd: f64,
    ayanamsa_deg: f64,
) -> Result<f64, SearchError> {
    let moon = provider.ecliptic_position(kp_core::Body::Moon, jd)?;
    Ok(normalize_360(moon.longitude_deg - ayanamsa_deg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kp_core::AnalyticEphemeris;

    #[test]
    fn nine_in_chart_order() {
        let p = graha_positions(&AnalyticEphemeris::new(), 2_451_545.0, 23.85).unwrap();
        assert_eq!(p.map(|g| g.graha), ALL_GRAHAS);
        for g in &p {
            let diff = normalize_360(g.tropical_longitude - g.sidereal_longitude);
            assert!((diff - 23.85).abs() < 1e-9, "{:?}", g.graha);
        }
    }

    #[test]
    fn nodes_opposite_and_retrograde() {
        let p = graha_positions(&AnalyticEphemeris::new(), 2_460_000.5, 24.0).unwrap();
        let rahu = p[7];
        let ketu = p[8];
        assert_eq!(rahu.graha, Graha::Rahu);
        assert!(rahu.retrograde && ketu.retrograde);
        let sep = normalize_360(ketu.sidereal_longitude - rahu.sidereal_longitude);
        assert!((sep - 180.0).abs() < 1e-9);
    }

    #[test]
    fn moon_matches_table() {
        let provider = AnalyticEphemeris::new();
        let p = graha_positions(&provider, 2_451_545.0, 23.85).unwrap();
        let moon = moon_sidereal_longitude(&provider, 2_451_545.0, 23.85).unwrap();
        assert!((p[1].sidereal_longitude - moon).abs() < 1e-12);
    }
}
