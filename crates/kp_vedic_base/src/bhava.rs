//! House cusps: simplified Placidus, sidereal conversion, horary rotation.
//!
//! The cusps used here are the quadrant trisection of the four angles:
//! 1 = Ascendant, 10 = MC, 4 = IC, 7 = Descendant, and the intermediate
//! cusps split each quadrant's forward ecliptic arc into thirds. This is a
//! simplification of true Placidus, which trisects semi-arcs in time; the
//! two agree on the angles and differ by up to a few degrees on the
//! intermediate cusps at higher latitudes.

use serde::Serialize;

use crate::error::VedicError;
use crate::lagna::chart_angles;
use crate::util::{arc_forward, normalize_360};

/// Cusps from Ascendant and MC by quadrant trisection.
pub fn cusps_from_angles(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = normalize_360(asc_deg);
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = normalize_360(mc_deg);

    // Asc -> IC: houses 2, 3
    let arc1 = arc_forward(asc_deg, ic_deg);
    cusps[1] = normalize_360(asc_deg + arc1 / 3.0);
    cusps[2] = normalize_360(asc_deg + 2.0 * arc1 / 3.0);

    // IC -> Desc: houses 5, 6
    let arc2 = arc_forward(ic_deg, desc_deg);
    cusps[4] = normalize_360(ic_deg + arc2 / 3.0);
    cusps[5] = normalize_360(ic_deg + 2.0 * arc2 / 3.0);

    // Desc -> MC: houses 8, 9
    let arc3 = arc_forward(desc_deg, mc_deg);
    cusps[7] = normalize_360(desc_deg + arc3 / 3.0);
    cusps[8] = normalize_360(desc_deg + 2.0 * arc3 / 3.0);

    // MC -> Asc: houses 11, 12
    let arc4 = arc_forward(mc_deg, asc_deg);
    cusps[10] = normalize_360(mc_deg + arc4 / 3.0);
    cusps[11] = normalize_360(mc_deg + 2.0 * arc4 / 3.0);

    cusps
}

/// Tropical cusps for an instant and place.
pub fn placidus_cusps(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<[f64; 12], VedicError> {
    let angles = chart_angles(jd, latitude_deg, longitude_deg)?;
    Ok(cusps_from_angles(angles.ascendant_deg, angles.midheaven_deg))
}

/// Subtract the ayanamsa from every cusp.
pub fn to_sidereal(cusps: &[f64; 12], ayanamsha_deg: f64) -> [f64; 12] {
    cusps.map(|c| normalize_360(c - ayanamsha_deg))
}

/// Add a fixed offset to every cusp.
pub fn rotate_cusps(cusps: &[f64; 12], offset_deg: f64) -> [f64; 12] {
    cusps.map(|c| normalize_360(c + offset_deg))
}

/// Offset that carries the astronomical Ascendant onto the horary one.
pub fn horary_rotation(horary_asc_deg: f64, astronomical_asc_deg: f64) -> f64 {
    horary_asc_deg - astronomical_asc_deg
}

/// One house: from its cusp to the next cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseSpan {
    /// 1..=12.
    pub house: u8,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl HouseSpan {
    /// Half-open `[start, end)` membership with wrap through 0°.
    pub fn contains(&self, lon_deg: f64) -> bool {
        let lon = normalize_360(lon_deg);
        if self.start_deg <= self.end_deg {
            self.start_deg <= lon && lon < self.end_deg
        } else {
            lon >= self.start_deg || lon < self.end_deg
        }
    }

    pub fn width_deg(&self) -> f64 {
        arc_forward(self.start_deg, self.end_deg)
    }
}

/// Twelve spans, cusp i to cusp i+1, house 12 closing on cusp 1.
pub fn house_spans(cusps: &[f64; 12]) -> [HouseSpan; 12] {
    std::array::from_fn(|i| HouseSpan {
        house: i as u8 + 1,
        start_deg: cusps[i],
        end_deg: cusps[(i + 1) % 12],
    })
}

/// House containing a longitude. Falls back to house 1 when no span
/// matches, which only happens for degenerate (coincident) cusps.
pub fn house_of(lon_deg: f64, spans: &[HouseSpan; 12]) -> u8 {
    spans
        .iter()
        .find(|s| s.contains(lon_deg))
        .map_or(1, |s| s.house)
}
