//! Mean obliquity of the ecliptic and mean sidereal time.
//!
//! All functions take UT Julian Days and return degrees.
//!
//! Sources:
//! - Obliquity: IAU polynomial in Julian centuries from J2000.0.
//! - GMST: Meeus, Astronomical Algorithms (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, julian_centuries};

/// Normalize degrees to [0, 360).
fn wrap_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Mean obliquity of the ecliptic in degrees.
///
/// ε = 23.439291 − 0.0130042·T − 0.00000016·T² + 0.000000504·T³
pub fn obliquity_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    23.439_291 - 0.013_004_2 * t - 0.000_000_16 * t * t + 0.000_000_504 * t * t * t
}

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ0 = 280.46061837 + 360.98564736629·(JD − 2451545) + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    wrap_deg(theta)
}

/// Local Mean Sidereal Time in degrees for an east-positive geographic longitude.
pub fn local_sidereal_time_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    wrap_deg(gmst_deg(jd) + longitude_east_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        assert!((obliquity_deg(J2000_JD) - 23.439_291).abs() < 1e-12);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(obliquity_deg(J2000_JD + 36_525.0) < obliquity_deg(J2000_JD));
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST = 6h 39m 51.27s ≈ 99.9678°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.9678).abs() < 0.001, "GMST = {g}°");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST = 13h 10m 46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "GMST = {g}°");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 80.0);
        let expected = (gmst_deg(jd) + 80.0).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-9);
    }

    #[test]
    fn lst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            for &lon in &[-179.9, -10.0, 0.0, 79.86, 180.0] {
                let lst = local_sidereal_time_deg(jd, lon);
                assert!((0.0..360.0).contains(&lst), "LST out of range: {lst}");
            }
        }
    }
}
