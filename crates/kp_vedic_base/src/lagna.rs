//! Lagna (Ascendant) and MC (Midheaven), tropical, from sidereal time.
//!
//! Formulas, with θ the local sidereal time, ε the mean obliquity and φ the
//! geographic latitude:
//!
//! - `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
//! - `MC  = atan2(sin θ, cos θ·cos ε)`
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.
//! The Ascendant is undefined at the geographic poles.

use kp_time::{local_sidereal_time_deg, obliquity_deg};
use serde::Serialize;

use crate::error::VedicError;
use crate::util::normalize_360;

/// Ascendant from local sidereal time, obliquity and latitude (degrees).
pub fn ascendant_from_lst_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Midheaven from local sidereal time and obliquity (degrees).
pub fn midheaven_from_lst_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}

fn check_latitude(latitude_deg: f64) -> Result<(), VedicError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
        return Err(VedicError::InvalidInput(format!(
            "latitude {latitude_deg} outside [-90, 90]"
        )));
    }
    if latitude_deg.abs() == 90.0 {
        return Err(VedicError::ComputationDegenerate(
            "ascendant is undefined at the poles",
        ));
    }
    Ok(())
}

/// Tropical Ascendant at a Julian Day (UT) for an east-positive longitude.
pub fn ascendant_deg(jd: f64, latitude_deg: f64, longitude_deg: f64) -> Result<f64, VedicError> {
    check_latitude(latitude_deg)?;
    let lst = local_sidereal_time_deg(jd, longitude_deg);
    Ok(ascendant_from_lst_deg(lst, obliquity_deg(jd), latitude_deg))
}

/// Tropical Midheaven at a Julian Day (UT) for an east-positive longitude.
pub fn midheaven_deg(jd: f64, longitude_deg: f64) -> f64 {
    midheaven_from_lst_deg(local_sidereal_time_deg(jd, longitude_deg), obliquity_deg(jd))
}

/// Both angles with the intermediate quantities they share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAngles {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    pub lst_deg: f64,
    pub obliquity_deg: f64,
}

/// Ascendant and MC from one sidereal-time evaluation.
pub fn chart_angles(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<ChartAngles, VedicError> {
    check_latitude(latitude_deg)?;
    let lst = local_sidereal_time_deg(jd, longitude_deg);
    let eps = obliquity_deg(jd);
    Ok(ChartAngles {
        ascendant_deg: ascendant_from_lst_deg(lst, eps, latitude_deg),
        midheaven_deg: midheaven_from_lst_deg(lst, eps),
        lst_deg: lst,
        obliquity_deg: eps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::arc_forward;

    const EPS: f64 = 23.4393;

    /// Equator, θ = 0: the equinox culminates and 0° Cancer rises.
    #[test]
    fn equator_lst_zero() {
        let asc = ascendant_from_lst_deg(0.0, EPS, 0.0);
        assert!((asc - 90.0).abs() < 1e-10, "Asc = {asc}");
        let mc = midheaven_from_lst_deg(0.0, EPS);
        assert!(mc.abs() < 1e-10, "MC = {mc}");
    }

    #[test]
    fn mc_at_cardinal_lst() {
        assert!((midheaven_from_lst_deg(90.0, EPS) - 90.0).abs() < 1e-10);
        assert!((midheaven_from_lst_deg(180.0, EPS) - 180.0).abs() < 1e-10);
        assert!((midheaven_from_lst_deg(270.0, EPS) - 270.0).abs() < 1e-10);
    }

    /// The Ascendant always lies in the quadrant following the MC.
    #[test]
    fn ascendant_follows_mc() {
        for lat in [-50.0, -10.0, 0.0, 6.9, 28.6, 51.5] {
            for i in 0..72 {
                let lst = i as f64 * 5.0;
                let asc = ascendant_from_lst_deg(lst, EPS, lat);
                let mc = midheaven_from_lst_deg(lst, EPS);
                let arc = arc_forward(mc, asc);
                assert!(arc > 0.0 && arc < 180.0, "lat {lat} lst {lst}: MC {mc} Asc {asc}");
            }
        }
    }

    #[test]
    fn ascendant_sweeps_full_circle() {
        let mut min_asc = f64::MAX;
        let mut max_asc = f64::MIN;
        for i in 0..360 {
            let asc = ascendant_from_lst_deg(i as f64, EPS, 28.6);
            min_asc = min_asc.min(asc);
            max_asc = max_asc.max(asc);
        }
        assert!(min_asc < 3.0 && max_asc > 357.0, "{min_asc}..{max_asc}");
    }

    #[test]
    fn poles_are_degenerate() {
        let err = ascendant_deg(2_451_545.0, 90.0, 0.0).unwrap_err();
        assert!(matches!(err, VedicError::ComputationDegenerate(_)));
        let err = ascendant_deg(2_451_545.0, 91.0, 0.0).unwrap_err();
        assert!(matches!(err, VedicError::InvalidInput(_)));
    }

    #[test]
    fn chart_angles_agree_with_single_calls() {
        let jd = 2_460_000.25;
        let a = chart_angles(jd, 6.9271, 79.8612).unwrap();
        assert!((a.ascendant_deg - ascendant_deg(jd, 6.9271, 79.8612).unwrap()).abs() < 1e-12);
        assert!((a.midheaven_deg - midheaven_deg(jd, 79.8612)).abs() < 1e-12);
    }
}
