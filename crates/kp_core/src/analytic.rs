//! Low-precision analytic ephemeris.
//!
//! Keplerian mean elements of date with secular rates, plus the principal
//! periodic terms for the Moon, Jupiter and Saturn. Positions are geocentric
//! tropical ecliptic coordinates referred to the equinox of date. Accuracy is
//! on the order of one to two arc-minutes over several centuries around
//! J2000, which is well inside a KP sub-sub span for every body but the Moon.
//!
//! Source: P. Schlyter, "How to compute planetary positions" (day number
//! counted from 1999-12-31 0h).
//!
//! Epochs are UT; the ~1 minute TT−UT difference is below the model's
//! accuracy and is not applied.

use crate::error::EphemerisError;
use crate::spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
use crate::{Body, EclipticPosition, EphemerisProvider};

/// Julian Day of day number zero (1999-12-31 0h).
const ELEMENTS_EPOCH_JD: f64 = 2_451_543.5;

const KEPLER_MAX_ITERATIONS: u32 = 30;
const KEPLER_TOLERANCE_RAD: f64 = 1e-12;

/// Orbital elements at one instant. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitalElements {
    /// Longitude of the ascending node.
    node: f64,
    /// Inclination to the ecliptic.
    inclination: f64,
    /// Argument of perihelion (perigee for Sun and Moon).
    perihelion: f64,
    /// Semi-major axis (AU; Earth radii for the Moon).
    semi_major_axis: f64,
    eccentricity: f64,
    mean_anomaly: f64,
}

fn elements(body: Body, d: f64) -> OrbitalElements {
    let (node, inclination, perihelion, semi_major_axis, eccentricity, mean_anomaly) = match body {
        Body::Sun => (
            0.0,
            0.0,
            282.9404 + 4.709_35e-5 * d,
            1.0,
            0.016_709 - 1.151e-9 * d,
            356.0470 + 0.985_600_258_5 * d,
        ),
        Body::Moon => (
            125.1228 - 0.052_953_808_3 * d,
            5.1454,
            318.0634 + 0.164_357_322_3 * d,
            60.2666,
            0.0549,
            115.3654 + 13.064_992_950_9 * d,
        ),
        Body::Mercury => (
            48.3313 + 3.245_87e-5 * d,
            7.0047 + 5.0e-8 * d,
            29.1241 + 1.014_44e-5 * d,
            0.387_098,
            0.205_635 + 5.59e-10 * d,
            168.6562 + 4.092_334_436_8 * d,
        ),
        Body::Venus => (
            76.6799 + 2.465_9e-5 * d,
            3.3946 + 2.75e-8 * d,
            54.8910 + 1.383_74e-5 * d,
            0.723_330,
            0.006_773 - 1.302e-9 * d,
            48.0052 + 1.602_130_224_4 * d,
        ),
        Body::Mars => (
            49.5574 + 2.110_81e-5 * d,
            1.8497 - 1.78e-8 * d,
            286.5016 + 2.929_61e-5 * d,
            1.523_688,
            0.093_405 + 2.516e-9 * d,
            18.6021 + 0.524_020_776_6 * d,
        ),
        Body::Jupiter => (
            100.4542 + 2.768_54e-5 * d,
            1.3030 - 1.557e-7 * d,
            273.8777 + 1.645_05e-5 * d,
            5.202_56,
            0.048_498 + 4.469e-9 * d,
            19.8950 + 0.083_085_300_1 * d,
        ),
        Body::Saturn => (
            113.6634 + 2.389_8e-5 * d,
            2.4886 - 1.081e-7 * d,
            339.3939 + 2.976_61e-5 * d,
            9.554_75,
            0.055_546 - 9.499e-9 * d,
            316.9670 + 0.033_444_228_2 * d,
        ),
    };
    OrbitalElements {
        node: node.rem_euclid(360.0),
        inclination,
        perihelion: perihelion.rem_euclid(360.0),
        semi_major_axis,
        eccentricity,
        mean_anomaly: mean_anomaly.rem_euclid(360.0),
    }
}

/// Solve Kepler's equation `E − e·sin E = M` by Newton iteration.
fn eccentric_anomaly(body: Body, mean_anomaly_rad: f64, e: f64) -> Result<f64, EphemerisError> {
    let m = mean_anomaly_rad;
    let mut ea = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(ea);
        }
    }
    Err(EphemerisError::NoConvergence {
        body,
        iterations: KEPLER_MAX_ITERATIONS,
    })
}

/// Ecliptic rectangular position of a body in its own orbit's central frame.
fn orbit_position(body: Body, el: &OrbitalElements) -> Result<[f64; 3], EphemerisError> {
    let e = el.eccentricity;
    let a = el.semi_major_axis;
    let ea = eccentric_anomaly(body, el.mean_anomaly.to_radians(), e)?;

    let xv = a * (ea.cos() - e);
    let yv = a * (1.0 - e * e).sqrt() * ea.sin();
    let v = yv.atan2(xv);
    let r = xv.hypot(yv);

    let (sin_n, cos_n) = el.node.to_radians().sin_cos();
    let (sin_i, cos_i) = el.inclination.to_radians().sin_cos();
    let (sin_vw, cos_vw) = (v + el.perihelion.to_radians()).sin_cos();

    Ok([
        r * (cos_n * cos_vw - sin_n * sin_vw * cos_i),
        r * (sin_n * cos_vw + cos_n * sin_vw * cos_i),
        r * (sin_vw * sin_i),
    ])
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Geocentric position of the Sun (AU).
fn sun_geocentric(d: f64) -> Result<[f64; 3], EphemerisError> {
    orbit_position(Body::Sun, &elements(Body::Sun, d))
}

/// Geocentric Moon with the principal periodic terms (Earth radii).
fn moon_geocentric(d: f64) -> Result<SphericalCoords, EphemerisError> {
    let moon = elements(Body::Moon, d);
    let sun = elements(Body::Sun, d);
    let mut s = cartesian_to_spherical(&orbit_position(Body::Moon, &moon)?);

    let ms = sun.mean_anomaly;
    let mm = moon.mean_anomaly;
    let ls = sun.perihelion + ms;
    let lm = moon.node + moon.perihelion + mm;
    let dd = lm - ls;
    let f = lm - moon.node;

    s.lon_deg += -1.274 * sin_deg(mm - 2.0 * dd)
        + 0.658 * sin_deg(2.0 * dd)
        - 0.186 * sin_deg(ms)
        - 0.059 * sin_deg(2.0 * mm - 2.0 * dd)
        - 0.057 * sin_deg(mm - 2.0 * dd + ms)
        + 0.053 * sin_deg(mm + 2.0 * dd)
        + 0.046 * sin_deg(2.0 * dd - ms)
        + 0.041 * sin_deg(mm - ms)
        - 0.035 * sin_deg(dd)
        - 0.031 * sin_deg(mm + ms)
        - 0.015 * sin_deg(2.0 * f - 2.0 * dd)
        + 0.011 * sin_deg(mm - 4.0 * dd);

    s.lat_deg += -0.173 * sin_deg(f - 2.0 * dd)
        - 0.055 * sin_deg(mm - f - 2.0 * dd)
        - 0.046 * sin_deg(mm + f - 2.0 * dd)
        + 0.033 * sin_deg(f + 2.0 * dd)
        + 0.017 * sin_deg(2.0 * mm + f);

    s.distance += -0.58 * cos_deg(mm - 2.0 * dd) - 0.46 * cos_deg(2.0 * dd);
    s.lon_deg = s.lon_deg.rem_euclid(360.0);
    Ok(s)
}

/// Heliocentric planet position (AU), with the Jupiter–Saturn great
/// inequality terms applied to those two planets.
fn heliocentric(body: Body, d: f64) -> Result<[f64; 3], EphemerisError> {
    let xyz = orbit_position(body, &elements(body, d))?;
    if !matches!(body, Body::Jupiter | Body::Saturn) {
        return Ok(xyz);
    }

    let mj = elements(Body::Jupiter, d).mean_anomaly;
    let msat = elements(Body::Saturn, d).mean_anomaly;
    let mut s = cartesian_to_spherical(&xyz);

    if body == Body::Jupiter {
        s.lon_deg += -0.332 * sin_deg(2.0 * mj - 5.0 * msat - 67.6)
            - 0.056 * sin_deg(2.0 * mj - 2.0 * msat + 21.0)
            + 0.042 * sin_deg(3.0 * mj - 5.0 * msat + 21.0)
            - 0.036 * sin_deg(mj - 2.0 * msat)
            + 0.022 * cos_deg(mj - msat)
            + 0.023 * sin_deg(2.0 * mj - 3.0 * msat + 52.0)
            - 0.016 * sin_deg(mj - 5.0 * msat - 69.0);
    } else {
        s.lon_deg += 0.812 * sin_deg(2.0 * mj - 5.0 * msat - 67.6)
            - 0.229 * cos_deg(2.0 * mj - 4.0 * msat - 2.0)
            + 0.119 * sin_deg(mj - 2.0 * msat - 3.0)
            + 0.046 * sin_deg(2.0 * mj - 6.0 * msat - 69.0)
            + 0.014 * sin_deg(mj - 3.0 * msat + 32.0);
        s.lat_deg += -0.020 * cos_deg(2.0 * mj - 4.0 * msat - 2.0)
            + 0.018 * sin_deg(2.0 * mj - 6.0 * msat - 49.0);
    }
    Ok(spherical_to_cartesian(&s))
}

/// Built-in analytic ephemeris. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn ecliptic_position(&self, body: Body, jd: f64) -> Result<EclipticPosition, EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::NonFiniteEpoch { jd });
        }
        let d = jd - ELEMENTS_EPOCH_JD;

        let s = match body {
            Body::Moon => moon_geocentric(d)?,
            Body::Sun => cartesian_to_spherical(&sun_geocentric(d)?),
            planet => {
                let h = heliocentric(planet, d)?;
                let sun = sun_geocentric(d)?;
                cartesian_to_spherical(&[h[0] + sun[0], h[1] + sun[1], h[2] + sun[2]])
            }
        };

        Ok(EclipticPosition {
            longitude_deg: if s.lon_deg >= 360.0 { 0.0 } else { s.lon_deg },
            latitude_deg: s.lat_deg,
            distance: s.distance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_BODIES;

    const EPH: AnalyticEphemeris = AnalyticEphemeris::new();

    fn lon(body: Body, jd: f64) -> f64 {
        EPH.ecliptic_position(body, jd).unwrap().longitude_deg
    }

    fn sep(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn sun_at_j2000() {
        let l = lon(Body::Sun, 2_451_545.0);
        assert!((l - 280.38).abs() < 0.05, "Sun = {l}");
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992 October 13.0: true longitude 199.90988°
        let l = lon(Body::Sun, 2_448_908.5);
        assert!((l - 199.909_88).abs() < 0.05, "Sun = {l}");
    }

    #[test]
    fn sun_distance_near_one_au() {
        let p = EPH.ecliptic_position(Body::Sun, 2_451_545.0).unwrap();
        assert!((p.distance - 0.983).abs() < 0.01, "r = {}", p.distance);
        assert!(p.latitude_deg.abs() < 1e-9);
    }

    #[test]
    fn moon_meeus_example_47a() {
        // 1992 April 12.0: λ = 133.162655°, β = −3.229126°
        let p = EPH.ecliptic_position(Body::Moon, 2_448_724.5).unwrap();
        assert!((p.longitude_deg - 133.162_655).abs() < 0.3, "λ = {}", p.longitude_deg);
        assert!((p.latitude_deg + 3.229_126).abs() < 0.2, "β = {}", p.latitude_deg);
    }

    #[test]
    fn moon_daily_motion() {
        let jd = 2_460_000.5;
        let motion = (lon(Body::Moon, jd + 1.0) - lon(Body::Moon, jd)).rem_euclid(360.0);
        assert!((10.0..16.0).contains(&motion), "Moon moved {motion}°/day");
    }

    #[test]
    fn venus_meeus_example_33a() {
        // 1992 December 20.0: λ = 313.08102°
        let l = lon(Body::Venus, 2_448_976.5);
        assert!((l - 313.081_02).abs() < 0.2, "Venus = {l}");
    }

    #[test]
    fn great_conjunction_2020() {
        // 2020-12-21: Jupiter and Saturn within a few arc-minutes near 300.5°
        let jd = 2_459_204.5;
        let j = lon(Body::Jupiter, jd);
        let s = lon(Body::Saturn, jd);
        assert!(sep(j, s) < 0.5, "Jupiter {j} Saturn {s}");
        assert!((j - 300.4).abs() < 1.0, "Jupiter = {j}");
    }

    #[test]
    fn mars_retrograde_october_2020() {
        let p = EPH.position(Body::Mars, 2_459_135.5).unwrap();
        assert!(p.retrograde);
    }

    #[test]
    fn mars_direct_march_2020() {
        let p = EPH.position(Body::Mars, 2_458_909.5).unwrap();
        assert!(!p.retrograde);
    }

    #[test]
    fn jupiter_and_saturn_retrograde_july_2020() {
        for body in [Body::Jupiter, Body::Saturn] {
            let p = EPH.position(body, 2_459_044.5).unwrap();
            assert!(p.retrograde, "{body:?} should be retrograde");
        }
    }

    #[test]
    fn inferior_planets_stay_near_sun() {
        let mut jd = 2_451_545.0;
        while jd < 2_451_545.0 + 800.0 {
            let sun = lon(Body::Sun, jd);
            assert!(sep(lon(Body::Mercury, jd), sun) < 28.5, "Mercury at {jd}");
            assert!(sep(lon(Body::Venus, jd), sun) < 47.5, "Venus at {jd}");
            jd += 7.0;
        }
    }

    #[test]
    fn all_bodies_in_range() {
        for body in ALL_BODIES {
            for k in 0..40 {
                let jd = 2_415_020.5 + k as f64 * 1_000.3;
                let p = EPH.ecliptic_position(body, jd).unwrap();
                assert!((0.0..360.0).contains(&p.longitude_deg), "{body:?}: {}", p.longitude_deg);
                assert!(p.latitude_deg.abs() < 10.0, "{body:?}: {}", p.latitude_deg);
            }
        }
    }

    #[test]
    fn non_finite_epoch_rejected() {
        let err = EPH.ecliptic_position(Body::Sun, f64::NAN).unwrap_err();
        assert!(matches!(err, EphemerisError::NonFiniteEpoch { .. }));
    }

    #[test]
    fn kepler_solver_high_eccentricity() {
        let ea = eccentric_anomaly(Body::Mercury, 1.0, 0.9).unwrap();
        assert!((ea - 0.9 * ea.sin() - 1.0).abs() < 1e-10);
    }
}
