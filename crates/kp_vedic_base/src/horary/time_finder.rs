//! Inversion of the Ascendant: the civil time on a date at which a
//! longitude function reaches a target degree.
//!
//! The search runs on whole seconds of the local day. Each iteration
//! evaluates both ends and the midpoint of the window and keeps the closest
//! match seen so far. While the target lies on the forward arc between two
//! samples the window is halved onto that arc; otherwise it is re-centred on
//! the best match with half the width.
//!
//! The Ascendant sweeps a little over 360° per civil day, so targets in the
//! last few minutes' range match near midnight first. Near the poles the
//! Ascendant is far from monotonic and the bracket test can miss; the result
//! is then whatever residual the re-centring reaches.

use kp_time::{CivilDate, SECONDS_PER_DAY, TimeOfDay};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ayanamsha::AyanamshaSettings;
use crate::error::VedicError;
use crate::lagna::ascendant_deg;
use crate::util::{angular_distance, is_between_forward, normalize_360};

const LAST_SECOND: u32 = SECONDS_PER_DAY - 1;

/// Search limits and acceptance thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFinderConfig {
    pub max_iterations: u32,
    /// Stop once the window is at most this many seconds wide.
    pub precision_seconds: u32,
    /// Return immediately when a sample is this close, in degrees. The
    /// default is below one second of Ascendant motion, so the early exit
    /// never ends a search further than the 1 s bracket would.
    pub early_exit_deg: f64,
    /// Best residual below which the search counts as a match.
    pub accept_deg: f64,
}

impl Default for TimeFinderConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            precision_seconds: 1,
            early_exit_deg: 1e-4,
            accept_deg: 0.5,
        }
    }
}

impl TimeFinderConfig {
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.max_iterations == 0 {
            return Err(VedicError::InvalidInput(
                "horary.max_iterations must be at least 1".to_string(),
            ));
        }
        if self.precision_seconds == 0 {
            return Err(VedicError::InvalidInput(
                "horary.precision_seconds must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("horary.early_exit_deg", self.early_exit_deg),
            ("horary.accept_deg", self.accept_deg),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VedicError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// A successful match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeMatch {
    pub time: TimeOfDay,
    pub seconds_of_day: u32,
    pub jd: f64,
    /// Angular distance from the target at the matched second.
    pub residual_deg: f64,
    pub iterations: u32,
}

/// Outcome of a search. `NotFound` is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TimeSearch {
    Found(TimeMatch),
    NotFound {
        best_residual_deg: f64,
        iterations: u32,
    },
}

impl TimeSearch {
    pub fn found(&self) -> Option<&TimeMatch> {
        match self {
            Self::Found(m) => Some(m),
            Self::NotFound { .. } => None,
        }
    }
}

struct Best {
    seconds: u32,
    residual: f64,
}

/// Find the second of `date` at which `longitude_at(jd)` is closest to
/// `target_deg`.
pub fn find_time_for_longitude<F>(
    target_deg: f64,
    date: CivilDate,
    utc_offset_hours: f64,
    config: &TimeFinderConfig,
    mut longitude_at: F,
) -> Result<TimeSearch, VedicError>
where
    F: FnMut(f64) -> Result<f64, VedicError>,
{
    config.validate()?;
    if !target_deg.is_finite() {
        return Err(VedicError::InvalidInput(format!(
            "target longitude must be finite, got {target_deg}"
        )));
    }
    let target = normalize_360(target_deg);
    let midnight = date.midnight_julian_day(utc_offset_hours);
    let jd_at = |s: u32| midnight + s as f64 / SECONDS_PER_DAY as f64;

    let mut best = Best {
        seconds: 0,
        residual: f64::INFINITY,
    };
    let mut low = 0_u32;
    let mut high = LAST_SECOND;
    let mut iterations = 0_u32;

    while high - low > config.precision_seconds && iterations < config.max_iterations {
        iterations += 1;
        let mid = low + (high - low) / 2;
        let mut sample = |s: u32| -> Result<f64, VedicError> {
            let lon = normalize_360(longitude_at(jd_at(s))?);
            let residual = angular_distance(lon, target);
            if residual < best.residual {
                best = Best {
                    seconds: s,
                    residual,
                };
            }
            Ok(lon)
        };
        let f_low = sample(low)?;
        let f_mid = sample(mid)?;
        let f_high = sample(high)?;

        if best.residual < config.early_exit_deg {
            break;
        }

        if is_between_forward(target, f_low, f_mid) {
            high = mid;
        } else if is_between_forward(target, f_mid, f_high) {
            low = mid;
        } else {
            let quarter = (high - low) / 4;
            if best.seconds == low {
                high = low + 2 * quarter;
            } else if best.seconds == high {
                low = high - 2 * quarter;
            } else {
                low = best.seconds.saturating_sub(quarter);
                high = (best.seconds + quarter).min(LAST_SECOND);
            }
        }
    }

    debug!(
        target,
        seconds = best.seconds,
        residual = best.residual,
        iterations,
        "time search finished"
    );

    if best.residual < config.accept_deg {
        Ok(TimeSearch::Found(TimeMatch {
            time: TimeOfDay::from_seconds(best.seconds)?,
            seconds_of_day: best.seconds,
            jd: jd_at(best.seconds),
            residual_deg: best.residual,
            iterations,
        }))
    } else {
        Ok(TimeSearch::NotFound {
            best_residual_deg: best.residual,
            iterations,
        })
    }
}

/// Time on `date` at which the tropical Ascendant reaches `target_deg`.
pub fn find_time_for_ascendant(
    target_deg: f64,
    date: CivilDate,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
    config: &TimeFinderConfig,
) -> Result<TimeSearch, VedicError> {
    find_time_for_longitude(target_deg, date, utc_offset_hours, config, |jd| {
        ascendant_deg(jd, latitude_deg, longitude_deg)
    })
}

/// Time on `date` at which the sidereal Ascendant reaches `target_deg`.
pub fn find_time_for_sidereal_ascendant(
    target_deg: f64,
    date: CivilDate,
    latitude_deg: f64,
    longitude_deg: f64,
    utc_offset_hours: f64,
    ayanamsha: &AyanamshaSettings,
    config: &TimeFinderConfig,
) -> Result<TimeSearch, VedicError> {
    ayanamsha.validate()?;
    find_time_for_longitude(target_deg, date, utc_offset_hours, config, |jd| {
        Ok(ascendant_deg(jd, latitude_deg, longitude_deg)? - ayanamsha.evaluate(jd)?.value_deg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ayanamsha::AyanamshaMode;

    const COLOMBO: (f64, f64) = (6.9271, 79.8612);

    fn date() -> CivilDate {
        CivilDate::new(2024, 3, 15).unwrap()
    }

    fn strict() -> TimeFinderConfig {
        TimeFinderConfig {
            early_exit_deg: 1e-9,
            ..TimeFinderConfig::default()
        }
    }

    #[test]
    fn linear_function_recovered_exactly() {
        let midnight = date().midnight_julian_day(0.0);
        // 1° per 240 s, starting at 10°.
        let f = |jd: f64| Ok(10.0 + (jd - midnight) * 360.0);
        let target = 10.0 + 37_000.0 / 240.0;
        let res = find_time_for_longitude(target, date(), 0.0, &strict(), f).unwrap();
        let m = res.found().unwrap();
        assert!(m.seconds_of_day.abs_diff(37_000) <= 1, "got {}", m.seconds_of_day);
    }

    #[test]
    fn recovers_known_ascendant_time() {
        let (lat, lon) = COLOMBO;
        let known = 10 * 3600 + 30 * 60 + 15;
        let jd = date().midnight_julian_day(5.5) + known as f64 / 86_400.0;
        let target = ascendant_deg(jd, lat, lon).unwrap();
        let res = find_time_for_ascendant(target, date(), lat, lon, 5.5, &strict()).unwrap();
        let m = res.found().unwrap();
        assert!(m.seconds_of_day.abs_diff(known) <= 1, "got {}", m.seconds_of_day);
        assert!(m.residual_deg < 0.01);
    }

    #[test]
    fn default_config_recovers_within_a_second() {
        let cfg = TimeFinderConfig::default();
        // Colombo, London, Sydney, Oslo.
        let sites = [
            (6.9271, 79.8612, 5.5),
            (51.5074, -0.1278, 0.0),
            (-33.8688, 151.2093, 10.0),
            (59.9139, 10.7522, 1.0),
        ];
        for (lat, lon, offset) in sites {
            // Keep clear of the first and last minutes, where a target can
            // recur within one civil day.
            for k in 1..23_u32 {
                let known = k * 3600 + 137 * k;
                let jd = date().midnight_julian_day(offset) + known as f64 / 86_400.0;
                let target = ascendant_deg(jd, lat, lon).unwrap();
                let res = find_time_for_ascendant(target, date(), lat, lon, offset, &cfg).unwrap();
                let m = res.found().unwrap();
                assert!(
                    m.seconds_of_day.abs_diff(known) <= 1,
                    "lat {lat}: expected {known}, got {}",
                    m.seconds_of_day
                );
                assert!(m.iterations <= cfg.max_iterations);
            }
        }
    }

    #[test]
    fn sidereal_search_matches_sidereal_target() {
        let (lat, lon) = COLOMBO;
        let settings = AyanamshaSettings::new(AyanamshaMode::New, None);
        let known = 8 * 3600 + 5 * 60;
        let jd = date().midnight_julian_day(5.5) + known as f64 / 86_400.0;
        let aya = settings.evaluate(jd).unwrap().value_deg;
        let target = normalize_360(ascendant_deg(jd, lat, lon).unwrap() - aya);
        let res =
            find_time_for_sidereal_ascendant(target, date(), lat, lon, 5.5, &settings, &strict())
                .unwrap();
        assert!(res.found().unwrap().seconds_of_day.abs_diff(known) <= 1);
    }

    #[test]
    fn unreachable_target_is_not_found() {
        let cfg = TimeFinderConfig::default();
        let res = find_time_for_longitude(200.0, date(), 0.0, &cfg, |_| Ok(10.0)).unwrap();
        match res {
            TimeSearch::NotFound {
                best_residual_deg, ..
            } => assert!((best_residual_deg - 170.0).abs() < 1e-9),
            TimeSearch::Found(_) => panic!("constant function cannot match"),
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = TimeFinderConfig {
            max_iterations: 0,
            ..TimeFinderConfig::default()
        };
        assert!(find_time_for_longitude(0.0, date(), 0.0, &cfg, |_| Ok(0.0)).is_err());
        let cfg = TimeFinderConfig {
            accept_deg: -1.0,
            ..TimeFinderConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn pole_is_degenerate() {
        let cfg = TimeFinderConfig::default();
        let res = find_time_for_ascendant(0.0, date(), 90.0, 0.0, 0.0, &cfg);
        assert!(matches!(res, Err(VedicError::ComputationDegenerate(_))));
    }
}
