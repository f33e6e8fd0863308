//! Dasha entry points: from a known Moon longitude or from a birth instant.

use kp_core::EphemerisProvider;
use kp_time::CivilDateTime;
use kp_vedic_base::{DashaConfig, DashaReport, full_dasha_report};

use crate::chart::now_jd;
use crate::chart_types::EngineConfig;
use crate::error::SearchError;
use crate::planets::moon_sidereal_longitude;

/// Vimshottari report for a sidereal Moon at `reference_jd`.
///
/// The current chain is resolved at `query_jd`, or now when `None`.
pub fn dasha_report(
    moon_sidereal_lon: f64,
    reference_jd: f64,
    query_jd: Option<f64>,
    config: &DashaConfig,
) -> Result<DashaReport, SearchError> {
    let query = match query_jd {
        Some(jd) => jd,
        None => now_jd()?,
    };
    Ok(full_dasha_report(moon_sidereal_lon, reference_jd, query, config)?)
}

/// Vimshottari report for a birth instant, taking the Moon from `provider`.
pub fn dasha_for_birth<P: EphemerisProvider + ?Sized>(
    provider: &P,
    birth: &CivilDateTime,
    query_jd: Option<f64>,
    config: &EngineConfig,
) -> Result<DashaReport, SearchError> {
    let jd = birth.to_julian_day();
    let ayanamsa = config.ayanamsa.evaluate(jd)?;
    let moon = moon_sidereal_longitude(provider, jd, ayanamsa.value_deg)?;
    dasha_report(moon, jd, query_jd, &config.dasha)
}
