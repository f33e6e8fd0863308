//! Chart orchestration: ephemeris, ayanamsa, angles, cusps, lordship and
//! the optional dasha section.

use kp_core::EphemerisProvider;
use kp_time::CivilDateTime;
use kp_vedic_base::{
    chart_angles, cusps_from_angles, full_dasha_report, horary_rotation, house_of, house_spans,
    rotate_cusps, to_sidereal,
};
use tracing::{info, warn};

use crate::chart_types::{
    AyanamsaInfo, ChartRequest, ChartResult, CuspEntry, EngineConfig, PlanetEntry, PointInfo,
};
use crate::error::SearchError;
use crate::location::GeoLocation;
use crate::planets::graha_positions;

/// Julian Day of the current wall-clock instant.
pub(crate) fn now_jd() -> Result<f64, SearchError> {
    Ok(CivilDateTime::now(0.0)?.to_julian_day())
}

/// Calculate a full KP chart.
///
/// A dasha failure does not fail the chart: the section is left out and a
/// warning is logged.
pub fn calculate_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    request: &ChartRequest,
    config: &EngineConfig,
) -> Result<ChartResult, SearchError> {
    let mut chart = chart_at(provider, &request.datetime, &request.location, config, None)?;
    if request.include_dasha {
        chart.dasha = dasha_section(&chart, request.dasha_query_jd, config);
    }
    info!(
        jd = chart.julian_day,
        location = %chart.location.name,
        ascendant = chart.ascendant.longitude,
        dasha = chart.dasha.is_some(),
        "chart calculated"
    );
    Ok(chart)
}

fn dasha_section(
    chart: &ChartResult,
    query_jd: Option<f64>,
    config: &EngineConfig,
) -> Option<kp_vedic_base::DashaReport> {
    let moon = chart.planets.get(1)?.point.longitude;
    let report = query_jd
        .map_or_else(now_jd, Ok)
        .and_then(|q| {
            full_dasha_report(moon, chart.julian_day, q, &config.dasha).map_err(SearchError::from)
        });
    match report {
        Ok(r) => Some(r),
        Err(e) => {
            warn!(error = %e, "dasha section omitted");
            None
        }
    }
}

/// Chart at an instant. With `horary_ascendant`, the cusps are rotated so
/// the first cusp sits on that sidereal degree.
pub(crate) fn chart_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    datetime: &CivilDateTime,
    location: &GeoLocation,
    config: &EngineConfig,
    horary_ascendant: Option<f64>,
) -> Result<ChartResult, SearchError> {
    location.validate()?;
    // Dasha settings are checked by the dasha section, which may fail alone.
    config.ayanamsa.validate()?;
    let jd = datetime.to_julian_day();
    let ayanamsa = config.ayanamsa.evaluate(jd)?;
    let angles = chart_angles(jd, location.latitude, location.longitude)?;

    let tropical = cusps_from_angles(angles.ascendant_deg, angles.midheaven_deg);
    let mut cusps = to_sidereal(&tropical, ayanamsa.value_deg);
    if let Some(target) = horary_ascendant {
        cusps = rotate_cusps(&cusps, horary_rotation(target, cusps[0]));
    }
    let spans = house_spans(&cusps);

    let planets = graha_positions(provider, jd, ayanamsa.value_deg)?
        .iter()
        .map(|g| PlanetEntry {
            graha: g.graha,
            tropical_longitude: g.tropical_longitude,
            latitude: g.latitude,
            retrograde: g.retrograde,
            point: PointInfo::at(g.sidereal_longitude),
            house: house_of(g.sidereal_longitude, &spans),
        })
        .collect();

    let cusp_entries = cusps
        .iter()
        .enumerate()
        .map(|(i, &lon)| CuspEntry {
            house: i as u8 + 1,
            point: PointInfo::at(lon),
        })
        .collect();

    Ok(ChartResult {
        datetime: *datetime,
        location: location.clone(),
        julian_day: jd,
        ayanamsa: AyanamsaInfo::new(ayanamsa.value_deg, ayanamsa.label),
        ascendant: PointInfo::at(cusps[0]),
        midheaven: PointInfo::at(cusps[9]),
        planets,
        cusps: cusp_entries,
        house_system: "Placidus",
        dasha: None,
    })
}
