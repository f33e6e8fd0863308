//! Horary entry points.

use kp_core::EphemerisProvider;
use kp_time::{CivilDate, CivilDateTime};
use kp_vedic_base::{TimeSearch, find_time_for_sidereal_ascendant, horary_entry};
use tracing::{info, warn};

use crate::chart::chart_at;
use crate::chart_types::{EngineConfig, PointInfo};
use crate::error::SearchError;
use crate::horary_types::{AscendantSearch, HoraryChart, HoraryRequest};
use crate::location::GeoLocation;

/// Search `date` at `location` for the time the sidereal Ascendant reaches
/// the start of horary entry `index`.
pub fn find_horary_time(
    index: u16,
    date: CivilDate,
    location: &GeoLocation,
    config: &EngineConfig,
) -> Result<AscendantSearch, SearchError> {
    location.validate()?;
    let entry = horary_entry(index)?;
    let search = find_time_for_sidereal_ascendant(
        entry.start_deg,
        date,
        location.latitude,
        location.longitude,
        location.utc_offset,
        &config.ayanamsa,
        &config.horary,
    )?;
    let outcome = match search {
        TimeSearch::Found(m) => AscendantSearch::Found {
            time: CivilDateTime::new(date, m.time, location.utc_offset)?,
            julian_day: m.jd,
            residual_deg: m.residual_deg,
        },
        TimeSearch::NotFound {
            best_residual_deg, ..
        } => {
            warn!(
                index,
                %date,
                best_residual_deg,
                "no time on the date matches the horary ascendant"
            );
            AscendantSearch::NotFound { best_residual_deg }
        }
    };
    Ok(outcome)
}

/// Civil time on `date` matching horary number `index`, or
/// [`SearchError::NotFound`].
pub fn horary_time(
    index: u16,
    date: CivilDate,
    location: &GeoLocation,
    config: &EngineConfig,
) -> Result<CivilDateTime, SearchError> {
    match find_horary_time(index, date, location, config)? {
        AscendantSearch::Found { time, .. } => Ok(time),
        AscendantSearch::NotFound { best_residual_deg } => Err(SearchError::NotFound(format!(
            "no time on {date} brings the ascendant to horary {index} (closest {best_residual_deg:.3}°)"
        ))),
    }
}

/// Build a horary chart.
pub fn horary_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    request: &HoraryRequest,
    config: &EngineConfig,
) -> Result<HoraryChart, SearchError> {
    let entry = *horary_entry(request.index)?;
    let search = find_horary_time(request.index, request.date, &request.location, config)?;
    let judgment = match request.judgment {
        Some(t) => t,
        None => CivilDateTime::now(request.location.utc_offset)?,
    };
    let chart = chart_at(
        provider,
        &judgment,
        &request.location,
        config,
        Some(entry.start_deg),
    )?;
    info!(
        index = request.index,
        found = search.time().is_some(),
        judgment = %judgment,
        "horary chart calculated"
    );
    Ok(HoraryChart {
        entry,
        target_ascendant: PointInfo::at(entry.start_deg),
        search,
        judgment,
        chart,
    })
}
