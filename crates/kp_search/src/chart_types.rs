//! Request and result types for chart calculation.

use kp_time::CivilDateTime;
use kp_vedic_base::{
    AyanamshaSettings, DashaConfig, DashaReport, Graha, Lordship, TimeFinderConfig,
    format_dms, format_longitude, lordship,
};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::location::GeoLocation;

/// Engine settings shared by every entry point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ayanamsa: AyanamshaSettings,
    pub dasha: DashaConfig,
    pub horary: TimeFinderConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        self.ayanamsa.validate()?;
        self.dasha.validate()?;
        self.horary.validate()?;
        Ok(())
    }
}

/// A chart request: instant, site and optional dasha enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub datetime: CivilDateTime,
    pub location: GeoLocation,
    pub include_dasha: bool,
    /// Instant for the current dasha chain; the wall clock when `None`.
    pub dasha_query_jd: Option<f64>,
}

impl ChartRequest {
    pub fn new(datetime: CivilDateTime, location: GeoLocation) -> Self {
        Self {
            datetime,
            location,
            include_dasha: true,
            dasha_query_jd: None,
        }
    }

    pub fn without_dasha(mut self) -> Self {
        self.include_dasha = false;
        self
    }

    pub fn with_dasha_query(mut self, jd: f64) -> Self {
        self.dasha_query_jd = Some(jd);
        self
    }
}

/// A sidereal point with its display string and full lordship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointInfo {
    pub longitude: f64,
    /// `DD°MM'SS.SS" Sign`.
    pub longitude_dms: String,
    pub lordship: Lordship,
}

impl PointInfo {
    pub fn at(sidereal_lon_deg: f64) -> Self {
        let lordship = lordship(sidereal_lon_deg);
        Self {
            longitude: lordship.longitude_deg,
            longitude_dms: format_longitude(lordship.longitude_deg),
            lordship,
        }
    }
}

/// One of the nine grahas in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetEntry {
    pub graha: Graha,
    pub tropical_longitude: f64,
    pub latitude: f64,
    pub retrograde: bool,
    #[serde(flatten)]
    pub point: PointInfo,
    /// 1..=12.
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuspEntry {
    /// 1..=12.
    pub house: u8,
    #[serde(flatten)]
    pub point: PointInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AyanamsaInfo {
    pub value: f64,
    pub dms: String,
    pub label: &'static str,
}

impl AyanamsaInfo {
    pub fn new(value: f64, label: &'static str) -> Self {
        Self {
            value,
            dms: format_dms(value),
            label,
        }
    }
}

/// A complete KP chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub datetime: CivilDateTime,
    pub location: GeoLocation,
    pub julian_day: f64,
    pub ayanamsa: AyanamsaInfo,
    pub ascendant: PointInfo,
    pub midheaven: PointInfo,
    pub planets: Vec<PlanetEntry>,
    pub cusps: Vec<CuspEntry>,
    pub house_system: &'static str,
    /// Absent when not requested or when it could not be computed.
    pub dasha: Option<DashaReport>,
}

impl ChartResult {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetEntry> {
        self.planets.iter().find(|p| p.graha == graha)
    }
}
