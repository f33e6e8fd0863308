//! Types for horary charts.

use kp_time::{CivilDate, CivilDateTime};
use kp_vedic_base::HoraryEntry;
use serde::Serialize;

use crate::chart_types::{ChartResult, PointInfo};
use crate::location::GeoLocation;

/// A horary question: the number given by the querent, the date to search
/// and the site.
#[derive(Debug, Clone, PartialEq)]
pub struct HoraryRequest {
    /// 1..=249.
    pub index: u16,
    pub date: CivilDate,
    pub location: GeoLocation,
    /// Instant the question is judged; now at the site's offset when `None`.
    pub judgment: Option<CivilDateTime>,
}

/// Where the Ascendant search on the date ended up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AscendantSearch {
    Found {
        time: CivilDateTime,
        julian_day: f64,
        residual_deg: f64,
    },
    NotFound {
        best_residual_deg: f64,
    },
}

impl AscendantSearch {
    pub fn time(&self) -> Option<CivilDateTime> {
        match self {
            Self::Found { time, .. } => Some(*time),
            Self::NotFound { .. } => None,
        }
    }
}

/// A horary chart: the table entry, the search outcome and the chart at
/// judgment time with cusps rotated onto the horary Ascendant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoraryChart {
    pub entry: HoraryEntry,
    pub target_ascendant: PointInfo,
    pub search: AscendantSearch,
    pub judgment: CivilDateTime,
    pub chart: ChartResult,
}
