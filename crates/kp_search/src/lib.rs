//! KP chart orchestration over an injected ephemeris provider.
//!
//! This crate provides:
//! - Full charts: planets, cusps, Ascendant and Midheaven with lordship
//! - Vimshottari dasha reports from a Moon longitude or a birth instant
//! - Horary charts and the time lookup for a horary number
//! - The location seam with the built-in Sri Lanka gazetteer

pub mod chart;
pub mod chart_types;
pub mod dasha;
pub mod error;
pub mod horary;
pub mod horary_types;
pub mod location;
pub mod planets;

pub use chart::calculate_chart;
pub use chart_types::{
    AyanamsaInfo, ChartRequest, ChartResult, CuspEntry, EngineConfig, PlanetEntry, PointInfo,
};
pub use dasha::{dasha_for_birth, dasha_report};
pub use error::{ErrorKind, SearchError};
pub use horary::{find_horary_time, horary_chart, horary_time};
pub use horary_types::{AscendantSearch, HoraryChart, HoraryRequest};
pub use kp_vedic_base::{HoraryEntry, horary_table};
pub use location::{
    GeoLocation, LayeredGazetteer, LocationProvider, SriLankaGazetteer, normalize_key,
    resolve_location,
};
pub use planets::{GrahaPosition, graha_positions, moon_sidereal_longitude};
