//! Krishnamurti Padhdhati calculations on top of tropical positions.
//!
//! This crate provides:
//! - Sign, star, sub and sub-sub lordship via one proportional subdivision
//! - KP Old/New and manual ayanamsa
//! - Ascendant, Midheaven and simplified Placidus cusps
//! - The Vimshottari dasha tree down to Sookshmadasha
//! - The 249-entry horary table and the Ascendant time-finder
//!
//! Everything here is pure; the horary table is built once per process.

pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod horary;
pub mod lagna;
pub mod lordship;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod subdivision;
pub mod util;
pub mod vimshottari;

pub use ayanamsha::{
    ALL_AYANAMSHA_MODES, Ayanamsha, AyanamshaMode, AyanamshaSettings, ayanamsha,
    precession_since_1900_deg,
};
pub use bhava::{
    HouseSpan, cusps_from_angles, horary_rotation, house_of, house_spans, placidus_cusps,
    rotate_cusps, to_sidereal,
};
pub use dasha::{
    ALL_DASHA_LEVELS, CurrentDasha, DAYS_PER_YEAR, DashaBalance, DashaConfig, DashaLevel,
    DashaPeriod, DashaReport, MAX_LOOKUP_CYCLES, MAX_MAHADASHA_COUNT, MahadashaEntry,
    current_chain, current_dasha, dasha_balance, full_dasha_report, locate_current,
    mahadasha_sequence,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use horary::{
    HORARY_COUNT, HoraryEntry, TimeFinderConfig, TimeMatch, TimeSearch, ascendant_for_index,
    build_horary_table, find_time_for_ascendant, find_time_for_longitude,
    find_time_for_sidereal_ascendant, horary_entry, horary_table,
};
pub use lagna::{ChartAngles, ascendant_deg, chart_angles, midheaven_deg};
pub use lordship::{
    Lordship, SignPosition, StarPosition, SubPosition, lordship, sign_of, star_of, sub_of,
    sub_sub_of,
};
pub use lunar_nodes::{ALL_NODES, LunarNode, lunar_node_deg, mean_ketu_deg, mean_rahu_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, format_dms,
    format_longitude, rashi_from_longitude,
};
pub use subdivision::{Days, Measure, Portion, locate, subdivide};
pub use util::{
    angular_distance, arc_forward, is_between_forward, normalize_360, normalize_to_pm180,
};
pub use vimshottari::{TOTAL_YEARS, VIMSHOTTARI_SEQUENCE, cycle_from, period_years, sequence_index};
