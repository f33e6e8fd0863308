//! Vimshottari dasha engine.
//!
//! The root level comes from the Moon's star at the reference instant; every
//! deeper level is the same proportional subdivision applied on the
//! Julian Day axis.

pub mod balance;
pub mod mahadasha;
pub mod query;
pub mod report;
pub mod subperiod;
pub mod types;

pub use balance::{DashaBalance, dasha_balance};
pub use mahadasha::mahadasha_sequence;
pub use query::{CurrentDasha, current_chain, current_dasha, locate_current};
pub use report::{
    DashaConfig, DashaReport, MAX_LOOKUP_CYCLES, MAX_MAHADASHA_COUNT, MahadashaEntry,
    full_dasha_report,
};
pub use subperiod::subdivide;
pub use types::{ALL_DASHA_LEVELS, DAYS_PER_YEAR, DashaLevel, DashaPeriod};
