//! Calendar and sidereal time for the KP engine.
//!
//! This crate provides:
//! - Julian Day ↔ civil calendar conversions (Meeus, with the Gregorian cutover)
//! - Year fraction used by the precession polynomials
//! - Mean obliquity of the ecliptic and mean sidereal time
//! - Validated civil date, clock time and zoned instant types

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    CivilDate, CivilDateTime, SECONDS_PER_DAY, TimeOfDay, days_in_month, validate_utc_offset,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, instant_to_julian_day, is_gregorian_date, is_julian_leap_year,
    is_leap_year, julian_centuries, julian_day_to_instant, year_fraction,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg, obliquity_deg};
