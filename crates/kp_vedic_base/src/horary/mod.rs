//! KP horary numbers: the 249-entry table and the Ascendant time-finder.

pub mod table;
pub mod time_finder;

pub use table::{
    HORARY_COUNT, HoraryEntry, SubInterval, ascendant_for_index, build_horary_table,
    horary_entry, horary_table,
};
pub use time_finder::{
    TimeFinderConfig, TimeMatch, TimeSearch, find_time_for_ascendant,
    find_time_for_longitude, find_time_for_sidereal_ascendant,
};
