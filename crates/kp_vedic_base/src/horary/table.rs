//! The 249-entry KP horary table.
//!
//! Each of the 27 stars is split into nine subs. A sub that straddles a
//! sign boundary is split in two, which turns 243 subs into 249 entries.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra};
use crate::rashi::{RASHI_SPAN, Rashi, rashi_from_longitude};
use crate::subdivision::subdivide;

/// Number of entries in the table.
pub const HORARY_COUNT: u16 = 249;

/// Splits closer than this to an interval end are ignored.
const SPLIT_EPSILON_DEG: f64 = 1e-6;

/// One numbered sub-interval of the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoraryEntry {
    /// 1-based horary number.
    pub index: u16,
    pub start_deg: f64,
    pub end_deg: f64,
    pub sign: Rashi,
    pub sign_lord: Graha,
    pub star: Nakshatra,
    pub star_lord: Graha,
    pub sub_lord: Graha,
}

impl HoraryEntry {
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// A sub interval, split at a sign boundary when it crosses one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubInterval {
    One(f64, f64),
    Two((f64, f64), (f64, f64)),
}

impl SubInterval {
    /// Split `[start, end)` at the next multiple of 30°.
    pub fn split(start: f64, end: f64) -> Self {
        let boundary = ((start / RASHI_SPAN).trunc() + 1.0) * RASHI_SPAN;
        if boundary < end - SPLIT_EPSILON_DEG {
            Self::Two((start, boundary), (boundary, end))
        } else {
            Self::One(start, end)
        }
    }

    fn pieces(self) -> impl Iterator<Item = (f64, f64)> {
        let (first, second) = match self {
            Self::One(s, e) => ((s, e), None),
            Self::Two(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }
}

/// Walk stars and subs in zodiac order and number the pieces.
pub fn build_horary_table() -> Vec<HoraryEntry> {
    let mut entries = Vec::with_capacity(HORARY_COUNT as usize);
    for star in ALL_NAKSHATRAS {
        let star_lord = star.lord();
        for sub in subdivide(star_lord, star.start_deg(), NAKSHATRA_SPAN) {
            for (start_deg, end_deg) in SubInterval::split(sub.start, sub.end).pieces() {
                let sign = rashi_from_longitude((start_deg + end_deg) / 2.0).rashi;
                entries.push(HoraryEntry {
                    index: entries.len() as u16 + 1,
                    start_deg,
                    end_deg,
                    sign,
                    sign_lord: rashi_lord(sign),
                    star,
                    star_lord,
                    sub_lord: sub.lord,
                });
            }
        }
    }
    debug!(entries = entries.len(), "horary table built");
    entries
}

static HORARY_TABLE: Lazy<Vec<HoraryEntry>> = Lazy::new(build_horary_table);

/// The process-wide table, built on first use.
pub fn horary_table() -> &'static [HoraryEntry] {
    &HORARY_TABLE
}

/// Entry for a horary number in `1..=249`.
pub fn horary_entry(index: u16) -> Result<&'static HoraryEntry, VedicError> {
    if index == 0 || index > HORARY_COUNT {
        return Err(VedicError::InvalidInput(format!(
            "horary number must be between 1 and {HORARY_COUNT}, got {index}"
        )));
    }
    horary_table()
        .get(index as usize - 1)
        .ok_or(VedicError::ComputationDegenerate("horary table is incomplete"))
}

/// Sidereal Ascendant for a horary number: the start of its interval.
pub fn ascendant_for_index(index: u16) -> Result<f64, VedicError> {
    horary_entry(index).map(|e| e.start_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_249() {
        assert_eq!(horary_table().len(), HORARY_COUNT as usize);
        assert_eq!(horary_table()[248].index, 249);
    }

    #[test]
    fn first_entry_is_aries_ketu() {
        let e = horary_entry(1).unwrap();
        assert_eq!(e.start_deg, 0.0);
        assert_eq!(e.sign, Rashi::Mesha);
        assert_eq!(e.sign_lord, Graha::Mangal);
        assert_eq!(e.star, Nakshatra::Ashwini);
        assert_eq!(e.star_lord, Graha::Ketu);
        assert_eq!(e.sub_lord, Graha::Ketu);
        // 7/120 of 13°20'
        assert!((e.end_deg - 7.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn last_entry_ends_at_360() {
        let e = horary_entry(249).unwrap();
        assert!((e.end_deg - 360.0).abs() < 1e-9);
        assert_eq!(e.sign, Rashi::Meena);
        assert_eq!(e.star, Nakshatra::Revati);
        assert_eq!(e.sub_lord, Graha::Shani);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(horary_entry(0), Err(VedicError::InvalidInput(_))));
        assert!(matches!(ascendant_for_index(250), Err(VedicError::InvalidInput(_))));
    }

    #[test]
    fn split_at_sign_boundary() {
        assert_eq!(SubInterval::split(28.0, 31.0), SubInterval::Two((28.0, 30.0), (30.0, 31.0)));
        assert_eq!(SubInterval::split(28.0, 30.0), SubInterval::One(28.0, 30.0));
        assert_eq!(
            SubInterval::split(28.0, 30.000_000_5),
            SubInterval::One(28.0, 30.000_000_5)
        );
    }

    #[test]
    fn krittika_rahu_sub_splits() {
        // Krittika starts at 26°40' in Aries; its Rahu sub crosses 30°.
        let split: Vec<_> = horary_table()
            .iter()
            .filter(|e| e.star == Nakshatra::Krittika && e.sub_lord == Graha::Rahu)
            .collect();
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].sign, Rashi::Mesha);
        assert_eq!(split[1].sign, Rashi::Vrishabha);
        assert_eq!(split[0].end_deg, 30.0);
        assert_eq!(split[1].start_deg, 30.0);
    }
}
