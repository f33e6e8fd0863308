//! KP lordship: sign, star, sub and sub-sub lords of a sidereal longitude.
//!
//! Sign and star come from equal divisions of the circle. The sub divides
//! the star, and the sub-sub divides the sub, in Vimshottari proportion
//! starting from the enclosing level's lord.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::subdivision::locate;
use crate::util::normalize_360;

/// Sign level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignPosition {
    pub sign: Rashi,
    pub lord: Graha,
    /// Degrees from the start of the sign, [0, 30).
    pub position_deg: f64,
}

/// Star level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarPosition {
    pub star: Nakshatra,
    pub lord: Graha,
    /// 1..=4.
    pub pada: u8,
    /// Degrees from the start of the star, [0, 13.333...).
    pub position_deg: f64,
}

/// Sub or sub-sub level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubPosition {
    pub lord: Graha,
    /// Absolute longitude where this division starts.
    pub start_deg: f64,
    /// Absolute longitude where this division ends (exclusive).
    pub end_deg: f64,
    /// Degrees from the start of the division.
    pub position_deg: f64,
}

impl SubPosition {
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// All four lordship levels of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lordship {
    pub longitude_deg: f64,
    pub sign: SignPosition,
    pub star: StarPosition,
    pub sub: SubPosition,
    pub sub_sub: SubPosition,
}

pub fn sign_of(sidereal_lon_deg: f64) -> SignPosition {
    let info = rashi_from_longitude(sidereal_lon_deg);
    SignPosition {
        sign: info.rashi,
        lord: info.rashi.lord(),
        position_deg: info.degrees_in_rashi,
    }
}

pub fn star_of(sidereal_lon_deg: f64) -> StarPosition {
    let info = nakshatra_from_longitude(sidereal_lon_deg);
    StarPosition {
        star: info.nakshatra,
        lord: info.nakshatra.lord(),
        pada: info.pada,
        position_deg: info.degrees_in_nakshatra,
    }
}

fn sub_within(lord: Graha, start: f64, span: f64, lon: f64) -> SubPosition {
    let p = locate(lord, start, span, lon);
    SubPosition {
        lord: p.lord,
        start_deg: p.start,
        end_deg: p.end,
        position_deg: lon - p.start,
    }
}

/// Sub lord: the star divided in Vimshottari proportion from the star lord.
pub fn sub_of(sidereal_lon_deg: f64) -> SubPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let star = nakshatra_from_longitude(lon).nakshatra;
    sub_within(star.lord(), star.start_deg(), NAKSHATRA_SPAN, lon)
}

/// Sub-sub lord: the sub divided in Vimshottari proportion from the sub lord.
pub fn sub_sub_of(sidereal_lon_deg: f64) -> SubPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let sub = sub_of(lon);
    sub_within(sub.lord, sub.start_deg, sub.span_deg(), lon)
}

/// Resolve every lordship level of a sidereal longitude.
pub fn lordship(sidereal_lon_deg: f64) -> Lordship {
    let lon = normalize_360(sidereal_lon_deg);
    let sub = sub_of(lon);
    Lordship {
        longitude_deg: lon,
        sign: sign_of(lon),
        star: star_of(lon),
        sub,
        sub_sub: sub_within(sub.lord, sub.start_deg, sub.span_deg(), lon),
    }
}
