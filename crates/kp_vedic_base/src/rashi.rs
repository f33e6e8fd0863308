//! Rashi (zodiac sign), DMS conversion and longitude formatting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 degrees of sidereal longitude.

use serde::{Serialize, Serializer};

use crate::graha::{Graha, rashi_lord};
use crate::util::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha of the sign.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    /// Start longitude of the sign.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// A sidereal longitude resolved to its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Sign containing a sidereal longitude; signs are half-open 30° spans from 0° Aries.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * RASHI_SPAN;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// Hundredths of an arc-second per degree.
const CENTI_ARCSEC_PER_DEG: f64 = 360_000.0;

/// Split an angle into whole degrees, minutes and hundredths of arc-seconds,
/// rounding once at the last displayed digit so seconds never read 60.00.
fn split_centi_arcsec(deg: f64) -> (u64, u64, u64) {
    let total = (deg.abs() * CENTI_ARCSEC_PER_DEG).round() as u64;
    (total / 360_000, (total % 360_000) / 6_000, total % 6_000)
}

/// Format an angle as `D°MM'SS.SS"`, with a leading `-` for negative input.
pub fn format_dms(deg: f64) -> String {
    let (d, m, cs) = split_centi_arcsec(deg);
    let sign = if deg < 0.0 && (d, m, cs) != (0, 0, 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}{d}°{m:02}'{:05.2}\"", cs as f64 / 100.0)
}

/// Format a longitude as `DD°MM'SS.SS" Sign`, the position inside its sign.
pub fn format_longitude(lon_deg: f64) -> String {
    let full_circle = 360 * 360_000;
    let total = (normalize_360(lon_deg) * CENTI_ARCSEC_PER_DEG).round() as u64 % full_circle;
    let sign_units = 30 * 360_000;
    let rashi = ALL_RASHIS[(total / sign_units) as usize];
    let within = total % sign_units;
    format!(
        "{:02}°{:02}'{:05.2}\" {}",
        within / 360_000,
        (within % 360_000) / 6_000,
        (within % 6_000) as f64 / 100.0,
        rashi.western_name()
    )
}
