//! KP ayanamsa: the offset subtracted from tropical longitude.
//!
//! Both KP models share one precession polynomial and differ only in their
//! value at 1900 January 1:
//!
//! `aya = base + (T·50.2388475 + T²·0.000111) / 3600`, with `T` the
//! fractional year minus 1900 (Newcomb's rate in arc-seconds per year).
//!
//! - KP Old (K. S. Krishnamurti): base 22°22'00"
//! - KP New (K. Balachandran): base 22°22'15.7"
//!
//! A manual mode passes a caller-supplied value through unchanged.

use std::fmt;
use std::str::FromStr;

use kp_time::year_fraction;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Reference year of the base values.
pub const BASE_YEAR: f64 = 1900.0;

/// Newcomb's general precession, arc-seconds per year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.238_847_5;

/// Quadratic correction, arc-seconds per year squared.
pub const PRECESSION_ARCSEC_PER_YEAR2: f64 = 0.000_111;

/// KP Old base at 1900: 22°22'00".
pub const KP_OLD_BASE_DEG: f64 = 22.0 + 22.0 / 60.0;

/// KP New base at 1900: 22°22'15.7".
pub const KP_NEW_BASE_DEG: f64 = 22.0 + 22.0 / 60.0 + 15.7 / 3600.0;

/// Ayanamsa model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AyanamshaMode {
    /// KP Old (KSK).
    Old,
    /// KP New (Balachandran).
    #[default]
    New,
    /// Caller-supplied value.
    Manual,
}

/// All modes in display order.
pub const ALL_AYANAMSHA_MODES: [AyanamshaMode; 3] =
    [AyanamshaMode::Old, AyanamshaMode::New, AyanamshaMode::Manual];

impl AyanamshaMode {
    /// Short key used in configuration and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
            Self::Manual => "manual",
        }
    }

    /// Descriptive label reported alongside the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Old => "KP Old (KSK)",
            Self::New => "KP New (Balachandran)",
            Self::Manual => "Manual",
        }
    }

    /// Base value at 1900 for the polynomial models.
    pub const fn base_deg(self) -> Option<f64> {
        match self {
            Self::Old => Some(KP_OLD_BASE_DEG),
            Self::New => Some(KP_NEW_BASE_DEG),
            Self::Manual => None,
        }
    }
}

impl fmt::Display for AyanamshaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AyanamshaMode {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_AYANAMSHA_MODES
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                VedicError::InvalidInput(format!(
                    "unknown ayanamsa mode `{wanted}` (expected old, new or manual)"
                ))
            })
    }
}

/// Mode plus the value used when the mode is manual.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AyanamshaSettings {
    pub mode: AyanamshaMode,
    pub manual_value: Option<f64>,
}

impl AyanamshaSettings {
    pub const fn new(mode: AyanamshaMode, manual_value: Option<f64>) -> Self {
        Self { mode, manual_value }
    }

    /// Reject manual mode without a finite value.
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.mode == AyanamshaMode::Manual {
            match self.manual_value {
                Some(v) if v.is_finite() => {}
                Some(v) => {
                    return Err(VedicError::InvalidInput(format!(
                        "manual ayanamsa value must be finite, got {v}"
                    )));
                }
                None => {
                    return Err(VedicError::InvalidInput(
                        "manual ayanamsa mode requires a value".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Evaluate at a Julian Day.
    pub fn evaluate(&self, jd: f64) -> Result<Ayanamsha, VedicError> {
        ayanamsha(jd, self.mode, self.manual_value)
    }
}

/// An evaluated ayanamsa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ayanamsha {
    pub value_deg: f64,
    pub mode: AyanamshaMode,
    pub label: &'static str,
}

/// Precession accumulated since 1900 January 1, in degrees.
pub fn precession_since_1900_deg(jd: f64) -> f64 {
    let t = year_fraction(jd) - BASE_YEAR;
    (t * PRECESSION_ARCSEC_PER_YEAR + t * t * PRECESSION_ARCSEC_PER_YEAR2) / 3600.0
}

/// Ayanamsa at a Julian Day for the given mode.
///
/// Manual mode returns `manual_value` unchanged; a missing value is
/// [`VedicError::InvalidInput`].
pub fn ayanamsha(
    jd: f64,
    mode: AyanamshaMode,
    manual_value: Option<f64>,
) -> Result<Ayanamsha, VedicError> {
    let value_deg = match mode.base_deg() {
        Some(base) => base + precession_since_1900_deg(jd),
        None => {
            AyanamshaSettings::new(mode, manual_value).validate()?;
            manual_value.unwrap_or_default()
        }
    };
    Ok(Ayanamsha {
        value_deg,
        mode,
        label: mode.label(),
    })
}
