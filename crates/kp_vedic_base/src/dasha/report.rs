//! Complete Vimshottari report: balance, mahadashas with antardashas and the
//! chain running at a query instant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::balance::{DashaBalance, dasha_balance};
use super::mahadasha::mahadasha_sequence;
use super::query::{CurrentDasha, current_chain};
use super::subperiod::subdivide;
use super::types::DashaPeriod;
use crate::error::VedicError;
use crate::vimshottari::VIMSHOTTARI_SEQUENCE;

/// Upper bound on [`DashaConfig::mahadasha_count`].
pub const MAX_MAHADASHA_COUNT: usize = 1000;
/// Upper bound on [`DashaConfig::lookup_cycles`].
pub const MAX_LOOKUP_CYCLES: usize = 10;

/// Tunables for [`full_dasha_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    /// Mahadashas listed in the report.
    pub mahadasha_count: usize,
    /// Full nine-period cycles scanned when resolving the current chain.
    pub lookup_cycles: usize,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            mahadasha_count: 9,
            lookup_cycles: 2,
        }
    }
}

impl DashaConfig {
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(1..=MAX_MAHADASHA_COUNT).contains(&self.mahadasha_count) {
            return Err(VedicError::InvalidInput(format!(
                "dasha.mahadasha_count must be in 1..={MAX_MAHADASHA_COUNT}, got {}",
                self.mahadasha_count
            )));
        }
        if !(1..=MAX_LOOKUP_CYCLES).contains(&self.lookup_cycles) {
            return Err(VedicError::InvalidInput(format!(
                "dasha.lookup_cycles must be in 1..={MAX_LOOKUP_CYCLES}, got {}",
                self.lookup_cycles
            )));
        }
        Ok(())
    }

    /// Mahadashas generated: enough to list `mahadasha_count` and to scan
    /// `lookup_cycles` full cycles.
    fn scanned_periods(&self) -> Result<usize, VedicError> {
        self.lookup_cycles
            .checked_mul(VIMSHOTTARI_SEQUENCE.len())
            .map(|cycle_periods| cycle_periods.max(self.mahadasha_count))
            .ok_or_else(|| {
                VedicError::InvalidInput("dasha.lookup_cycles is too large".to_string())
            })
    }
}

/// A mahadasha and its nine antardashas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MahadashaEntry {
    pub period: DashaPeriod,
    pub antardashas: Vec<DashaPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaReport {
    pub balance: DashaBalance,
    pub mahadashas: Vec<MahadashaEntry>,
    /// `None` when the query lies before the reference instant or past the
    /// scanned cycles.
    pub current: Option<CurrentDasha>,
}

/// Build the report for a Moon at `moon_sidereal_lon` at `reference_jd`.
pub fn full_dasha_report(
    moon_sidereal_lon: f64,
    reference_jd: f64,
    query_jd: f64,
    config: &DashaConfig,
) -> Result<DashaReport, VedicError> {
    config.validate()?;
    if !moon_sidereal_lon.is_finite() || !reference_jd.is_finite() || !query_jd.is_finite() {
        return Err(VedicError::InvalidInput(
            "dasha inputs must be finite".to_string(),
        ));
    }

    let balance = dasha_balance(moon_sidereal_lon, reference_jd);
    let scanned = config.scanned_periods()?;
    let roots = mahadasha_sequence(balance.lord, balance.fraction, reference_jd, scanned);

    let mahadashas = roots
        .iter()
        .take(config.mahadasha_count)
        .map(|period| MahadashaEntry {
            period: *period,
            antardashas: subdivide(period),
        })
        .collect();
    let current = current_chain(&roots, query_jd);
    debug!(
        lord = balance.lord.english_name(),
        fraction = balance.fraction,
        current = current.as_ref().map(|c| c.label.as_str()),
        "dasha report built"
    );

    Ok(DashaReport {
        balance,
        mahadashas,
        current,
    })
}
