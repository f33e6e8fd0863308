//! Dasha balance at the reference instant from the Moon's star position.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
use crate::vimshottari::period_years;

use super::types::DAYS_PER_YEAR;

/// The mahadasha running at the reference instant and how much of it remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaBalance {
    /// Star lord of the Moon's nakshatra.
    pub lord: Graha,
    pub nakshatra: Nakshatra,
    /// Degrees the Moon has travelled into its star.
    pub position_in_star_deg: f64,
    /// Remaining fraction of the lord's period, (0, 1].
    pub fraction: f64,
    pub balance_years: f64,
    /// Reference instant.
    pub reference_jd: f64,
    /// Nominal start of the running mahadasha (reference minus elapsed).
    pub period_start_jd: f64,
    /// End of the running mahadasha (reference plus balance).
    pub period_end_jd: f64,
}

impl DashaBalance {
    pub fn balance_days(&self) -> f64 {
        self.balance_years * DAYS_PER_YEAR
    }
}

/// Balance of the Moon's star lord period at `reference_jd`.
///
/// `fraction = (span − position_in_star) / span`.
pub fn dasha_balance(moon_sidereal_lon: f64, reference_jd: f64) -> DashaBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = info.nakshatra.lord();
    let fraction = (NAKSHATRA_SPAN - info.degrees_in_nakshatra) / NAKSHATRA_SPAN;
    let full_years = period_years(lord);
    let balance_years = fraction * full_years;
    let elapsed_years = full_years - balance_years;

    DashaBalance {
        lord,
        nakshatra: info.nakshatra,
        position_in_star_deg: info.degrees_in_nakshatra,
        fraction,
        balance_years,
        reference_jd,
        period_start_jd: reference_jd - elapsed_years * DAYS_PER_YEAR,
        period_end_jd: reference_jd + balance_years * DAYS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_ashwini_is_full_ketu() {
        let b = dasha_balance(0.0, 2_451_545.0);
        assert_eq!(b.lord, Graha::Ketu);
        assert!((b.fraction - 1.0).abs() < 1e-12);
        assert!((b.balance_years - 7.0).abs() < 1e-12);
        assert!((b.period_start_jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn boundary_starts_next_star_in_full() {
        let b = dasha_balance(NAKSHATRA_SPAN, 2_451_545.0);
        assert_eq!(b.nakshatra, Nakshatra::Bharani);
        assert_eq!(b.lord, Graha::Shukra);
        assert!((b.fraction - 1.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_is_half() {
        let b = dasha_balance(40.0 + NAKSHATRA_SPAN / 2.0, 2_451_545.0);
        assert_eq!(b.lord, Graha::Chandra);
        assert!((b.fraction - 0.5).abs() < 1e-12);
        assert!((b.balance_years - 5.0).abs() < 1e-12);
        let span = b.period_end_jd - b.period_start_jd;
        assert!((span - 10.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn wraps_negative() {
        let b = dasha_balance(-1.0, 2_451_545.0);
        assert_eq!(b.nakshatra, Nakshatra::Revati);
        assert_eq!(b.lord, Graha::Buddh);
    }
}
