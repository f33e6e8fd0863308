//! Level-0 generation: the mahadasha sequence.

use crate::graha::Graha;
use crate::vimshottari::cycle_from;

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// `count` contiguous mahadashas from `reference_jd`.
///
/// The first runs for `fraction` of its lord's full period; the rest follow
/// the cyclic order with full periods, wrapping as often as needed.
pub fn mahadasha_sequence(
    lord: Graha,
    fraction: f64,
    reference_jd: f64,
    count: usize,
) -> Vec<DashaPeriod> {
    let mut periods = Vec::with_capacity(count);
    let mut cursor = reference_jd;
    for (i, (graha, years)) in cycle_from(lord).cycle().take(count).enumerate() {
        let span_years = if i == 0 { fraction * years } else { years };
        let end = cursor + span_years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord: graha,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
        });
        cursor = end;
    }
    periods
}
