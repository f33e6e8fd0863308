//! The Vimshottari period table.
//!
//! Nine grahas in fixed cyclic order with their full periods in years,
//! summing to 120. The same table drives star lords, the proportional
//! sub/sub-sub division of arcs and every level of the dasha tree.

use crate::graha::Graha;

/// Full cycle length in years.
pub const TOTAL_YEARS: f64 = 120.0;

/// Cyclic order with full periods in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Position of a graha in the cyclic order.
pub const fn sequence_index(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full period of a graha in years.
pub const fn period_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_index(graha)].1
}

/// The nine `(graha, years)` entries starting at `lord` and wrapping.
pub fn cycle_from(lord: Graha) -> impl Iterator<Item = (Graha, f64)> + Clone {
    let start = sequence_index(lord);
    (0..VIMSHOTTARI_SEQUENCE.len()).map(move |i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_sum_to_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert_eq!(total, TOTAL_YEARS);
    }

    #[test]
    fn index_matches_table() {
        for (i, (g, _)) in VIMSHOTTARI_SEQUENCE.iter().enumerate() {
            assert_eq!(sequence_index(*g), i);
        }
    }

    #[test]
    fn cycle_wraps() {
        let lords: Vec<Graha> = cycle_from(Graha::Shani).map(|(g, _)| g).collect();
        assert_eq!(lords.len(), 9);
        assert_eq!(lords[0], Graha::Shani);
        assert_eq!(lords[1], Graha::Buddh);
        assert_eq!(lords[2], Graha::Ketu);
        assert_eq!(lords[8], Graha::Guru);
    }

    #[test]
    fn period_lookup() {
        assert_eq!(period_years(Graha::Shukra), 20.0);
        assert_eq!(period_years(Graha::Surya), 6.0);
    }
}
