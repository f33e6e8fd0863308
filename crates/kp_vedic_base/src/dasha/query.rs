//! Lookup of the periods running at a query instant.

use serde::Serialize;

use super::mahadasha::mahadasha_sequence;
use super::subperiod::subdivide;
use super::types::DashaPeriod;
use crate::graha::Graha;

/// The period containing `jd`, by half-open `[start, end)` membership.
pub fn locate_current(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(jd))
}

/// The running Mahadasha, Antardasha, Pratyantardasha and Sookshmadasha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentDasha {
    pub query_jd: f64,
    /// Root first.
    pub chain: Vec<DashaPeriod>,
    /// Lords joined with `-`, e.g. `Venus-Sun-Moon-Mars`.
    pub label: String,
}

impl CurrentDasha {
    pub fn lords(&self) -> impl Iterator<Item = Graha> + '_ {
        self.chain.iter().map(|p| p.lord)
    }
}

/// Descend from the root periods to the deepest level containing `jd`.
///
/// Returns `None` when `jd` falls outside every root period.
pub fn current_chain(roots: &[DashaPeriod], jd: f64) -> Option<CurrentDasha> {
    let mut node = *locate_current(roots, jd)?;
    let mut chain = vec![node];
    loop {
        let children = subdivide(&node);
        if children.is_empty() {
            break;
        }
        // A query within rounding of the parent end resolves to the last child.
        node = locate_current(&children, jd)
            .copied()
            .unwrap_or(children[children.len() - 1]);
        chain.push(node);
    }
    let label = chain
        .iter()
        .map(|p| p.lord.english_name())
        .collect::<Vec<_>>()
        .join("-");
    Some(CurrentDasha {
        query_jd: jd,
        chain,
        label,
    })
}

/// Current chain from a balance, scanning `cycles` full mahadasha cycles.
pub fn current_dasha(
    lord: Graha,
    fraction: f64,
    reference_jd: f64,
    query_jd: f64,
    cycles: usize,
) -> Option<CurrentDasha> {
    let roots = mahadasha_sequence(lord, fraction, reference_jd, cycles * 9);
    current_chain(&roots, query_jd)
}
