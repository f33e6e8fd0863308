//! Child periods: one proportional rule for every level below the root.

use crate::subdivision::{self, Days};

use super::types::DashaPeriod;

/// The nine children of `parent`, proportional to the Vimshottari periods
/// and starting from the parent's own lord. The last child ends exactly at
/// the parent's end. Sookshmadasha periods have no children.
pub fn subdivide(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    subdivision::subdivide(
        parent.lord,
        Days(parent.start_jd),
        Days(parent.duration_days()),
    )
    .iter()
    .enumerate()
    .map(|(i, portion)| DashaPeriod {
        lord: portion.lord,
        start_jd: portion.start.0,
        end_jd: if i == 8 { parent.end_jd } else { portion.end.0 },
        level: child_level,
        order: (i as u16) + 1,
    })
    .collect()
}
