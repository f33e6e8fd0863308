//! Proportional Vimshottari subdivision over any measure.
//!
//! One primitive splits a span into nine portions proportional to the
//! Vimshottari periods, starting at a given lord and wrapping through the
//! cyclic order. Arc degrees use it for sub and sub-sub lords; Julian Days
//! use it for every dasha level below the mahadasha.

use std::ops::{Add, Sub};

use serde::Serialize;

use crate::graha::Graha;
use crate::vimshottari::{TOTAL_YEARS, cycle_from};

/// A quantity that can be split proportionally.
pub trait Measure: Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> {
    /// Scale by a dimensionless factor.
    fn scale(self, factor: f64) -> Self;
}

/// Arc in degrees.
impl Measure for f64 {
    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

/// A point or span on the Julian Day axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Days(pub f64);

impl Add for Days {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Days {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Measure for Days {
    fn scale(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

/// One of the nine proportional pieces of a span. `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portion<M> {
    pub lord: Graha,
    pub start: M,
    pub end: M,
}

impl<M: Measure> Portion<M> {
    pub fn extent(&self) -> M {
        self.end - self.start
    }
}

/// Split `[start, start + extent)` into nine contiguous portions, the first
/// ruled by `lord`. The last portion ends exactly at `start + extent`.
pub fn subdivide<M: Measure>(lord: Graha, start: M, extent: M) -> [Portion<M>; 9] {
    let end = start + extent;
    let mut parts = [Portion {
        lord,
        start,
        end: start,
    }; 9];
    let mut cursor = start;
    for (slot, (graha, years)) in parts.iter_mut().zip(cycle_from(lord)) {
        let next = cursor + extent.scale(years / TOTAL_YEARS);
        *slot = Portion {
            lord: graha,
            start: cursor,
            end: next,
        };
        cursor = next;
    }
    parts[8].end = end;
    parts
}

/// The portion containing `point`.
///
/// Uses a strict `point < end` test, so a point on a boundary belongs to the
/// following portion. A point at or past the end resolves to the last one.
pub fn locate<M: Measure>(lord: Graha, start: M, extent: M, point: M) -> Portion<M> {
    let parts = subdivide(lord, start, extent);
    parts
        .iter()
        .copied()
        .find(|p| point < p.end)
        .unwrap_or(parts[8])
}
