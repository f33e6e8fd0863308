//! Shared angle helpers. All angles are degrees.

/// Normalize an angle to [0, 360) degrees.
///
/// A tiny negative input whose wrap rounds up to exactly 360 maps to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap a difference to (-180, 180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    normalize_to_pm180(a - b).abs()
}

/// Arc length travelled forward (increasing longitude) from `from` to `to`, in [0, 360).
pub fn arc_forward(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Whether `target` lies on the closed forward arc from `start` to `end`.
///
/// When `start > end` the arc wraps through 0°.
pub fn is_between_forward(target: f64, start: f64, end: f64) -> bool {
    if start <= end {
        start <= target && target <= end
    } else {
        target >= start || target <= end
    }
}
