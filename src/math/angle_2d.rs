use std::f64::consts::PI;

/// Folds an angle into the canonical axis range `[0, π)`.
///
/// A mirror axis has no orientation, so angles that differ by π describe the
/// same line.
#[must_use]
pub fn normalize_axis_angle(angle: f64) -> f64 {
    let folded = angle.rem_euclid(PI);
    // rem_euclid of a tiny negative angle can round up to π itself.
    if folded >= PI {
        0.0
    } else {
        folded
    }
}

/// Minimal angular separation between two axis angles, mod π.
///
/// The result is in `[0, π/2]`: angles just below π are close to angles just
/// above 0 because they describe nearly the same line.
#[must_use]
pub fn axis_angle_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_axis_angle(a) - normalize_axis_angle(b)).abs();
    diff.min(PI - diff)
}
