use crate::math::{angle_2d, Vector2};

use super::Point;

/// A confirmed mirror axis of a point set.
///
/// Canonical form: an angle in `[0, π)` plus the point the axis passes
/// through, which is always the centroid of the analyzed set. Instances are
/// created only by the analyzer as verified results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryLine {
    angle: f64,
    through: Point,
}

impl SymmetryLine {
    pub(crate) fn new(angle: f64, through: Point) -> Self {
        Self {
            angle: angle_2d::normalize_axis_angle(angle),
            through,
        }
    }

    /// Axis angle in radians, in `[0, π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// A point the axis passes through (the centroid of the analyzed set).
    #[must_use]
    pub fn through(&self) -> Point {
        self.through
    }

    /// Unit direction vector of the axis.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        let (s, c) = self.angle.sin_cos();
        Vector2::new(c, s)
    }

    /// Whether two lines describe the same axis within `angle_epsilon`
    /// (mod π).
    #[must_use]
    pub fn same_axis(&self, other: &SymmetryLine, angle_epsilon: f64) -> bool {
        angle_2d::axis_angle_distance(self.angle, other.angle) <= angle_epsilon
    }

    /// The two points at ±`radius` along the axis from the through-point.
    ///
    /// Display consumers use these to draw the axis clipped to the extent of
    /// the point set.
    #[must_use]
    pub fn endpoints(&self, radius: f64) -> (Point, Point) {
        let dir = self.direction() * radius;
        (
            Point::from_position(self.through.position() + dir),
            Point::from_position(self.through.position() - dir),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use super::*;

    fn line(angle: f64) -> SymmetryLine {
        SymmetryLine::new(angle, Point::new(0.0, 0.0).unwrap())
    }

    #[test]
    fn angle_is_canonicalized() {
        assert_relative_eq!(line(PI + FRAC_PI_4).angle(), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(line(-FRAC_PI_2).angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn same_axis_within_epsilon() {
        assert!(line(0.0).same_axis(&line(1e-7), 1e-6));
        assert!(!line(0.0).same_axis(&line(0.1), 1e-6));
    }

    #[test]
    fn same_axis_wraps_mod_pi() {
        assert!(line(1e-7).same_axis(&line(PI - 1e-7), 1e-6));
    }

    #[test]
    fn endpoints_straddle_the_through_point() {
        let l = SymmetryLine::new(FRAC_PI_2, Point::new(1.0, 2.0).unwrap());
        let (a, b) = l.endpoints(3.0);
        assert_relative_eq!(a.x(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(a.y(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(b.x(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(b.y(), -1.0, epsilon = 1e-12);
    }
}
