use crate::error::{GeometryError, Result};
use crate::math::{reflect_2d, Point2};

/// An immutable 2D point with tolerance-aware geometric operations.
///
/// Coordinates are validated to be finite at construction, so every derived
/// operation is total. Tolerance-based sameness is the explicit
/// [`Point::is_coincident`] predicate; `PartialEq` is exact bitwise equality
/// of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    position: Point2,
}

impl Point {
    /// Creates a new point from finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteCoordinate`] if either coordinate is
    /// NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { x, y }.into());
        }
        Ok(Self {
            position: Point2::new(x, y),
        })
    }

    pub(crate) fn from_position(position: Point2) -> Self {
        Self { position }
    }

    /// The x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// The y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// The point as a nalgebra [`Point2`].
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.position - other.position).norm()
    }

    /// Whether the two points are the same location within `point_epsilon`.
    #[must_use]
    pub fn is_coincident(&self, other: &Point, point_epsilon: f64) -> bool {
        self.distance_to(other) <= point_epsilon
    }

    /// Mirror image across the axis through `origin` at `axis_angle` radians.
    #[must_use]
    pub fn reflect(&self, origin: &Point, axis_angle: f64) -> Point {
        Self::from_position(reflect_2d::reflect_across_axis(
            &self.position,
            &origin.position,
            axis_angle,
        ))
    }

    /// Rotation by `angle` radians counter-clockwise around `around`.
    #[must_use]
    pub fn rotate(&self, angle: f64, around: &Point) -> Point {
        Self::from_position(reflect_2d::rotate_about(
            &self.position,
            &around.position,
            angle,
        ))
    }
}
