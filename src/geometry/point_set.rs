use crate::math::Point2;

use super::Point;

/// An immutable ordered collection of points with derived geometric
/// properties.
///
/// Transformations never mutate; they produce new sets. Membership-style
/// equality is the explicit tolerance predicate [`PointSet::equals_as_set`],
/// while `PartialEq` is exact per-index equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

/// A point annotated with its polar signature relative to a reference point.
#[derive(Debug, Clone, Copy)]
struct RankedPoint {
    distance: f64,
    angle: f64,
    point: Point,
}

impl PointSet {
    /// Creates a point set from an ordered sequence of points (n ≥ 0).
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in construction order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Arithmetic mean of all coordinates; `None` for the empty set.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let mut sx = 0.0;
        let mut sy = 0.0;
        for point in &self.points {
            sx += point.x();
            sy += point.y();
        }
        let n = self.points.len() as f64;
        Some(Point::from_position(Point2::new(sx / n, sy / n)))
    }

    /// Maximum distance from the centroid to any point; `None` when empty.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        let centroid = self.centroid()?;
        Some(
            self.points
                .iter()
                .map(|point| point.distance_to(&centroid))
                .fold(0.0, f64::max),
        )
    }

    /// Reflects every point across the axis through `origin` at `axis_angle`
    /// radians, preserving length and per-index ordering.
    #[must_use]
    pub fn reflect_all(&self, origin: &Point, axis_angle: f64) -> PointSet {
        Self {
            points: self
                .points
                .iter()
                .map(|point| point.reflect(origin, axis_angle))
                .collect(),
        }
    }

    /// True iff every pair of points is mutually coincident within
    /// `point_epsilon`, i.e. the whole set occupies a single effective
    /// location. False for the empty set.
    #[must_use]
    pub fn is_collapsed(&self, point_epsilon: f64) -> bool {
        for (i, a) in self.points.iter().enumerate() {
            for b in &self.points[i + 1..] {
                if !a.is_coincident(b, point_epsilon) {
                    return false;
                }
            }
        }
        !self.points.is_empty()
    }

    /// Tolerance-aware set equality: true iff there is a bijection pairing
    /// every point of `self` with a point of `other` such that each pair is
    /// coincident within `point_epsilon`.
    ///
    /// Uses the radius signature relative to the shared centroid: both
    /// sequences are sorted by (distance, angle) and compared rank-for-rank,
    /// which is valid because any isometry mapping one set onto the other
    /// preserves distance to the centroid. Signature ties at the tolerance
    /// boundary can swap ranks; those fall back to a deterministic greedy
    /// pass that matches each point against the still-unmatched candidates
    /// inside its distance window, so coincident duplicates consume exactly
    /// one partner each.
    #[must_use]
    pub fn equals_as_set(&self, other: &PointSet, point_epsilon: f64) -> bool {
        if self.points.len() != other.points.len() {
            return false;
        }
        let Some(reference) = self.centroid() else {
            // Both empty.
            return true;
        };
        match other.centroid() {
            Some(c) if c.is_coincident(&reference, point_epsilon) => {}
            _ => return false,
        }

        let ranked_a = rank_by_signature(&self.points, &reference);
        let ranked_b = rank_by_signature(&other.points, &reference);

        if ranked_a
            .iter()
            .zip(&ranked_b)
            .all(|(a, b)| a.point.is_coincident(&b.point, point_epsilon))
        {
            return true;
        }
        greedy_match(&ranked_a, &ranked_b, point_epsilon)
    }
}

/// Sorts points by (distance to reference, angle to reference), with raw
/// coordinates as the final tie-break so the order is total and identical
/// across runs.
fn rank_by_signature(points: &[Point], reference: &Point) -> Vec<RankedPoint> {
    let mut ranked: Vec<RankedPoint> = points
        .iter()
        .map(|&point| {
            let v = point.position() - reference.position();
            RankedPoint {
                distance: v.norm(),
                angle: v.y.atan2(v.x),
                point,
            }
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then_with(|| a.angle.total_cmp(&b.angle))
            .then_with(|| a.point.x().total_cmp(&b.point.x()))
            .then_with(|| a.point.y().total_cmp(&b.point.y()))
    });
    ranked
}

/// Deterministic bijective matching: each left point, in rank order, claims
/// the nearest still-unmatched right point whose centroid distance lies
/// within the epsilon window of its own. Fails as soon as any point has no
/// partner left.
fn greedy_match(left: &[RankedPoint], right: &[RankedPoint], point_epsilon: f64) -> bool {
    let mut taken = vec![false; right.len()];
    for a in left {
        let lo = right.partition_point(|b| b.distance < a.distance - point_epsilon);
        let mut best: Option<(usize, f64)> = None;
        for (offset, b) in right[lo..].iter().enumerate() {
            if b.distance > a.distance + point_epsilon {
                break;
            }
            let idx = lo + offset;
            if taken[idx] {
                continue;
            }
            let d = a.point.distance_to(&b.point);
            if d <= point_epsilon && best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((idx, d));
            }
        }
        match best {
            Some((idx, _)) => taken[idx] = true,
            None => return false,
        }
    }
    true
}
