use std::f64::consts::FRAC_PI_2;

use crate::geometry::{Point, PointSet};
use crate::math::angle_2d;

use super::AnalyzerConfig;

/// Generates the raw candidate axis angles for a point set.
///
/// Every mirror axis of a finite set passes through the centroid, so a
/// candidate is a single angle. Two families cover all possibilities:
///
/// - the centroid→point direction for each point off the centroid (axes
///   passing through a vertex),
/// - the perpendicular of the chord between two points equidistant from the
///   centroid (axes passing between a mirror pair).
///
/// Candidates are over-generated on purpose; verification rejects the false
/// ones, so a pair whose true bisector misses the centroid costs one wasted
/// check and nothing else.
pub(crate) fn candidate_angles(
    set: &PointSet,
    centroid: &Point,
    config: &AnalyzerConfig,
) -> Vec<f64> {
    let eps = config.point_epsilon();
    let points = set.points();
    let radial: Vec<f64> = points
        .iter()
        .map(|point| point.distance_to(centroid))
        .collect();

    let mut angles = Vec::new();
    for (i, point) in points.iter().enumerate() {
        if radial[i] <= eps {
            continue;
        }
        let v = point.position() - centroid.position();
        angles.push(angle_2d::normalize_axis_angle(v.y.atan2(v.x)));
    }
    for i in 0..points.len() {
        if radial[i] <= eps {
            continue;
        }
        for j in (i + 1)..points.len() {
            if radial[j] <= eps || (radial[i] - radial[j]).abs() > eps {
                continue;
            }
            if points[i].is_coincident(&points[j], eps) {
                continue;
            }
            let chord = points[j].position() - points[i].position();
            angles.push(angle_2d::normalize_axis_angle(
                chord.y.atan2(chord.x) + FRAC_PI_2,
            ));
        }
    }
    angles
}

/// Deduplicates candidate angles by clustering within `angle_epsilon`
/// (mod π), keeping the smallest angle of each cluster.
///
/// Returns the representatives in ascending order.
pub(crate) fn dedup_angles(mut angles: Vec<f64>, angle_epsilon: f64) -> Vec<f64> {
    angles.sort_by(f64::total_cmp);
    let mut representatives: Vec<f64> = Vec::new();
    for angle in angles {
        match representatives.last() {
            Some(&rep) if angle - rep <= angle_epsilon => {}
            _ => representatives.push(angle),
        }
    }
    // The axis space wraps at π: a trailing cluster near π merges into a
    // leading cluster near 0.
    if representatives.len() > 1 {
        let first = representatives[0];
        let last = representatives[representatives.len() - 1];
        if angle_2d::axis_angle_distance(first, last) <= angle_epsilon {
            representatives.pop();
        }
    }
    representatives
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    const ANGLE_EPS: f64 = 1e-4;

    fn contains_angle(angles: &[f64], target: f64) -> bool {
        angles
            .iter()
            .any(|&a| angle_2d::axis_angle_distance(a, target) <= ANGLE_EPS)
    }

    fn square() -> PointSet {
        PointSet::new(
            [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]
                .iter()
                .map(|&(x, y)| Point::new(x, y).unwrap())
                .collect(),
        )
    }

    #[test]
    fn square_candidates_cover_all_four_axes() {
        let set = square();
        let centroid = set.centroid().unwrap();
        let config = AnalyzerConfig::new(1e-6, ANGLE_EPS).unwrap();
        let angles = candidate_angles(&set, &centroid, &config);

        // Diagonals come from centroid→vertex directions, the horizontal and
        // vertical axes from chord perpendiculars of adjacent vertices.
        for target in [0.0, FRAC_PI_4, FRAC_PI_2, 3.0 * FRAC_PI_4] {
            assert!(contains_angle(&angles, target), "missing {target}");
        }
    }

    #[test]
    fn points_on_centroid_generate_nothing() {
        let set = PointSet::new(vec![Point::new(0.0, 0.0).unwrap()]);
        let centroid = set.centroid().unwrap();
        let config = AnalyzerConfig::new(1e-6, ANGLE_EPS).unwrap();
        assert!(candidate_angles(&set, &centroid, &config).is_empty());
    }

    #[test]
    fn unequal_radii_pairs_are_skipped() {
        // Collinear set: only the point-direction family applies; the two
        // off-centroid points have different radii so no chord candidate.
        let set = PointSet::new(
            [(1.0, 0.0), (-2.0, 0.0), (1.0, 0.0)]
                .iter()
                .map(|&(x, y)| Point::new(x, y).unwrap())
                .collect(),
        );
        let centroid = set.centroid().unwrap();
        let config = AnalyzerConfig::new(1e-6, ANGLE_EPS).unwrap();
        let angles = candidate_angles(&set, &centroid, &config);
        // Coincident pair at (1, 0) shares a radius but produces no chord;
        // every candidate is the x-axis direction itself.
        assert!(angles.iter().all(|&a| a.abs() <= ANGLE_EPS));
    }

    #[test]
    fn dedup_collapses_near_duplicates() {
        let deduped = dedup_angles(vec![0.5, 0.5 + 1e-7, 0.5 - 1e-7, 1.2], 1e-6);
        assert_eq!(deduped.len(), 2);
        assert!((deduped[0] - (0.5 - 1e-7)).abs() < 1e-12);
        assert!((deduped[1] - 1.2).abs() < 1e-12);
    }

    #[test]
    fn dedup_keeps_separated_angles() {
        let deduped = dedup_angles(vec![0.0, FRAC_PI_4, FRAC_PI_2], 1e-6);
        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn dedup_merges_across_the_pi_wrap() {
        let deduped = dedup_angles(vec![1e-8, PI - 1e-8], 1e-6);
        assert_eq!(deduped.len(), 1, "deduped={deduped:?}");
    }

    #[test]
    fn dedup_of_empty_input_is_empty() {
        assert!(dedup_angles(Vec::new(), 1e-6).is_empty());
    }
}
