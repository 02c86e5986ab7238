//! Result boundary: a versioned, serializable snapshot of one analysis.
//!
//! The kernel performs no rendering; display front-ends consume this report
//! instead. It carries the point coordinates, the centroid, the set radius,
//! and each axis as both an angle and a drawable segment clipped to the set
//! radius.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalyzerConfig, Symmetry};
use crate::error::{ReportError, Result};
use crate::geometry::{PointSet, SymmetryLine};

/// Identifies the report layout for downstream tooling.
pub const REPORT_SCHEMA_V1: &str = "mirolis.report.v1";

/// Snapshot of one completed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub schema_version: String,
    pub config: ConfigSnapshot,
    pub point_count: usize,
    pub points: Vec<[f64; 2]>,
    pub centroid: [f64; 2],
    /// Maximum centroid-to-point distance; axis segments are clipped to it.
    pub radius: f64,
    pub symmetry: SymmetrySnapshot,
}

/// Echo of the tolerances the analysis ran with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub point_epsilon: f64,
    pub angle_epsilon: f64,
}

/// Tagged mirror of [`Symmetry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymmetrySnapshot {
    /// Every line through `center` is an axis.
    Infinite { center: [f64; 2] },
    /// The verified axes, ascending by angle.
    Lines { lines: Vec<LineSnapshot> },
}

/// One axis in drawable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub angle_radians: f64,
    pub angle_degrees: f64,
    pub through: [f64; 2],
    /// Segment endpoints at ±radius from the through point.
    pub endpoints: [[f64; 2]; 2],
}

impl AnalysisReport {
    /// Builds the snapshot for one completed analysis of `set`.
    #[must_use]
    pub fn new(set: &PointSet, config: &AnalyzerConfig, symmetry: &Symmetry) -> Self {
        let centroid = set
            .centroid()
            .map_or([0.0, 0.0], |c| [c.x(), c.y()]);
        let radius = set.radius().unwrap_or(0.0);
        let symmetry = match symmetry {
            Symmetry::Infinite { center } => SymmetrySnapshot::Infinite {
                center: [center.x(), center.y()],
            },
            Symmetry::Lines(lines) => SymmetrySnapshot::Lines {
                lines: lines
                    .iter()
                    .map(|line| LineSnapshot::new(line, radius))
                    .collect(),
            },
        };
        Self {
            schema_version: REPORT_SCHEMA_V1.to_string(),
            config: ConfigSnapshot {
                point_epsilon: config.point_epsilon(),
                angle_epsilon: config.angle_epsilon(),
            },
            point_count: set.len(),
            points: set.points().iter().map(|p| [p.x(), p.y()]).collect(),
            centroid,
            radius,
            symmetry,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialize(e).into())
    }

    /// Writes the report as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] or [`ReportError::Io`].
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| {
            ReportError::Io {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
    }
}

impl LineSnapshot {
    fn new(line: &SymmetryLine, radius: f64) -> Self {
        let (a, b) = line.endpoints(radius);
        Self {
            angle_radians: line.angle(),
            angle_degrees: line.angle().to_degrees(),
            through: [line.through().x(), line.through().y()],
            endpoints: [[a.x(), a.y()], [b.x(), b.y()]],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::analysis::find_symmetry_lines;
    use crate::geometry::Point;

    use super::*;

    fn square() -> PointSet {
        PointSet::new(
            [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)]
                .iter()
                .map(|&(x, y)| Point::new(x, y).unwrap())
                .collect(),
        )
    }

    #[test]
    fn square_report_carries_four_drawable_axes() {
        let set = square();
        let config = AnalyzerConfig::new(1e-6, 1e-4).unwrap();
        let symmetry = find_symmetry_lines(&set, &config).unwrap();
        let report = AnalysisReport::new(&set, &config, &symmetry);

        assert_eq!(report.schema_version, REPORT_SCHEMA_V1);
        assert_eq!(report.point_count, 4);
        assert_relative_eq!(report.radius, 2.0_f64.sqrt(), epsilon = 1e-12);

        let SymmetrySnapshot::Lines { lines } = &report.symmetry else {
            panic!("expected finite axes");
        };
        assert_eq!(lines.len(), 4);
        assert_relative_eq!(lines[0].angle_degrees, 0.0, epsilon = 1e-9);
        assert_relative_eq!(lines[2].angle_degrees, 90.0, epsilon = 1e-9);
        // Endpoints straddle the centroid at the set radius.
        for line in lines {
            let [a, b] = line.endpoints;
            let mid = [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0];
            assert_relative_eq!(mid[0], report.centroid[0], epsilon = 1e-9);
            assert_relative_eq!(mid[1], report.centroid[1], epsilon = 1e-9);
        }
    }

    #[test]
    fn infinite_outcome_serializes_as_tagged_variant() {
        let set = PointSet::new(vec![Point::new(2.0, 3.0).unwrap()]);
        let config = AnalyzerConfig::new(1e-6, 1e-4).unwrap();
        let symmetry = find_symmetry_lines(&set, &config).unwrap();
        let report = AnalysisReport::new(&set, &config, &symmetry);

        let json = report.to_json_string().unwrap();
        assert!(json.contains("\"kind\": \"infinite\""), "json={json}");
    }

    #[test]
    fn report_writes_to_disk() {
        let set = square();
        let config = AnalyzerConfig::new(1e-6, 1e-4).unwrap();
        let symmetry = find_symmetry_lines(&set, &config).unwrap();
        let report = AnalysisReport::new(&set, &config, &symmetry);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write_json(&path).unwrap();
        let loaded: AnalysisReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.point_count, 4);
    }
}
