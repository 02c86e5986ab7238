use crate::error::{AnalysisError, Result};
use crate::geometry::{Point, PointSet, SymmetryLine};

use super::{candidates, AnalyzerConfig};

/// Outcome of a symmetry analysis.
///
/// A set that collapses to a single effective location has every line
/// through that location as a mirror axis. That outcome is a distinct
/// variant rather than a sentinel list, so callers must branch before
/// iterating and can never confuse "no symmetry" with "every line is a
/// symmetry".
#[derive(Debug, Clone, PartialEq)]
pub enum Symmetry {
    /// Every line through `center` is a mirror axis.
    Infinite {
        /// The single effective location of the collapsed set.
        center: Point,
    },
    /// The verified mirror axes, sorted ascending by angle. May be empty.
    Lines(Vec<SymmetryLine>),
}

impl Symmetry {
    /// Whether this is the infinite-symmetry outcome.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Symmetry::Infinite { .. })
    }

    /// The finite axis list, or `None` for the infinite outcome.
    #[must_use]
    pub fn lines(&self) -> Option<&[SymmetryLine]> {
        match self {
            Symmetry::Infinite { .. } => None,
            Symmetry::Lines(lines) => Some(lines),
        }
    }
}

/// Finds every line of reflective symmetry of a point set.
pub struct SymmetryAnalyzer {
    config: AnalyzerConfig,
}

impl SymmetryAnalyzer {
    /// Creates a new `SymmetryAnalyzer` with the given tolerances.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Executes the analysis.
    ///
    /// Every valid mirror axis of a finite set passes through its centroid
    /// (reflection is an isometry and the centroid is invariant under any
    /// isometry mapping the set onto itself), so candidates are single
    /// angles. Each surviving candidate is verified by reflecting the whole
    /// set and testing tolerance-aware set equality; acceptance is binary
    /// and no candidate is dropped for performance.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyPointSet`] if the set has no points.
    pub fn execute(&self, set: &PointSet) -> Result<Symmetry> {
        let Some(centroid) = set.centroid() else {
            return Err(AnalysisError::EmptyPointSet.into());
        };
        let point_eps = self.config.point_epsilon();

        if set.is_collapsed(point_eps) {
            tracing::debug!(
                points = set.len(),
                "set collapses to a single location, every axis is valid"
            );
            return Ok(Symmetry::Infinite { center: centroid });
        }

        let raw = candidates::candidate_angles(set, &centroid, &self.config);
        let raw_count = raw.len();
        let deduped = candidates::dedup_angles(raw, self.config.angle_epsilon());
        tracing::debug!(
            points = set.len(),
            raw = raw_count,
            candidates = deduped.len(),
            "generated candidate axes"
        );

        let mut accepted: Vec<SymmetryLine> = deduped
            .into_iter()
            .filter(|&angle| {
                let reflected = set.reflect_all(&centroid, angle);
                set.equals_as_set(&reflected, point_eps)
            })
            .map(|angle| SymmetryLine::new(angle, centroid))
            .collect();
        accepted.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
        tracing::debug!(accepted = accepted.len(), "verified symmetry lines");

        Ok(Symmetry::Lines(accepted))
    }
}

/// Convenience entry point: analyze `set` with `config`.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPointSet`] if the set has no points.
pub fn find_symmetry_lines(set: &PointSet, config: &AnalyzerConfig) -> Result<Symmetry> {
    SymmetryAnalyzer::new(*config).execute(set)
}
