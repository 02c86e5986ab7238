//! mirolis — planar mirror-symmetry detection for finite point sets.
//!
//! Given noisy floating-point 2D coordinates, the analyzer enumerates every
//! line such that reflecting the set across it reproduces the set within
//! configured tolerances. The stages are:
//!
//! 1. **Degenerate screen** – an empty set fails; a set collapsed to one
//!    effective location short-circuits to the infinite-symmetry outcome.
//! 2. **Candidates** – every valid mirror axis passes through the centroid,
//!    so a candidate is a single angle: centroid→point directions plus chord
//!    perpendiculars of equal-radius pairs, deduplicated mod π.
//! 3. **Verification** – reflect the whole set across each candidate axis
//!    and test tolerance-aware set equality. Acceptance is binary; there are
//!    no similarity scores.
//!
//! Results arrive as [`Symmetry`]: either the infinite marker for collapsed
//! input or the finite axis list sorted ascending by angle. Callers must
//! branch on the variant before iterating.

pub mod analysis;
pub mod error;
pub mod geometry;
pub mod import;
pub mod math;
pub mod report;

pub use analysis::{find_symmetry_lines, AnalyzerConfig, Symmetry, SymmetryAnalyzer};
pub use error::{MirolisError, Result};
pub use geometry::{Point, PointSet, SymmetryLine};
