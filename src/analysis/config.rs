use crate::error::{ConfigError, Result};

/// Tolerances for one analysis run.
///
/// Both epsilons must be supplied as positive finite values. There is no
/// `Default`: a hidden tolerance could silently change results between runs,
/// so the values are always visible at the call site.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    point_epsilon: f64,
    angle_epsilon: f64,
}

impl AnalyzerConfig {
    /// Creates a validated configuration.
    ///
    /// * `point_epsilon` - maximum distance (coordinate units) at which two
    ///   points count as the same location.
    /// * `angle_epsilon` - maximum angular difference (radians, mod π) at
    ///   which two axes count as the same line.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either epsilon is non-finite or not
    /// strictly positive.
    pub fn new(point_epsilon: f64, angle_epsilon: f64) -> Result<Self> {
        if !point_epsilon.is_finite() {
            return Err(ConfigError::NonFinitePointEpsilon(point_epsilon).into());
        }
        if point_epsilon <= 0.0 {
            return Err(ConfigError::NonPositivePointEpsilon(point_epsilon).into());
        }
        if !angle_epsilon.is_finite() {
            return Err(ConfigError::NonFiniteAngleEpsilon(angle_epsilon).into());
        }
        if angle_epsilon <= 0.0 {
            return Err(ConfigError::NonPositiveAngleEpsilon(angle_epsilon).into());
        }
        Ok(Self {
            point_epsilon,
            angle_epsilon,
        })
    }

    /// Maximum distance at which two points are the same location.
    #[must_use]
    pub fn point_epsilon(&self) -> f64 {
        self.point_epsilon
    }

    /// Maximum angular difference at which two axes are the same line.
    #[must_use]
    pub fn angle_epsilon(&self) -> f64 {
        self.angle_epsilon
    }
}
