use thiserror::Error;

/// Top-level error type for the Mirolis symmetry kernel.
#[derive(Debug, Error)]
pub enum MirolisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors related to geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Errors related to analyzer configuration.
///
/// Both tolerances must be supplied as positive finite values; there are no
/// defaults that could silently change results.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("point epsilon must be finite, got {0}")]
    NonFinitePointEpsilon(f64),

    #[error("point epsilon must be positive, got {0}")]
    NonPositivePointEpsilon(f64),

    #[error("angle epsilon must be finite, got {0}")]
    NonFiniteAngleEpsilon(f64),

    #[error("angle epsilon must be positive, got {0}")]
    NonPositiveAngleEpsilon(f64),
}

/// Errors related to symmetry analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("point set is empty")]
    EmptyPointSet,
}

/// Errors related to importing point data.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to access {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: missing y coordinate")]
    MissingCoordinate { row: usize },

    #[error("row {row}: malformed coordinate {value:?}")]
    MalformedCoordinate { row: usize, value: String },
}

/// Errors related to writing analysis reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for results using [`MirolisError`].
pub type Result<T> = std::result::Result<T, MirolisError>;
