//! Error types for basis and level-set evaluation and for case files.

use thiserror::Error;

/// Result type alias for evaluation operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors reported by basis constructors, node tables and level-set normals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The requested degree lies outside the hand-tabulated range of a family.
    #[error("unsupported degree {degree} for {family} (supported up to {max})")]
    UnsupportedDegree {
        family: &'static str,
        degree: usize,
        max: usize,
    },

    /// The gradient vanishes at the query point, so no normal exists there.
    #[error("degenerate geometry: zero gradient at ({x}, {y})")]
    DegenerateGeometry { x: f64, y: f64 },

    /// A face collapses to a point, so no local coordinate exists on it.
    #[error("degenerate face of length {length} at ({x}, {y})")]
    DegenerateFace { length: f64, x: f64, y: f64 },

    /// No reference-node table exists for this degree.
    #[error("no {layout} reference-node table for degree {degree}")]
    InconsistentNodeTable { layout: &'static str, degree: usize },

    /// A mesh entity has fewer corners than the construction needs.
    #[error("entity has {found} corner points, expected {expected}")]
    InsufficientPoints { expected: usize, found: usize },
}

impl EvalError {
    #[must_use]
    pub const fn unsupported_degree(family: &'static str, degree: usize, max: usize) -> Self {
        Self::UnsupportedDegree {
            family,
            degree,
            max,
        }
    }

    #[must_use]
    pub const fn degenerate_geometry(x: f64, y: f64) -> Self {
        Self::DegenerateGeometry { x, y }
    }

    #[must_use]
    pub const fn degenerate_face(length: f64, x: f64, y: f64) -> Self {
        Self::DegenerateFace { length, x, y }
    }

    #[must_use]
    pub const fn inconsistent_node_table(layout: &'static str, degree: usize) -> Self {
        Self::InconsistentNodeTable { layout, degree }
    }

    #[must_use]
    pub const fn insufficient_points(expected: usize, found: usize) -> Self {
        Self::InsufficientPoints { expected, found }
    }
}

/// Result type alias for reading case files and writing samples.
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors from the configuration and export layer.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid case file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write samples: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ParamError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
