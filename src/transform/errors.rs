//! transform::errors — error type shared by all RDM transforms.
//!
//! Purpose
//! -------
//! Provide a single error enum and result alias for the transform engine so
//! that every public transform reports shape problems, degenerate ranges,
//! invalid parameters, and container failures the same way.
//!
//! Key behaviors
//! -------------
//! - Define [`TransformResult`] and [`TransformError`].
//! - Wrap container failures ([`RdmsError`]) raised while re-wrapping the
//!   result, and map condensed-length failures onto
//!   [`TransformError::Shape`].
//! - Convert to a Python `ValueError` when the `python-bindings` feature is
//!   enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every error is raised before the output container is built; a failed
//!   call leaves the input batch untouched and returns no partial output.
//! - Infinite geodesic distances between disconnected patterns are valid
//!   output, not an error.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the violated constraint
//!   ("l must be < u", "max − min must be positive").

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::rdm::errors::RdmsError;

pub type TransformResult<T> = Result<T, TransformError>;

/// TransformError — failures of RDM transforms.
///
/// Variants
/// --------
/// - `Shape { n_pairs }`
///   The condensed length does not correspond to an integer pattern count;
///   raised before any square matrix or graph is built.
/// - `ShapeMismatch { expected, found }`
///   A caller-supplied function returned a block of a different shape.
/// - `DegenerateRange { transform, lower, upper }`
///   The rescaling denominator `upper − lower` is not strictly positive
///   and the caller did not opt into propagating non-finite values.
/// - `InvalidParameter { name, value, reason }`
///   A transform parameter is out of its documented domain (unknown rank
///   method, quantile outside [0, 1], `l ≥ u`).
/// - `NonFiniteData { row, col, value }`
///   A NaN entry where a total order is required (rank transform).
/// - `NegativeCycle`
///   The shortest-path backend detected a negative cycle.
/// - `Container(RdmsError)`
///   The container refused the transformed block or metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    // ---- Shape ----
    Shape { n_pairs: usize },
    ShapeMismatch { expected: (usize, usize), found: (usize, usize) },

    // ---- Numeric ----
    DegenerateRange { transform: &'static str, lower: f64, upper: f64 },
    NonFiniteData { row: usize, col: usize, value: f64 },

    // ---- Parameters ----
    InvalidParameter { name: &'static str, value: String, reason: &'static str },

    // ---- Graph ----
    NegativeCycle,

    // ---- Container ----
    Container(RdmsError),
}

impl std::error::Error for TransformError {}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::Shape { n_pairs } => {
                write!(
                    f,
                    "Shape error: {n_pairs} condensed entries do not form a square RDM \
                     (n_pairs must equal n·(n−1)/2)"
                )
            }
            TransformError::ShapeMismatch { expected, found } => {
                write!(f, "Shape mismatch: expected {expected:?}, found {found:?}")
            }
            TransformError::DegenerateRange { transform, lower, upper } => {
                write!(
                    f,
                    "Degenerate range in {transform} transform: lower {lower}, upper {upper}; \
                     upper − lower must be positive"
                )
            }
            TransformError::NonFiniteData { row, col, value } => {
                write!(f, "Invalid dissimilarity at ({row}, {col}): {value}, must not be NaN")
            }
            TransformError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid parameter {name} = {value}: {reason}")
            }
            TransformError::NegativeCycle => {
                write!(f, "Shortest-path computation found a negative cycle")
            }
            TransformError::Container(err) => write!(f, "Container error: {err}"),
        }
    }
}

impl From<RdmsError> for TransformError {
    fn from(err: RdmsError) -> Self {
        match err {
            RdmsError::InvalidPairCount { n_pairs } => TransformError::Shape { n_pairs },
            other => TransformError::Container(other),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` payloads for the numeric and parameter variants.
    // - Mapping of container errors onto `Shape` / `Container`.
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion path.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `DegenerateRange` names the transform and both bounds.
    //
    // Given
    // -----
    // - A minmax degenerate range with lower = upper = 2.5.
    //
    // Expect
    // ------
    // - The message contains "minmax" and "2.5".
    fn transform_error_degenerate_range_includes_payload() {
        // Arrange
        let err = TransformError::DegenerateRange { transform: "minmax", lower: 2.5, upper: 2.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("minmax"), "message should name the transform.\nGot: {msg}");
        assert!(msg.contains("2.5"), "message should include the bounds.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidParameter` includes the parameter name and value.
    //
    // Given
    // -----
    // - name = "method", value = "median".
    //
    // Expect
    // ------
    // - The message contains both.
    fn transform_error_invalid_parameter_includes_name_and_value() {
        // Arrange
        let err = TransformError::InvalidParameter {
            name: "method",
            value: "median".to_string(),
            reason: "unknown rank method",
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("method") && msg.contains("median"), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure condensed-length errors become `Shape` and other container
    // errors are wrapped.
    //
    // Given
    // -----
    // - `RdmsError::InvalidPairCount { n_pairs: 4 }` and
    //   `RdmsError::NotSquare { rows: 2, cols: 3 }`.
    //
    // Expect
    // ------
    // - `Shape { n_pairs: 4 }` and `Container(NotSquare { .. })`.
    fn transform_error_from_rdms_error_maps_shape_failures() {
        // Act
        let shape: TransformError = RdmsError::InvalidPairCount { n_pairs: 4 }.into();
        let other: TransformError = RdmsError::NotSquare { rows: 2, cols: 3 }.into();

        // Assert
        assert_eq!(shape, TransformError::Shape { n_pairs: 4 });
        assert_eq!(other, TransformError::Container(RdmsError::NotSquare { rows: 2, cols: 3 }));
    }
}
