//! rdm::errors — error types for RDM containers and condensed-form helpers.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used when building RDM batches,
//! converting between condensed and square form, and validating descriptor
//! mappings against the batch shape.
//!
//! Key behaviors
//! -------------
//! - Define [`RdmsResult`] and [`RdmsError`] as the canonical result and
//!   error types for the `rdm` subtree.
//! - Attach human-readable `Display` messages that embed the offending
//!   sizes or descriptor keys.
//! - Implement `From<RdmsError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every constructor in `rdm` validates its inputs and returns
//!   [`RdmsResult<T>`] instead of panicking.
//! - Variants are small and cloneable so they can be embedded in
//!   higher-level error types (e.g. `TransformError::Container`).
//!
//! Testing notes
//! -------------
//! - Unit tests below check that `Display` messages embed their payloads.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type RdmsResult<T> = Result<T, RdmsError>;

/// RdmsError — failures when building or reshaping RDM batches.
///
/// Variants
/// --------
/// - `InvalidPairCount { n_pairs }`
///   A condensed vector length that is not `n·(n−1)/2` for any integer `n`.
/// - `DimensionMismatch { expected, found }`
///   A condensed vector or square matrix whose size disagrees with the
///   pattern count it is paired with.
/// - `NotSquare { rows, cols }`
///   A matrix passed to `to_condensed` that is not square.
/// - `DescriptorLength { key, expected, found }`
///   A per-RDM or per-pattern descriptor list with the wrong length.
/// - `DescriptorNotList { key }`
///   A per-RDM or per-pattern descriptor stored as a scalar instead of a
///   list with one entry per row / pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum RdmsError {
    // ---- Condensed form ----
    InvalidPairCount { n_pairs: usize },
    DimensionMismatch { expected: usize, found: usize },
    NotSquare { rows: usize, cols: usize },

    // ---- Descriptors ----
    DescriptorLength { key: String, expected: usize, found: usize },
    DescriptorNotList { key: String },
}

impl std::error::Error for RdmsError {}

impl std::fmt::Display for RdmsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RdmsError::InvalidPairCount { n_pairs } => {
                write!(
                    f,
                    "Invalid condensed length {n_pairs}: must equal n·(n−1)/2 for an integer n."
                )
            }
            RdmsError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }
            RdmsError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got {rows}×{cols}")
            }
            RdmsError::DescriptorLength { key, expected, found } => {
                write!(
                    f,
                    "Descriptor '{key}' has {found} entries, expected {expected}"
                )
            }
            RdmsError::DescriptorNotList { key } => {
                write!(f, "Descriptor '{key}' must be a list with one entry per element")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RdmsError> for PyErr {
    fn from(err: RdmsError) -> PyErr {
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
    // - Payload embedding in `Display` messages for shape and descriptor
    //   variants.
    //
    // They intentionally DO NOT cover:
    // - The PyO3 conversion, which needs the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidPairCount` reports the offending length.
    //
    // Given
    // -----
    // - `RdmsError::InvalidPairCount { n_pairs: 7 }`.
    //
    // Expect
    // ------
    // - The message contains "7".
    fn rdms_error_invalid_pair_count_includes_length() {
        // Arrange
        let err = RdmsError::InvalidPairCount { n_pairs: 7 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "message should include n_pairs.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `DescriptorLength` names the key and both lengths.
    //
    // Given
    // -----
    // - A descriptor "session" with 2 entries where 3 are expected.
    //
    // Expect
    // ------
    // - The message contains "session", "2", and "3".
    fn rdms_error_descriptor_length_includes_key_and_sizes() {
        // Arrange
        let err = RdmsError::DescriptorLength { key: "session".to_string(), expected: 3, found: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("session"), "message should name the key.\nGot: {msg}");
        assert!(msg.contains('2') && msg.contains('3'), "message should include sizes.\nGot: {msg}");
    }
}
