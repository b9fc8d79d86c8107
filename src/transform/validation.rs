//! transform::validation — input guards shared by RDM transforms.
//!
//! Purpose
//! -------
//! Centralize the checks transforms run before computing anything: batch
//! shape, NaN entries where a total order is needed, output shape of
//! caller-supplied functions, and the width of rescaling ranges.
//!
//! Key behaviors
//! -------------
//! - Map every violated precondition to a [`TransformError`] variant so
//!   Rust callers and the Python bindings see the same messages.
//! - Never allocate beyond what error construction requires.
//!
//! Conventions
//! -----------
//! - Guards are called at the top of a transform, before the working copy
//!   is modified, so a failed call has no observable effect.

use ndarray::ArrayView2;

use crate::{
    rdm::condensed::n_dim_from_pairs,
    transform::{
        errors::{TransformError, TransformResult},
        options::RangePolicy,
    },
};

/// Confirm that `n_pairs` maps to an integer pattern count.
///
/// Errors
/// ------
/// - `TransformError::Shape { n_pairs }` otherwise.
pub fn validate_pair_count(n_pairs: usize) -> TransformResult<usize> {
    n_dim_from_pairs(n_pairs).map_err(|_| TransformError::Shape { n_pairs })
}

/// Reject NaN entries, reporting the first one in row-major order.
///
/// Errors
/// ------
/// - `TransformError::NonFiniteData { row, col, value }`.
///
/// Notes
/// -----
/// - ±∞ are accepted; they order normally (e.g. geodesic output of
///   disconnected patterns).
pub fn validate_no_nan(block: ArrayView2<'_, f64>) -> TransformResult<()> {
    match block.indexed_iter().find(|(_, value)| value.is_nan()) {
        Some(((row, col), &value)) => Err(TransformError::NonFiniteData { row, col, value }),
        None => Ok(()),
    }
}

/// Confirm that a caller-supplied function preserved the block shape.
///
/// Errors
/// ------
/// - `TransformError::ShapeMismatch { expected, found }`.
pub fn validate_same_shape(
    expected: (usize, usize), found: (usize, usize),
) -> TransformResult<()> {
    if expected != found {
        return Err(TransformError::ShapeMismatch { expected, found });
    }
    Ok(())
}

/// Check that `upper − lower` is strictly positive unless the caller
/// opted into propagating non-finite values.
///
/// Parameters
/// ----------
/// - `transform`: `&'static str`
///   Name used in the error message.
/// - `lower`, `upper`: `f64`
///   Range bounds; NaN bounds count as degenerate.
/// - `policy`: [`RangePolicy`]
///   `Strict` rejects degenerate ranges, `Propagate` accepts them.
///
/// Errors
/// ------
/// - `TransformError::DegenerateRange { .. }` under `Strict` when
///   `!(upper − lower > 0)`.
pub fn validate_range(
    transform: &'static str, lower: f64, upper: f64, policy: RangePolicy,
) -> TransformResult<()> {
    let width = upper - lower;
    if policy == RangePolicy::Strict && !(width > 0.0) {
        return Err(TransformError::DegenerateRange { transform, lower, upper });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each error branch of the guards and their success paths.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure `validate_no_nan` reports the first NaN position and accepts
    // infinities.
    //
    // Given
    // -----
    // - A block with +∞ at (0, 1) and NaN at (1, 0).
    //
    // Expect
    // ------
    // - `NonFiniteData { row: 1, col: 0, .. }`; an all-finite-or-∞ block
    //   passes.
    fn validate_no_nan_reports_first_nan_and_accepts_infinity() {
        // Arrange
        let block = array![[0.0, f64::INFINITY, 1.0], [f64::NAN, 2.0, 3.0]];
        let clean = array![[0.0, f64::INFINITY, 1.0]];

        // Act
        let result = validate_no_nan(block.view());

        // Assert
        assert!(matches!(result, Err(TransformError::NonFiniteData { row: 1, col: 0, .. })));
        assert!(validate_no_nan(clean.view()).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify `validate_range` across policies and degenerate inputs.
    //
    // Given
    // -----
    // - Zero-width, NaN, and positive ranges under both policies.
    //
    // Expect
    // ------
    // - Strict rejects zero-width and NaN ranges; Propagate accepts all.
    fn validate_range_respects_policy() {
        assert!(validate_range("minmax", 1.0, 1.0, RangePolicy::Strict).is_err());
        assert!(validate_range("minmax", f64::NAN, 1.0, RangePolicy::Strict).is_err());
        assert!(validate_range("minmax", 0.0, 1.0, RangePolicy::Strict).is_ok());
        assert!(validate_range("minmax", 1.0, 1.0, RangePolicy::Propagate).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Check the shape guards.
    //
    // Given
    // -----
    // - Pair counts 6 (valid) and 5 (invalid); shapes (2, 3) vs (3, 2).
    //
    // Expect
    // ------
    // - `validate_pair_count(6) == Ok(4)`, `Shape` for 5, and
    //   `ShapeMismatch` for differing shapes.
    fn validate_shape_guards_report_mismatches() {
        assert_eq!(validate_pair_count(6), Ok(4));
        assert_eq!(validate_pair_count(5), Err(TransformError::Shape { n_pairs: 5 }));
        assert_eq!(
            validate_same_shape((2, 3), (3, 2)),
            Err(TransformError::ShapeMismatch { expected: (2, 3), found: (3, 2) })
        );
    }
}
