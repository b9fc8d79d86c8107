//! rdm::condensed — condensed-vector ↔ square-matrix conversion.
//!
//! Purpose
//! -------
//! Centralize the duality between the condensed form of an RDM (the upper
//! triangle without the diagonal, flattened row by row) and its full
//! symmetric, zero-diagonal square form. Every transform that needs the
//! square form goes through these helpers instead of reshaping ad hoc.
//!
//! Key behaviors
//! -------------
//! - Recover the pattern count `n_dim` from a condensed length `n_pairs`
//!   and reject lengths that are not triangular numbers.
//! - Expand a condensed row into an `n_dim × n_dim` symmetric matrix with
//!   a zero diagonal.
//! - Condense a square matrix back into its upper triangle.
//!
//! Conventions
//! -----------
//! - Condensed order is `(0,1), (0,2), …, (0,n−1), (1,2), …, (n−2,n−1)`,
//!   i.e. the row-major upper triangle.
//! - `n_pairs = 0` corresponds to a single pattern (`n_dim = 1`).
//! - `to_condensed` reads only the upper triangle; it does not check that
//!   the input is symmetric or that its diagonal is zero.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::rdm::errors::{RdmsError, RdmsResult};

/// Number of condensed entries for `n_dim` patterns, `n_dim·(n_dim−1)/2`.
#[inline]
pub fn n_pairs_from_dim(n_dim: usize) -> usize {
    n_dim * n_dim.saturating_sub(1) / 2
}

/// Recover the pattern count from a condensed length.
///
/// Parameters
/// ----------
/// - `n_pairs`: `usize`
///   Length of a condensed RDM vector.
///
/// Returns
/// -------
/// `RdmsResult<usize>`
///   - `Ok(n_dim)` with `n_dim·(n_dim−1)/2 == n_pairs`.
///   - `Err(RdmsError::InvalidPairCount { n_pairs })` when no integer
///     `n_dim` satisfies the identity.
///
/// Notes
/// -----
/// - Solves `n² − n − 2p = 0` in floating point and then confirms the
///   rounded root with exact integer arithmetic.
///
/// Examples
/// --------
/// ```rust
/// # use rdm_transforms::rdm::condensed::n_dim_from_pairs;
/// assert_eq!(n_dim_from_pairs(6).unwrap(), 4);
/// assert!(n_dim_from_pairs(5).is_err());
/// ```
pub fn n_dim_from_pairs(n_pairs: usize) -> RdmsResult<usize> {
    let discriminant = 1.0 + 8.0 * n_pairs as f64;
    let n_dim = ((1.0 + discriminant.sqrt()) / 2.0).round() as usize;
    if n_pairs_from_dim(n_dim) == n_pairs {
        Ok(n_dim)
    } else {
        Err(RdmsError::InvalidPairCount { n_pairs })
    }
}

/// Expand a condensed row into its symmetric square form.
///
/// Parameters
/// ----------
/// - `condensed`: `ArrayView1<f64>`
///   Condensed dissimilarities of a single RDM.
///
/// Returns
/// -------
/// `RdmsResult<Array2<f64>>`
///   - `Ok(matrix)` of shape `(n_dim, n_dim)`, symmetric with a zero
///     diagonal.
///   - `Err(RdmsError::InvalidPairCount { .. })` when the length is not
///     triangular.
pub fn to_square(condensed: ArrayView1<'_, f64>) -> RdmsResult<Array2<f64>> {
    let n_dim = n_dim_from_pairs(condensed.len())?;
    let mut matrix = Array2::<f64>::zeros((n_dim, n_dim));
    let mut k = 0;
    for i in 0..n_dim {
        for j in (i + 1)..n_dim {
            matrix[[i, j]] = condensed[k];
            matrix[[j, i]] = condensed[k];
            k += 1;
        }
    }
    Ok(matrix)
}

/// Condense a square matrix into its upper triangle (diagonal excluded).
///
/// Parameters
/// ----------
/// - `matrix`: `ArrayView2<f64>`
///   Square matrix of shape `(n_dim, n_dim)`.
///
/// Returns
/// -------
/// `RdmsResult<Array1<f64>>`
///   - `Ok(vector)` of length `n_dim·(n_dim−1)/2`.
///   - `Err(RdmsError::NotSquare { .. })` for non-square input.
pub fn to_condensed(matrix: ArrayView2<'_, f64>) -> RdmsResult<Array1<f64>> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(RdmsError::NotSquare { rows, cols });
    }
    let mut condensed = Vec::with_capacity(n_pairs_from_dim(rows));
    for i in 0..rows {
        for j in (i + 1)..cols {
            condensed.push(matrix[[i, j]]);
        }
    }
    Ok(Array1::from(condensed))
}
