//! rdm::container — the batch-of-RDMs collaborator.
//!
//! Purpose
//! -------
//! Define the capability the transform engine needs from an RDM container
//! ([`RdmBatch`]) and ship a minimal in-memory implementation ([`Rdms`]).
//!
//! Key behaviors
//! -------------
//! - [`RdmBatch::get_vectors`] hands out an owned working copy of the
//!   `(n_rdm × n_pairs)` block, so transforms never write into the
//!   caller's data.
//! - [`RdmBatch::from_parts`] builds a new, independent container from a
//!   block plus the measure label and the three descriptor mappings.
//! - [`Rdms::new`] validates the condensed length and the per-RDM /
//!   per-pattern descriptor lengths.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every row of the block has the same condensed length, which maps to an
//!   integer pattern count `n_dim`.
//! - `rdm_descriptors` lists have `n_rdm` entries; `pattern_descriptors`
//!   lists have `n_dim` entries.
//!
//! Downstream usage
//! ----------------
//! - Transforms are generic over `R: RdmBatch` and return a fresh `R`.
//!   Callers with their own container type implement the trait and get
//!   every transform for free.

use ndarray::{Array2, ArrayView2, Axis};

use crate::rdm::{
    condensed::n_dim_from_pairs,
    descriptors::{DescriptorValue, Descriptors, check_list_length},
    errors::{RdmsError, RdmsResult},
};

/// Capability required from an RDM container by the transform engine.
///
/// Required:
/// - `dissimilarities()`: read-only view of the `(n_rdm × n_pairs)` block.
/// - `dissimilarity_measure()`: free-text label, `None` when absent.
/// - `descriptors()`, `rdm_descriptors()`, `pattern_descriptors()`.
/// - `from_parts(...)`: construct a new, independent container.
///
/// Provided:
/// - `get_vectors()`: owned copy of the block.
/// - `n_rdm()`, `n_pairs()`.
pub trait RdmBatch: Sized {
    fn dissimilarities(&self) -> ArrayView2<'_, f64>;
    fn dissimilarity_measure(&self) -> Option<&str>;
    fn descriptors(&self) -> &Descriptors;
    fn rdm_descriptors(&self) -> &Descriptors;
    fn pattern_descriptors(&self) -> &Descriptors;

    fn from_parts(
        dissimilarities: Array2<f64>, dissimilarity_measure: Option<String>,
        descriptors: Descriptors, rdm_descriptors: Descriptors, pattern_descriptors: Descriptors,
    ) -> RdmsResult<Self>;

    fn get_vectors(&self) -> Array2<f64> {
        self.dissimilarities().to_owned()
    }

    fn n_rdm(&self) -> usize {
        self.dissimilarities().len_of(Axis(0))
    }

    fn n_pairs(&self) -> usize {
        self.dissimilarities().len_of(Axis(1))
    }
}

/// Rdms — an in-memory batch of RDMs in condensed form.
///
/// Fields
/// ------
/// - `dissimilarities`: `Array2<f64>`
///   `(n_rdm × n_pairs)` block, one condensed RDM per row.
/// - `dissimilarity_measure`: `Option<String>`
///   How the dissimilarities were computed / transformed.
/// - `descriptors`, `rdm_descriptors`, `pattern_descriptors`:
///   [`Descriptors`] at batch, per-RDM, and per-pattern level.
/// - `n_dim`: `usize`
///   Pattern count implied by `n_pairs`.
///
/// Invariants
/// ----------
/// - `n_pairs == n_dim·(n_dim−1)/2`.
/// - Per-RDM lists have `n_rdm` entries, per-pattern lists `n_dim`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rdms {
    dissimilarities: Array2<f64>,
    dissimilarity_measure: Option<String>,
    descriptors: Descriptors,
    rdm_descriptors: Descriptors,
    pattern_descriptors: Descriptors,
    n_dim: usize,
}

impl Rdms {
    /// Build a validated batch.
    ///
    /// Parameters
    /// ----------
    /// - `dissimilarities`: `Array2<f64>`
    ///   `(n_rdm × n_pairs)` condensed block.
    /// - `dissimilarity_measure`: `Option<String>`
    ///   Label; `None` when unknown.
    /// - `descriptors`, `rdm_descriptors`, `pattern_descriptors`:
    ///   metadata at batch, per-RDM, and per-pattern level.
    ///
    /// Returns
    /// -------
    /// `RdmsResult<Rdms>`
    ///   - `Err(RdmsError::InvalidPairCount { .. })` if `n_pairs` is not a
    ///     triangular number.
    ///   - `Err(RdmsError::DescriptorLength { .. })` /
    ///     `Err(RdmsError::DescriptorNotList { .. })` for per-RDM or
    ///     per-pattern descriptors that do not match the batch shape.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rdm_transforms::rdm::{Descriptors, Rdms, RdmBatch};
    /// let rdms = Rdms::new(
    ///     array![[1.0, 2.0, 3.0]],
    ///     Some("euclidean".to_string()),
    ///     Descriptors::new(),
    ///     Descriptors::new(),
    ///     Descriptors::new(),
    /// )
    /// .unwrap();
    /// assert_eq!(rdms.n_dim(), 3);
    /// assert_eq!(rdms.n_rdm(), 1);
    /// ```
    pub fn new(
        dissimilarities: Array2<f64>, dissimilarity_measure: Option<String>,
        descriptors: Descriptors, rdm_descriptors: Descriptors, pattern_descriptors: Descriptors,
    ) -> RdmsResult<Self> {
        let n_dim = n_dim_from_pairs(dissimilarities.ncols())?;
        rdm_descriptors.check_lengths(dissimilarities.nrows())?;
        pattern_descriptors.check_lengths(n_dim)?;

        Ok(Rdms {
            dissimilarities,
            dissimilarity_measure,
            descriptors,
            rdm_descriptors,
            pattern_descriptors,
            n_dim,
        })
    }

    /// Build a batch with a label and no descriptors.
    pub fn from_vectors(
        dissimilarities: Array2<f64>, dissimilarity_measure: Option<&str>,
    ) -> RdmsResult<Self> {
        Self::new(
            dissimilarities,
            dissimilarity_measure.map(str::to_string),
            Descriptors::new(),
            Descriptors::new(),
            Descriptors::new(),
        )
    }

    /// Number of patterns per RDM.
    pub fn n_dim(&self) -> usize {
        self.n_dim
    }

    /// Mutable batch-level descriptors; values are not length-checked.
    pub fn descriptors_mut(&mut self) -> &mut Descriptors {
        &mut self.descriptors
    }

    /// Insert a per-RDM descriptor, a list with one entry per RDM.
    ///
    /// Returns
    /// -------
    /// `RdmsResult<Option<DescriptorValue>>`
    ///   The previous value under `key`, if any.
    ///
    /// Errors
    /// ------
    /// - `RdmsError::DescriptorNotList` / `RdmsError::DescriptorLength` if
    ///   `value` is not a list of `n_rdm` entries; the batch is unchanged.
    pub fn insert_rdm_descriptor(
        &mut self, key: impl Into<String>, value: impl Into<DescriptorValue>,
    ) -> RdmsResult<Option<DescriptorValue>> {
        let (key, value) = (key.into(), value.into());
        check_list_length(&key, &value, self.dissimilarities.nrows())?;
        Ok(self.rdm_descriptors.insert(key, value))
    }

    /// Insert a per-pattern descriptor, a list with one entry per pattern.
    ///
    /// Errors
    /// ------
    /// - `RdmsError::DescriptorNotList` / `RdmsError::DescriptorLength` if
    ///   `value` is not a list of `n_dim` entries; the batch is unchanged.
    pub fn insert_pattern_descriptor(
        &mut self, key: impl Into<String>, value: impl Into<DescriptorValue>,
    ) -> RdmsResult<Option<DescriptorValue>> {
        let (key, value) = (key.into(), value.into());
        check_list_length(&key, &value, self.n_dim)?;
        Ok(self.pattern_descriptors.insert(key, value))
    }

    pub fn remove_rdm_descriptor(&mut self, key: &str) -> Option<DescriptorValue> {
        self.rdm_descriptors.remove(key)
    }

    pub fn remove_pattern_descriptor(&mut self, key: &str) -> Option<DescriptorValue> {
        self.pattern_descriptors.remove(key)
    }

    /// Replace the block with one of the same shape.
    ///
    /// Errors
    /// ------
    /// - `RdmsError::DimensionMismatch` when the row or column count
    ///   changes.
    pub fn set_vectors(&mut self, dissimilarities: Array2<f64>) -> RdmsResult<()> {
        if dissimilarities.nrows() != self.dissimilarities.nrows() {
            return Err(RdmsError::DimensionMismatch {
                expected: self.dissimilarities.nrows(),
                found: dissimilarities.nrows(),
            });
        }
        if dissimilarities.ncols() != self.dissimilarities.ncols() {
            return Err(RdmsError::DimensionMismatch {
                expected: self.dissimilarities.ncols(),
                found: dissimilarities.ncols(),
            });
        }
        self.dissimilarities = dissimilarities;
        Ok(())
    }
}

impl RdmBatch for Rdms {
    fn dissimilarities(&self) -> ArrayView2<'_, f64> {
        self.dissimilarities.view()
    }

    fn dissimilarity_measure(&self) -> Option<&str> {
        self.dissimilarity_measure.as_deref()
    }

    fn descriptors(&self) -> &Descriptors {
        &self.descriptors
    }

    fn rdm_descriptors(&self) -> &Descriptors {
        &self.rdm_descriptors
    }

    fn pattern_descriptors(&self) -> &Descriptors {
        &self.pattern_descriptors
    }

    fn from_parts(
        dissimilarities: Array2<f64>, dissimilarity_measure: Option<String>,
        descriptors: Descriptors, rdm_descriptors: Descriptors, pattern_descriptors: Descriptors,
    ) -> RdmsResult<Self> {
        Rdms::new(
            dissimilarities,
            dissimilarity_measure,
            descriptors,
            rdm_descriptors,
            pattern_descriptors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Shape validation of the condensed block.
    // - Length validation of per-RDM and per-pattern descriptors.
    // - `get_vectors` returning an owned copy.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure a non-triangular column count is rejected.
    //
    // Given
    // -----
    // - A 1×2 block (2 is not n·(n−1)/2).
    //
    // Expect
    // ------
    // - `Err(RdmsError::InvalidPairCount { n_pairs: 2 })`.
    fn rdms_new_rejects_non_triangular_block() {
        // Arrange
        let block = array![[1.0, 2.0]];

        // Act
        let result = Rdms::from_vectors(block, None);

        // Assert
        assert_eq!(result, Err(RdmsError::InvalidPairCount { n_pairs: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure per-RDM and per-pattern descriptor lengths are enforced.
    //
    // Given
    // -----
    // - A 2×3 block (n_rdm = 2, n_dim = 3).
    // - rdm_descriptors with 3 entries; pattern_descriptors with 2.
    //
    // Expect
    // ------
    // - Both constructions fail with `DescriptorLength`.
    fn rdms_new_rejects_descriptor_length_mismatch() {
        // Arrange
        let block = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let bad_rdm: Descriptors = [("run", vec![0_i64, 1, 2])].into_iter().collect();
        let bad_pattern: Descriptors = [("stim", vec!["a", "b"])].into_iter().collect();

        // Act
        let rdm_result = Rdms::new(
            block.clone(),
            None,
            Descriptors::new(),
            bad_rdm,
            Descriptors::new(),
        );
        let pattern_result =
            Rdms::new(block, None, Descriptors::new(), Descriptors::new(), bad_pattern);

        // Assert
        assert!(matches!(rdm_result, Err(RdmsError::DescriptorLength { expected: 2, .. })));
        assert!(matches!(pattern_result, Err(RdmsError::DescriptorLength { expected: 3, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify that mutating the result of `get_vectors` leaves the batch
    // untouched.
    //
    // Given
    // -----
    // - A 1×3 batch.
    //
    // Expect
    // ------
    // - The stored block is unchanged after writing into the copy.
    fn rdms_get_vectors_returns_independent_copy() {
        // Arrange
        let rdms = Rdms::from_vectors(array![[1.0, 2.0, 3.0]], Some("euclidean"))
            .expect("valid batch");

        // Act
        let mut copy = rdms.get_vectors();
        copy.fill(-1.0);

        // Assert
        assert_eq!(rdms.dissimilarities(), array![[1.0, 2.0, 3.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `set_vectors` refuses a block of a different shape.
    //
    // Given
    // -----
    // - A 1×3 batch and a 2×3 replacement.
    //
    // Expect
    // ------
    // - `Err(RdmsError::DimensionMismatch { expected: 1, found: 2 })`.
    fn rdms_set_vectors_rejects_shape_change() {
        // Arrange
        let mut rdms = Rdms::from_vectors(array![[1.0, 2.0, 3.0]], None).expect("valid batch");

        // Act
        let result = rdms.set_vectors(Array2::zeros((2, 3)));

        // Assert
        assert_eq!(result, Err(RdmsError::DimensionMismatch { expected: 1, found: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure per-RDM and per-pattern descriptors are length-checked when
    // inserted, so a bad list never reaches a later transform.
    //
    // Given
    // -----
    // - A 2×3 batch (n_rdm = 2, n_dim = 3).
    //
    // Expect
    // ------
    // - Lists of the wrong length and scalars are rejected and not stored.
    // - Lists of the right length are stored; removal returns them.
    fn rdms_descriptor_inserts_are_length_checked() {
        // Arrange
        let mut rdms = Rdms::from_vectors(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], None)
            .expect("valid batch");

        // Act
        let bad_rdm = rdms.insert_rdm_descriptor("run", vec![0_i64, 1, 2]);
        let scalar_pattern = rdms.insert_pattern_descriptor("stim", "face");
        let good_rdm = rdms.insert_rdm_descriptor("run", vec![0_i64, 1]);
        let good_pattern = rdms.insert_pattern_descriptor("stim", vec!["a", "b", "c"]);

        // Assert
        assert_eq!(
            bad_rdm,
            Err(RdmsError::DescriptorLength { key: "run".to_string(), expected: 2, found: 3 })
        );
        assert_eq!(scalar_pattern, Err(RdmsError::DescriptorNotList { key: "stim".to_string() }));
        assert_eq!(good_rdm, Ok(None));
        assert_eq!(good_pattern, Ok(None));
        assert!(rdms.rdm_descriptors().check_lengths(2).is_ok());
        assert!(rdms.pattern_descriptors().check_lengths(3).is_ok());
        assert_eq!(
            rdms.remove_rdm_descriptor("run"),
            Some(DescriptorValue::from(vec![0_i64, 1]))
        );
        assert!(!rdms.rdm_descriptors().contains_key("run"));
    }
}
