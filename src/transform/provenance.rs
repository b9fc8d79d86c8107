//! transform::provenance — measure labels and re-wrapping of results.
//!
//! Purpose
//! -------
//! Every transform ends the same way: derive a new dissimilarity-measure
//! label from the source label, copy the three descriptor mappings, and
//! build a new container around the transformed block. This module owns
//! that step.
//!
//! Key behaviors
//! -------------
//! - [`MeasureLabel`] encodes the label rule of each transform.
//! - [`rewrap`] builds the output container through
//!   [`RdmBatch::from_parts`]; the source container is only read.
//!
//! Invariants & assumptions
//! ------------------------
//! - Descriptor copies are structural (`Descriptors` is copy-on-write), so
//!   later edits to either container never reach the other.
//! - An absent label is treated as the empty string, except that a
//!   prefixed label of an absent source is the bare prefix. A present label
//!   is always joined with a single space, even when it is empty.

use ndarray::Array2;

use crate::{rdm::container::RdmBatch, transform::errors::TransformResult};

/// Label rule applied to the source dissimilarity measure.
///
/// - `RankSuffix`: append `" (ranks)"` unless the label already contains
///   `"(ranks)"`; surrounding whitespace is trimmed.
/// - `Sqrt`: `"squared euclidean"` → `"euclidean"`,
///   `"squared mahalanobis"` → `"mahalanobis"`, otherwise
///   `"sqrt of"` followed directly by the label (no space).
/// - `Unchanged`: keep the label as is, including an absent one.
/// - `Prefixed(prefix)`: `"{prefix} {label}"`, or just `prefix` when the
///   label is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureLabel {
    RankSuffix,
    Sqrt,
    Unchanged,
    Prefixed(&'static str),
}

impl MeasureLabel {
    /// Derive the new label from the source label.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rdm_transforms::transform::provenance::MeasureLabel;
    /// assert_eq!(MeasureLabel::Sqrt.apply(Some("squared euclidean")).as_deref(), Some("euclidean"));
    /// assert_eq!(MeasureLabel::Sqrt.apply(Some("correlation")).as_deref(), Some("sqrt ofcorrelation"));
    /// assert_eq!(
    ///     MeasureLabel::RankSuffix.apply(Some("euclidean (ranks)")).as_deref(),
    ///     Some("euclidean (ranks)")
    /// );
    /// ```
    pub fn apply(&self, measure: Option<&str>) -> Option<String> {
        let source = measure.unwrap_or("");
        match self {
            MeasureLabel::Unchanged => measure.map(str::to_string),
            MeasureLabel::RankSuffix => {
                if source.contains("(ranks)") {
                    Some(source.to_string())
                } else {
                    Some(format!("{source} (ranks)").trim().to_string())
                }
            }
            MeasureLabel::Sqrt => match source {
                "squared euclidean" => Some("euclidean".to_string()),
                "squared mahalanobis" => Some("mahalanobis".to_string()),
                other => Some(format!("sqrt of{other}")),
            },
            MeasureLabel::Prefixed(prefix) => match measure {
                None => Some(prefix.to_string()),
                Some(source) => Some(format!("{prefix} {source}")),
            },
        }
    }
}

/// Build the output container of a transform.
///
/// Parameters
/// ----------
/// - `source`: `&R`
///   The input container; only its label and descriptors are read.
/// - `dissimilarities`: `Array2<f64>`
///   The transformed block, same shape as the source block.
/// - `label`: [`MeasureLabel`]
///   Label rule of the transform.
///
/// Returns
/// -------
/// `TransformResult<R>`
///   A new container with copied descriptors, or the container's
///   construction error wrapped in `TransformError`.
pub fn rewrap<R: RdmBatch>(
    source: &R, dissimilarities: Array2<f64>, label: MeasureLabel,
) -> TransformResult<R> {
    let measure = label.apply(source.dissimilarity_measure());
    let rdms = R::from_parts(
        dissimilarities,
        measure,
        source.descriptors().clone(),
        source.rdm_descriptors().clone(),
        source.pattern_descriptors().clone(),
    )?;
    Ok(rdms)
}
