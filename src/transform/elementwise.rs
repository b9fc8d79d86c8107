//! transform::elementwise — rank, sqrt, positive, min-max, geo-topological,
//! and generic transforms.
//!
//! Purpose
//! -------
//! Implement the transforms that act on each dissimilarity independently,
//! or on each row independently (rank), possibly after one batch-wide
//! reduction (min-max, geo-topological).
//!
//! Key behaviors
//! -------------
//! - Every transform follows extract → compute → re-wrap: take an owned
//!   working copy via `RdmBatch::get_vectors`, transform it, and hand it to
//!   [`rewrap`] with the transform's label rule.
//! - Batch-wide statistics (global min/max, quantiles) are computed once
//!   before any entry is rescaled, so all RDMs in a call share one scale.
//! - Degenerate ranges follow the caller's [`RangePolicy`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Output shape equals input shape for every transform here.
//! - The input container is never modified.
//! - NaN entries pass through sqrt, positive, min-max, and geo-topological
//!   unchanged (as NaN); the rank transform rejects them.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover each transform on small hand-computable
//!   batches; properties across random batches live in
//!   `tests/transform_properties.rs`.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::{
    rdm::container::RdmBatch,
    transform::{
        errors::TransformResult,
        numerics::{batch_extrema, quantile, rank_values, sorted_values},
        options::{QuantileBand, RangePolicy, RankMethod},
        provenance::{MeasureLabel, rewrap},
        validation::{validate_no_nan, validate_range, validate_same_shape},
    },
};

/// Rank-transform every RDM of a batch.
///
/// Parameters
/// ----------
/// - `rdms`: `&R`
///   Input batch.
/// - `method`: [`RankMethod`]
///   Tie-breaking policy; `RankMethod::default()` is `Average`.
///
/// Returns
/// -------
/// `TransformResult<R>`
///   New batch whose rows hold ranks in `1..=n_pairs`, labelled
///   `"<measure> (ranks)"` (never suffixed twice).
///
/// Errors
/// ------
/// - `TransformError::NonFiniteData` if any entry is NaN.
/// - `TransformError::Container` if the container rejects the result.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rdm_transforms::rdm::{Rdms, RdmBatch};
/// # use rdm_transforms::transform::{rank_transform, RankMethod};
/// let rdms = Rdms::from_vectors(array![[0.3, 0.1, 0.2]], Some("euclidean")).unwrap();
/// let ranked = rank_transform(&rdms, RankMethod::Average).unwrap();
/// assert_eq!(ranked.dissimilarities(), array![[3.0, 1.0, 2.0]]);
/// assert_eq!(ranked.dissimilarity_measure(), Some("euclidean (ranks)"));
/// ```
pub fn rank_transform<R: RdmBatch>(rdms: &R, method: RankMethod) -> TransformResult<R> {
    let mut dissimilarities = rdms.get_vectors();
    debug!(
        transform = "rank",
        method = method.as_str(),
        n_rdm = dissimilarities.nrows(),
        n_pairs = dissimilarities.ncols(),
        "applying RDM transform"
    );
    validate_no_nan(dissimilarities.view())?;

    for mut row in dissimilarities.rows_mut() {
        let ranks = rank_values(&row.to_vec(), method);
        row.assign(&Array1::from(ranks));
    }
    rewrap(rdms, dissimilarities, MeasureLabel::RankSuffix)
}

/// Square-root transform: negatives clamped to 0, then `sqrt`.
///
/// Label: `"squared euclidean"` → `"euclidean"`, `"squared mahalanobis"` →
/// `"mahalanobis"`, otherwise `"sqrt of"` + label.
pub fn sqrt_transform<R: RdmBatch>(rdms: &R) -> TransformResult<R> {
    let mut dissimilarities = rdms.get_vectors();
    debug!(transform = "sqrt", n_rdm = dissimilarities.nrows(), "applying RDM transform");
    dissimilarities.mapv_inplace(|x| clamp_negative(x).sqrt());
    rewrap(rdms, dissimilarities, MeasureLabel::Sqrt)
}

/// Clamp negative dissimilarities to 0; the label is kept as is.
pub fn positive_transform<R: RdmBatch>(rdms: &R) -> TransformResult<R> {
    let mut dissimilarities = rdms.get_vectors();
    debug!(transform = "positive", n_rdm = dissimilarities.nrows(), "applying RDM transform");
    dissimilarities.mapv_inplace(clamp_negative);
    rewrap(rdms, dissimilarities, MeasureLabel::Unchanged)
}

/// Apply an arbitrary function to the whole `(n_rdm × n_pairs)` block.
///
/// Parameters
/// ----------
/// - `rdms`: `&R`
///   Input batch.
/// - `fun`: `FnOnce(Array2<f64>) -> Array2<f64>`
///   Receives an owned copy of the full block (not row by row) and must
///   return a block of the same shape.
///
/// Returns
/// -------
/// `TransformResult<R>`
///   New batch labelled `"transformed <measure>"`.
///
/// Errors
/// ------
/// - `TransformError::ShapeMismatch` if `fun` changes the shape.
pub fn transform<R, F>(rdms: &R, fun: F) -> TransformResult<R>
where
    R: RdmBatch,
    F: FnOnce(Array2<f64>) -> Array2<f64>,
{
    let dissimilarities = rdms.get_vectors();
    let expected = dissimilarities.dim();
    debug!(transform = "generic", n_rdm = expected.0, "applying RDM transform");
    let transformed = fun(dissimilarities);
    validate_same_shape(expected, transformed.dim())?;
    rewrap(rdms, transformed, MeasureLabel::Prefixed("transformed"))
}

/// Min-max transform with the default [`RangePolicy::Strict`].
///
/// See [`minmax_transform_with`].
pub fn minmax_transform<R: RdmBatch>(rdms: &R) -> TransformResult<R> {
    minmax_transform_with(rdms, RangePolicy::Strict)
}

/// Rescale the whole batch to `[0, 1]` with one global min and max.
///
/// Parameters
/// ----------
/// - `rdms`: `&R`
///   Input batch.
/// - `policy`: [`RangePolicy`]
///   Behavior when `max == min`.
///
/// Returns
/// -------
/// `TransformResult<R>`
///   New batch with `(x − min) / (max − min)` per entry, labelled
///   `"minmax transformed <measure>"`. The global minimum maps to exactly
///   0 and the global maximum to exactly 1.
///
/// Errors
/// ------
/// - `TransformError::DegenerateRange` under `Strict` when the batch has a
///   single distinct value (or no non-NaN value).
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rdm_transforms::rdm::{Rdms, RdmBatch};
/// # use rdm_transforms::transform::minmax_transform;
/// let rdms = Rdms::from_vectors(array![[0.0, 5.0, 15.0]], None).unwrap();
/// let scaled = minmax_transform(&rdms).unwrap();
/// assert_eq!(scaled.dissimilarities()[[0, 2]], 1.0);
/// ```
pub fn minmax_transform_with<R: RdmBatch>(rdms: &R, policy: RangePolicy) -> TransformResult<R> {
    let dissimilarities = rdms.get_vectors();
    debug!(transform = "minmax", n_rdm = dissimilarities.nrows(), "applying RDM transform");
    let dissimilarities = minmax_scaled(dissimilarities, "minmax", policy)?;
    rewrap(rdms, dissimilarities, MeasureLabel::Prefixed("minmax transformed"))
}

/// Geo-topological transform with the default [`RangePolicy::Strict`].
///
/// See [`geotopological_transform_with`].
pub fn geotopological_transform<R: RdmBatch>(rdms: &R, band: QuantileBand) -> TransformResult<R> {
    geotopological_transform_with(rdms, band, RangePolicy::Strict)
}

/// Geo-topological transform (Lin & Kriegeskorte, 2023).
///
/// Parameters
/// ----------
/// - `rdms`: `&R`
///   Input batch.
/// - `band`: [`QuantileBand`]
///   Validated quantiles `l < u`.
/// - `policy`: [`RangePolicy`]
///   Behavior when the two quantiles coincide.
///
/// Returns
/// -------
/// `TransformResult<R>`
///   New batch labelled `"geo-topological transformed <measure>"`, where,
///   with `gt_min`/`gt_max` the batch-wide `l`/`u` quantiles, each entry
///   `x` becomes:
///   - `0` if `x < gt_min`,
///   - `(x − gt_min) / (gt_max − gt_min)` if `gt_min ≤ x ≤ gt_max`,
///   - `1` if `x > gt_max`.
///
/// Errors
/// ------
/// - `TransformError::DegenerateRange` under `Strict` when
///   `gt_max == gt_min`.
///
/// Notes
/// -----
/// - Each entry is classified from its original value in a single pass;
///   an entry mapped into the band is never reclassified.
/// - With `l = 0` and `u = 1` the result equals the min-max transform.
pub fn geotopological_transform_with<R: RdmBatch>(
    rdms: &R, band: QuantileBand, policy: RangePolicy,
) -> TransformResult<R> {
    let mut dissimilarities = rdms.get_vectors();
    debug!(
        transform = "geo-topological",
        l = band.lower(),
        u = band.upper(),
        n_rdm = dissimilarities.nrows(),
        "applying RDM transform"
    );

    let sorted = sorted_values(dissimilarities.view());
    let gt_min = quantile(&sorted, band.lower());
    let gt_max = quantile(&sorted, band.upper());
    validate_range("geo-topological", gt_min, gt_max, policy)?;

    let width = gt_max - gt_min;
    dissimilarities.mapv_inplace(|x| band_value(x, gt_min, gt_max, width));
    rewrap(rdms, dissimilarities, MeasureLabel::Prefixed("geo-topological transformed"))
}

/// Min-max rescale a block with one batch-wide scale.
///
/// Shared with the geodesic transform, which normalizes before building
/// graphs; `transform` names the caller in `DegenerateRange` errors.
pub(crate) fn minmax_scaled(
    mut dissimilarities: Array2<f64>, transform: &'static str, policy: RangePolicy,
) -> TransformResult<Array2<f64>> {
    let (d_min, d_max) = batch_extrema(dissimilarities.view());
    validate_range(transform, d_min, d_max, policy)?;

    let range = d_max - d_min;
    dissimilarities.mapv_inplace(|x| (x - d_min) / range);
    Ok(dissimilarities)
}

#[inline]
fn clamp_negative(x: f64) -> f64 {
    if x < 0.0 { 0.0 } else { x }
}

#[inline]
fn band_value(x: f64, gt_min: f64, gt_max: f64, width: f64) -> f64 {
    if x.is_nan() {
        x
    } else if x < gt_min {
        0.0
    } else if x <= gt_max {
        (x - gt_min) / width
    } else {
        1.0
    }
}
