//! transform::numerics — batch reductions and per-row rank statistics.
//!
//! Purpose
//! -------
//! Hold the small numeric kernels the transforms share: batch-wide extrema
//! and quantiles (computed once per call, never per row), and per-row
//! ranking under each tie-breaking policy.
//!
//! Conventions
//! -----------
//! - NaN entries are ignored by extrema and quantiles.
//! - Quantiles use linear interpolation between order statistics
//!   (`x[⌊h⌋] + (h − ⌊h⌋)·(x[⌊h⌋+1] − x[⌊h⌋])`, `h = (n − 1)·q`), which is
//!   NumPy's default definition.
//! - Ranks are 1-based. `average`, `min`, `max`, and `ordinal` delegate to
//!   `statrs`; `dense` is computed here since `statrs` has no dense tie
//!   breaker.

use ndarray::ArrayView2;
use statrs::statistics::{Data, OrderStatistics, RankTieBreaker};

use crate::transform::options::RankMethod;

/// Global `(min, max)` over the whole batch, NaN entries skipped.
///
/// Returns `(+∞, −∞)` for a batch with no non-NaN entries.
pub fn batch_extrema(block: ArrayView2<'_, f64>) -> (f64, f64) {
    block
        .iter()
        .filter(|value| !value.is_nan())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| (lo.min(value), hi.max(value)))
}

/// All non-NaN entries of the batch in ascending order.
pub fn sorted_values(block: ArrayView2<'_, f64>) -> Vec<f64> {
    let mut values: Vec<f64> = block.iter().copied().filter(|value| !value.is_nan()).collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Linear-interpolation quantile of ascending `sorted` values.
///
/// Parameters
/// ----------
/// - `sorted`: `&[f64]`
///   Ascending, NaN-free values.
/// - `q`: `f64`
///   Quantile in `[0, 1]`.
///
/// Returns
/// -------
/// `f64`
///   The `q`-quantile, or NaN when `sorted` is empty. `q = 0` and `q = 1`
///   return the exact minimum and maximum.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let last = sorted.len() - 1;
    let h = last as f64 * q;
    let lo = (h.floor() as usize).min(last);
    let frac = h - lo as f64;
    if frac == 0.0 || lo == last {
        return sorted[lo];
    }
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

/// Rank `values` under the given tie-breaking policy.
///
/// Parameters
/// ----------
/// - `values`: `&[f64]`
///   One condensed RDM; must be NaN-free (callers run
///   `validate_no_nan` first).
/// - `method`: [`RankMethod`]
///   Tie-breaking policy.
///
/// Returns
/// -------
/// `Vec<f64>`
///   Ranks in `1..=values.len()`, aligned with `values`.
pub fn rank_values(values: &[f64], method: RankMethod) -> Vec<f64> {
    let tie_breaker = match method {
        RankMethod::Average => RankTieBreaker::Average,
        RankMethod::Min => RankTieBreaker::Min,
        RankMethod::Max => RankTieBreaker::Max,
        RankMethod::Ordinal => RankTieBreaker::First,
        RankMethod::Dense => return dense_ranks(values),
    };
    let mut data = Data::new(values.to_vec());
    data.ranks(tie_breaker)
}

/// Dense ranks: position of each value among the distinct values, 1-based.
fn dense_ranks(values: &[f64]) -> Vec<f64> {
    let mut distinct = values.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    values.iter().map(|value| (distinct.partition_point(|d| d < value) + 1) as f64).collect()
}
