//! transform::geodesic — graph-geodesic transform of RDM batches.
//!
//! Purpose
//! -------
//! Replace every dissimilarity by a shortest-path length through a graph
//! whose saturated edges (normalized dissimilarity exactly 1) have been
//! removed, so that far-apart patterns are only related through chains of
//! closer ones.
//!
//! Key behaviors
//! -------------
//! - Min-max normalize the whole batch once (one global scale), then for
//!   each row: condensed → square, build a complete weighted graph, remove
//!   saturated edges, run all-pairs shortest paths, square → condensed.
//! - The condensed length is validated before any matrix or graph is
//!   built.
//! - Unreachable pattern pairs come out as `f64::INFINITY`; rows with such
//!   pairs are reported through a `tracing` debug event.
//!
//! Invariants & assumptions
//! ------------------------
//! - Zero-weight edges are real edges; only weight-1 and NaN edges are
//!   pruned.
//! - Normalized weights lie in `[0, 1]`, so the backend never sees a
//!   negative cycle on finite input.

use ndarray::Axis;
use tracing::debug;

use crate::{
    graph::{PetgraphBackend, ShortestPathBackend},
    rdm::{
        condensed::{to_condensed, to_square},
        container::RdmBatch,
    },
    transform::{
        elementwise::minmax_scaled,
        errors::TransformResult,
        options::RangePolicy,
        provenance::{MeasureLabel, rewrap},
        validation::validate_pair_count,
    },
};

/// Geodesic transform with the petgraph backend and
/// [`RangePolicy::Strict`].
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rdm_transforms::rdm::{Rdms, RdmBatch};
/// # use rdm_transforms::transform::geodesic_transform;
/// // Patterns 0 and 1 are close; pattern 2 is maximally far from both.
/// let rdms = Rdms::from_vectors(array![[0.0, 1.0, 1.0]], Some("euclidean")).unwrap();
/// let geo = geodesic_transform(&rdms).unwrap();
/// assert_eq!(geo.dissimilarities()[[0, 0]], 0.0);
/// assert!(geo.dissimilarities()[[0, 1]].is_infinite());
/// ```
pub fn geodesic_transform<R: RdmBatch>(rdms: &R) -> TransformResult<R> {
    geodesic_transform_with(rdms, &PetgraphBackend, RangePolicy::Strict)
}

/// Geodesic transform over a chosen shortest-path backend.
///
/// Parameters
/// ----------
/// - `rdms`: `&R`
///   Input batch.
/// - `backend`: `&B`
///   Any [`ShortestPathBackend`].
/// - `policy`: [`RangePolicy`]
///   Degenerate-range behavior of the min-max normalization.
///
/// Returns
/// -------
/// `TransformResult<R>`
///   New batch of geodesic distances labelled
///   `"geodesic transformed <measure>"`.
///
/// Errors
/// ------
/// - `TransformError::Shape` if `n_pairs` is not a triangular number.
/// - `TransformError::DegenerateRange` under `Strict` for a batch with a
///   single distinct value.
/// - `TransformError::NegativeCycle` if the backend reports one.
pub fn geodesic_transform_with<R, B>(
    rdms: &R, backend: &B, policy: RangePolicy,
) -> TransformResult<R>
where
    R: RdmBatch,
    B: ShortestPathBackend,
{
    let n_dim = validate_pair_count(rdms.n_pairs())?;
    debug!(transform = "geodesic", n_rdm = rdms.n_rdm(), n_dim, "applying RDM transform");

    let mut dissimilarities = minmax_scaled(rdms.get_vectors(), "geodesic", policy)?;
    for (row_idx, mut row) in dissimilarities.axis_iter_mut(Axis(0)).enumerate() {
        let weights = to_square(row.view())?;
        let mut graph = backend.build_weighted_graph(weights.view());
        backend.remove_edges(&mut graph, is_saturated);
        let paths = backend.all_pairs_shortest_paths(&graph)?;
        let geodesics = to_condensed(paths.view())?;

        let unreachable = geodesics.iter().filter(|d| d.is_infinite()).count();
        if unreachable > 0 {
            debug!(row = row_idx, unreachable, "geodesic RDM has disconnected pattern pairs");
        }
        row.assign(&geodesics);
    }
    rewrap(rdms, dissimilarities, MeasureLabel::Prefixed("geodesic transformed"))
}

#[inline]
fn is_saturated(weight: f64) -> bool {
    weight == 1.0 || weight.is_nan()
}
