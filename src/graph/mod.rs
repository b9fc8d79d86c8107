//! graph — shortest-path capability used by the geodesic transform.
//!
//! Purpose
//! -------
//! Isolate the one genuinely algorithmic dependency of the transform
//! engine (all-pairs shortest paths on a weighted graph) behind the
//! [`ShortestPathBackend`] trait, so the geodesic transform is written
//! against three operations and any graph library can be plugged in.
//!
//! Key behaviors
//! -------------
//! - [`ShortestPathBackend::build_weighted_graph`] turns a symmetric
//!   weight matrix into an undirected graph with one edge per pattern pair.
//! - [`ShortestPathBackend::remove_edges`] severs every edge whose weight
//!   matches a predicate.
//! - [`ShortestPathBackend::all_pairs_shortest_paths`] returns the dense
//!   `n × n` matrix of sum-of-weights distances, with `f64::INFINITY` for
//!   unreachable pairs and zeros on the diagonal.
//!
//! Backends
//! --------
//! - [`PetgraphBackend`]: `petgraph::graph::UnGraph` and
//!   `petgraph::algo::floyd_warshall`. Used by default.
//! - [`DenseFloydWarshall`]: adjacency matrix in an `ndarray::Array2`, with
//!   `∞` marking absent edges.
//!
//! Invariants & assumptions
//! ------------------------
//! - Zero-weight off-diagonal entries are edges of weight zero, not missing
//!   edges.
//! - Weights are non-negative in practice (min-max normalized input); a
//!   negative cycle is reported as `TransformError::NegativeCycle`.

pub mod floyd_warshall;
pub mod petgraph_backend;

use ndarray::{Array2, ArrayView2};

use crate::transform::errors::TransformResult;

pub use self::floyd_warshall::DenseFloydWarshall;
pub use self::petgraph_backend::PetgraphBackend;

/// Weighted-graph operations needed by the geodesic transform.
///
/// - `type Graph`: backend-specific graph representation.
///
/// Required:
/// - `build_weighted_graph(weights)`: undirected graph, edge `i–j` with
///   weight `weights[[i, j]]` for every `i < j`.
/// - `remove_edges(graph, predicate)`: drop edges whose weight satisfies
///   `predicate`.
/// - `all_pairs_shortest_paths(graph)`: `n × n` distance matrix,
///   `f64::INFINITY` where no path exists.
pub trait ShortestPathBackend {
    type Graph;

    fn build_weighted_graph(&self, weights: ArrayView2<'_, f64>) -> Self::Graph;
    fn remove_edges<P>(&self, graph: &mut Self::Graph, predicate: P)
    where
        P: Fn(f64) -> bool;
    fn all_pairs_shortest_paths(&self, graph: &Self::Graph) -> TransformResult<Array2<f64>>;
}
