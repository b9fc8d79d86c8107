//! Dense Floyd–Warshall over an `ndarray` adjacency matrix.
//!
//! The graph is the weight matrix itself, with `f64::INFINITY` standing
//! for a missing edge. O(n³) time, O(n²) memory; no per-row allocation
//! beyond one `n × n` copy.

use ndarray::{Array2, ArrayView2};

use crate::{
    graph::ShortestPathBackend,
    transform::errors::{TransformError, TransformResult},
};

/// Shortest paths through an in-place Floyd–Warshall on a dense matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseFloydWarshall;

impl ShortestPathBackend for DenseFloydWarshall {
    type Graph = Array2<f64>;

    fn build_weighted_graph(&self, weights: ArrayView2<'_, f64>) -> Self::Graph {
        let mut adjacency = weights.to_owned();
        adjacency.diag_mut().fill(0.0);
        adjacency
    }

    fn remove_edges<P>(&self, graph: &mut Self::Graph, predicate: P)
    where
        P: Fn(f64) -> bool,
    {
        for ((i, j), weight) in graph.indexed_iter_mut() {
            if i != j && predicate(*weight) {
                *weight = f64::INFINITY;
            }
        }
    }

    fn all_pairs_shortest_paths(&self, graph: &Self::Graph) -> TransformResult<Array2<f64>> {
        let n_dim = graph.nrows();
        let mut dist = graph.clone();
        for k in 0..n_dim {
            for i in 0..n_dim {
                let d_ik = dist[[i, k]];
                if d_ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n_dim {
                    let through_k = d_ik + dist[[k, j]];
                    if through_k < dist[[i, j]] {
                        dist[[i, j]] = through_k;
                    }
                }
            }
        }
        if (0..n_dim).any(|i| dist[[i, i]] < 0.0) {
            return Err(TransformError::NegativeCycle);
        }
        Ok(dist)
    }
}
