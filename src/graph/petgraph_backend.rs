//! petgraph-backed shortest paths.
//!
//! Builds a `petgraph::graph::UnGraph<(), f64>` with one node per pattern
//! and runs `petgraph::algo::floyd_warshall`. petgraph reports unreachable
//! pairs as `f64::MAX`; they are mapped to `f64::INFINITY` here.

use ndarray::{Array2, ArrayView2};
use petgraph::{
    algo::floyd_warshall,
    graph::{EdgeIndex, NodeIndex, UnGraph},
};

use crate::{
    graph::ShortestPathBackend,
    rdm::condensed::n_pairs_from_dim,
    transform::errors::{TransformError, TransformResult},
};

/// Shortest paths through petgraph's Floyd–Warshall.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetgraphBackend;

impl ShortestPathBackend for PetgraphBackend {
    type Graph = UnGraph<(), f64>;

    fn build_weighted_graph(&self, weights: ArrayView2<'_, f64>) -> Self::Graph {
        let n_dim = weights.nrows();
        let mut graph: UnGraph<(), f64> = UnGraph::with_capacity(n_dim, n_pairs_from_dim(n_dim));
        let nodes: Vec<NodeIndex> = (0..n_dim).map(|_| graph.add_node(())).collect();
        for i in 0..n_dim {
            for j in (i + 1)..n_dim {
                graph.add_edge(nodes[i], nodes[j], weights[[i, j]]);
            }
        }
        graph
    }

    fn remove_edges<P>(&self, graph: &mut Self::Graph, predicate: P)
    where
        P: Fn(f64) -> bool,
    {
        let severed: Vec<EdgeIndex> = graph
            .edge_indices()
            .filter(|&edge| graph.edge_weight(edge).is_some_and(|&weight| predicate(weight)))
            .collect();
        // `remove_edge` swaps the last edge into the freed slot; going from
        // the highest index down keeps the remaining indices valid.
        for edge in severed.into_iter().rev() {
            graph.remove_edge(edge);
        }
    }

    fn all_pairs_shortest_paths(&self, graph: &Self::Graph) -> TransformResult<Array2<f64>> {
        let n_dim = graph.node_count();
        let distances = floyd_warshall(graph, |edge| *edge.weight())
            .map_err(|_| TransformError::NegativeCycle)?;

        let mut paths = Array2::from_elem((n_dim, n_dim), f64::INFINITY);
        for ((source, target), distance) in distances {
            paths[[source.index(), target.index()]] =
                if distance >= f64::MAX { f64::INFINITY } else { distance };
        }
        Ok(paths)
    }
}
