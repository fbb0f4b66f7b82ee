//! Floyd-Warshall all-pairs shortest paths.
//!
//! Dynamic programming over the set of allowed intermediate nodes: after round `k`,
//! `matrix[i][j]` is no longer than the shortest path from `i` to `j` whose
//! intermediate nodes all lie in `0..=k`. O(V^3) regardless of the edge count.

use log::debug;

use crate::algorithm::{DistanceMatrix, ShortestPaths};
use crate::graph::DirectedGraph;

pub fn all_pairs(graph: &DirectedGraph) -> ShortestPaths<DistanceMatrix> {
    let n = graph.node_count();
    let mut matrix = DistanceMatrix::filled(n, f64::INFINITY);
    for i in 0..n {
        matrix.set(i, i, 0.0);
    }
    for (from, to, weight) in graph.edges() {
        matrix.set(from, to, weight);
    }

    let mut via = vec![0.0; n];
    for k in 0..n {
        // Snapshot of row k; it can only shrink during round k if matrix[k][k] < 0
        via.copy_from_slice(matrix.row(k));
        for i in 0..n {
            let d_ik = matrix.get(i, k);
            if d_ik == f64::INFINITY {
                continue;
            }
            for (d_ij, &d_kj) in matrix.row_mut(i).iter_mut().zip(&via) {
                let candidate = d_ik + d_kj;
                if candidate < *d_ij {
                    *d_ij = candidate;
                }
            }
        }
    }

    if let Some(node) = (0..n).find(|&i| matrix.get(i, i) < 0.0) {
        debug!("Floyd-Warshall: node {} lies on a negative cycle", node);
        return ShortestPaths::NegativeCycle;
    }

    ShortestPaths::Distances(matrix)
}
