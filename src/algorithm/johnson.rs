//! Johnson's all-pairs shortest paths.
//!
//! One Bellman-Ford run from a virtual node yields a potential `h[v]` for every node.
//! Reweighting each edge to `w + h[u] - h[v]` makes every weight non-negative while
//! keeping shortest paths shortest, so Dijkstra can then run from every node. True
//! distances are recovered as `d'[u][v] - h[u] + h[v]`.
//! O(V * E log V + V * E), which beats Floyd-Warshall on sparse graphs.

use log::debug;

use crate::algorithm::{bellman_ford, dijkstra, DistanceMatrix, ShortestPaths};
use crate::graph::{DirectedGraph, GraphBuilder, WeightMode};
use crate::{Error, Result};

pub fn all_pairs(graph: &DirectedGraph) -> Result<ShortestPaths<DistanceMatrix>> {
    let h = match potentials(graph)? {
        ShortestPaths::Distances(h) => h,
        ShortestPaths::NegativeCycle => return Ok(ShortestPaths::NegativeCycle),
    };

    let reweighted = reweight(graph, &h)?;
    debug!(
        "Johnson: reweighted {} edges, running Dijkstra from {} nodes",
        reweighted.edge_count(),
        reweighted.node_count()
    );

    let n = graph.node_count();
    let mut matrix = DistanceMatrix::filled(n, f64::INFINITY);
    for u in 0..n {
        let reduced = dijkstra::shortest_paths_from(&reweighted, u)?;
        for (v, (slot, d)) in matrix.row_mut(u).iter_mut().zip(reduced).enumerate() {
            if d != f64::INFINITY {
                *slot = d - h[u] + h[v];
            }
        }
    }

    Ok(ShortestPaths::Distances(matrix))
}

/// Node potentials from a Bellman-Ford run over the graph augmented with a virtual
/// node that has a zero-weight edge to every real node.
///
/// A negative cycle anywhere in the graph is reachable from the virtual node, and the
/// virtual node itself cannot lie on a cycle since nothing points back at it.
pub fn potentials(graph: &DirectedGraph) -> Result<ShortestPaths<Vec<f64>>> {
    let n = graph.node_count();
    let virtual_node = n;

    let mut builder = GraphBuilder::new(n + 1)?;
    for (from, to, weight) in graph.edges() {
        builder.add_edge(from, to, weight)?;
    }
    for v in 0..n {
        builder.add_edge(virtual_node, v, 0.0)?;
    }
    let augmented = builder.build();

    Ok(
        bellman_ford::shortest_paths_from(&augmented, virtual_node)?.map(|mut h| {
            h.truncate(n);
            h
        }),
    )
}

/// Rebuilds the graph with every edge `(u, v, w)` replaced by `w + h[u] - h[v]`.
pub fn reweight(graph: &DirectedGraph, h: &[f64]) -> Result<DirectedGraph> {
    if h.len() != graph.node_count() {
        return Err(Error::AlgorithmError(format!(
            "expected {} potentials, got {}",
            graph.node_count(),
            h.len()
        )));
    }

    let mut builder =
        GraphBuilder::new(graph.node_count())?.with_weight_mode(WeightMode::NonNegative);
    for (u, v, w) in graph.edges() {
        builder.add_edge(u, v, w + h[u] - h[v])?;
    }
    Ok(builder.build())
}
