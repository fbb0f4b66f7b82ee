//! Bellman-Ford single-source shortest paths with negative cycle detection.
//!
//! Runs `V - 1` full relaxation passes over every edge, then one more pass: if an
//! edge can still be relaxed, a negative cycle is reachable from the source. The
//! passes never stop early, so every invocation costs the full O(V * E).

use log::debug;

use crate::algorithm::{DistanceMatrix, DistanceVector, ShortestPaths};
use crate::graph::DirectedGraph;
use crate::{Error, Result};

pub fn shortest_paths_from(
    graph: &DirectedGraph,
    source: usize,
) -> Result<ShortestPaths<DistanceVector>> {
    if !graph.has_node(source) {
        return Err(Error::InvalidVertex(source));
    }

    let n = graph.node_count();
    let mut distances = vec![f64::INFINITY; n];
    distances[source] = 0.0;

    for _ in 1..n {
        relax_all(graph, &mut distances);
    }

    if relax_all(graph, &mut distances) {
        debug!("Bellman-Ford: negative cycle reachable from node {}", source);
        return Ok(ShortestPaths::NegativeCycle);
    }

    Ok(ShortestPaths::Distances(distances))
}

/// Runs Bellman-Ford once from every node, stopping at the first negative cycle.
pub fn all_pairs(graph: &DirectedGraph) -> Result<ShortestPaths<DistanceMatrix>> {
    let mut rows = Vec::with_capacity(graph.node_count());
    for source in 0..graph.node_count() {
        match shortest_paths_from(graph, source)? {
            ShortestPaths::Distances(row) => rows.push(row),
            ShortestPaths::NegativeCycle => return Ok(ShortestPaths::NegativeCycle),
        }
    }
    Ok(ShortestPaths::Distances(DistanceMatrix::from_rows(rows)))
}

/// One pass over every edge leaving a reachable node. Returns true if anything changed.
fn relax_all(graph: &DirectedGraph, distances: &mut [f64]) -> bool {
    let mut changed = false;
    for u in 0..graph.node_count() {
        let dist_u = distances[u];
        if dist_u == f64::INFINITY {
            continue;
        }
        for &(v, weight) in graph.outgoing_edges(u) {
            let candidate = dist_u + weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                changed = true;
            }
        }
    }
    changed
}
