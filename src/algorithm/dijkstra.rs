use crate::algorithm::{DistanceMatrix, DistanceVector};
use crate::data_structures::DistanceQueue;
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Classic label-setting Dijkstra from `source`, in O((V + E) log V).
///
/// Every edge weight must be non-negative. This is not checked: on a graph with a
/// negative edge the distances returned are simply wrong. Use
/// [`checked_shortest_paths_from`] to fail fast instead.
pub fn shortest_paths_from(graph: &DirectedGraph, source: usize) -> Result<DistanceVector> {
    if !graph.has_node(source) {
        return Err(Error::InvalidVertex(source));
    }

    let n = graph.node_count();
    let mut distances = vec![f64::INFINITY; n];
    distances[source] = 0.0;

    let mut queue = DistanceQueue::new(n);
    queue.push(source, 0.0);

    // Main Dijkstra loop
    while let Some((u, dist_u)) = queue.pop() {
        // Relax all outgoing edges
        for &(v, weight) in graph.outgoing_edges(u) {
            let new_dist = dist_u + weight;
            if new_dist < distances[v] {
                distances[v] = new_dist;
                queue.push(v, new_dist);
            }
        }
    }

    Ok(distances)
}

/// Same as [`shortest_paths_from`], but fails with [`Error::PreconditionViolated`]
/// when the graph has a negative edge.
pub fn checked_shortest_paths_from(
    graph: &DirectedGraph,
    source: usize,
) -> Result<DistanceVector> {
    ensure_non_negative(graph)?;
    shortest_paths_from(graph, source)
}

/// Runs Dijkstra once from every node, without checking the weights.
pub fn all_pairs(graph: &DirectedGraph) -> Result<DistanceMatrix> {
    let rows = (0..graph.node_count())
        .map(|source| shortest_paths_from(graph, source))
        .collect::<Result<Vec<_>>>()?;
    Ok(DistanceMatrix::from_rows(rows))
}

pub fn ensure_non_negative(graph: &DirectedGraph) -> Result<()> {
    match graph.edges().find(|&(_, _, weight)| weight < 0.0) {
        Some((from, to, weight)) => Err(Error::PreconditionViolated(format!(
            "Dijkstra requires non-negative weights, edge {} -> {} has weight {}",
            from, to, weight
        ))),
        None => Ok(()),
    }
}
