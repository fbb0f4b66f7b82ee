use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::{Error, Result};

/// Advisory tag recording how a graph was generated.
///
/// Engines never rely on it: Dijkstra's precondition check and Johnson's reweighting
/// look at the actual edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightMode {
    NonNegative,
    MayContainNegative,
}

/// An immutable weighted directed graph stored as sorted adjacency lists.
///
/// There is at most one edge per ordered pair and never a self loop. Nodes are the
/// indices `0..node_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph {
    /// Number of nodes in the graph
    node_count: usize,

    /// Outgoing edges for each node, sorted by target: node -> [(target, weight)]
    outgoing: Vec<Vec<(usize, f64)>>,

    /// Total number of edges
    edge_count: usize,

    weight_mode: WeightMode,
}

impl DirectedGraph {
    /// Builds a graph from an edge list.
    ///
    /// Fails on self loops, out-of-range endpoints, repeated ordered pairs and
    /// non-finite weights.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut builder = GraphBuilder::new(node_count)?;
        for (from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn weight_mode(&self) -> WeightMode {
        self.weight_mode
    }

    /// Returns the outgoing edges of a node as `(target, weight)` pairs sorted by target.
    ///
    /// Unknown nodes have no outgoing edges.
    pub fn outgoing_edges(&self, node: usize) -> &[(usize, f64)] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the node exists in the graph
    pub fn has_node(&self, node: usize) -> bool {
        node < self.node_count
    }

    /// Returns true if there's an edge between the two nodes
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<f64> {
        let edges = self.outgoing_edges(from);
        edges
            .binary_search_by_key(&to, |&(target, _)| target)
            .ok()
            .map(|idx| edges[idx].1)
    }

    /// Iterates over every edge as `(source, target, weight)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Scans the actual weights, independently of the advisory [`WeightMode`].
    pub fn has_negative_edge(&self) -> bool {
        self.edges().any(|(_, _, weight)| weight < 0.0)
    }

    /// Fraction of the `n * (n - 1)` possible ordered pairs that carry an edge.
    pub fn density(&self) -> f64 {
        let possible = self.node_count * (self.node_count - 1);
        if possible == 0 {
            0.0
        } else {
            self.edge_count as f64 / possible as f64
        }
    }
}

/// Collects edges and freezes them into a [`DirectedGraph`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    edges: BTreeMap<(usize, usize), f64>,
    weight_mode: Option<WeightMode>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `node_count` nodes (at least one).
    pub fn new(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidParameter(
                "node count must be positive".to_string(),
            ));
        }
        Ok(GraphBuilder {
            node_count,
            edges: BTreeMap::new(),
            weight_mode: None,
        })
    }

    /// Overrides the advisory weight tag; by default it is derived from the weights.
    pub fn with_weight_mode(mut self, mode: WeightMode) -> Self {
        self.weight_mode = Some(mode);
        self
    }

    /// Adds a directed edge between nodes with the given weight
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        if from >= self.node_count || to >= self.node_count || from == to {
            return Err(Error::InvalidEdge(from, to));
        }
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight(weight));
        }
        match self.edges.entry((from, to)) {
            Entry::Occupied(_) => Err(Error::DuplicateEdge(from, to)),
            Entry::Vacant(slot) => {
                slot.insert(weight);
                Ok(())
            }
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn build(self) -> DirectedGraph {
        let weight_mode = self.weight_mode.unwrap_or_else(|| {
            if self.edges.values().any(|&weight| weight < 0.0) {
                WeightMode::MayContainNegative
            } else {
                WeightMode::NonNegative
            }
        });

        let mut outgoing = vec![Vec::new(); self.node_count];
        let edge_count = self.edges.len();
        // BTreeMap order keeps every adjacency list sorted by target
        for ((from, to), weight) in self.edges {
            outgoing[from].push((to, weight));
        }

        DirectedGraph {
            node_count: self.node_count,
            outgoing,
            edge_count,
            weight_mode,
        }
    }
}
