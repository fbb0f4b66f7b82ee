//! APSP Bench - classic shortest-path algorithms side by side
//!
//! This library implements Dijkstra, Bellman-Ford, Floyd-Warshall and Johnson from
//! scratch over an immutable weighted directed graph, together with a synthetic graph
//! generator and a benchmark harness that times every algorithm on the same graph and
//! classifies each outcome as a duration or a structural failure (negative cycle,
//! invalid parameter, violated precondition).
//!
//! Dijkstra and Bellman-Ford are single-source; the harness composes them into an
//! all-pairs computation by running them once per source node, which is exactly the
//! cost the comparison is meant to expose.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;

pub use algorithm::{DistanceMatrix, DistanceVector, DistanceResult, ShortestPaths};
pub use benchmark::{
    Algorithm, AlgorithmOutcome, AlgorithmSelection, BenchmarkHarness, BenchmarkResult,
    ExperimentConfig, FailureKind, HarnessConfig,
};
/// Re-export main types for convenient use
pub use graph::{generate, generate_seeded, DirectedGraph, GraphBuilder, WeightMode};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Duplicate edge: from {0} to {1}")]
    DuplicateEdge(usize, usize),

    #[error("Non-finite edge weight: {0}")]
    NonFiniteWeight(f64),

    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

impl Error {
    /// Classifies the error into the tag reported by the benchmark harness.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::InvalidParameter(_)
            | Error::InvalidVertex(_)
            | Error::InvalidEdge(_, _)
            | Error::DuplicateEdge(_, _)
            | Error::NonFiniteWeight(_) => FailureKind::InvalidParameter,
            Error::PreconditionViolated(_) => FailureKind::PreconditionViolated,
            Error::AlgorithmError(_) => FailureKind::Internal,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
