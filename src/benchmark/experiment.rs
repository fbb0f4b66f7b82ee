use serde::{Deserialize, Serialize};

use crate::benchmark::outcome::{AlgorithmSelection, BenchmarkResult};
use crate::graph::{DirectedGraph, GeneratorConfig, WeightMode};
use crate::{Error, Result};

/// One benchmark experiment: how to generate the graph and which algorithms to run.
///
/// Deserializes from JSON such as
/// `{"name": "sparse", "node_count": 500, "density": 0.1, "allow_negative": true,
///   "algorithms": ["floyd_warshall", "johnson", "bellman_ford"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub name: String,
    #[serde(flatten)]
    pub graph: GeneratorConfig,
    #[serde(default)]
    pub algorithms: AlgorithmSelection,
}

impl ExperimentConfig {
    pub fn new(name: impl Into<String>, graph: GeneratorConfig) -> Self {
        ExperimentConfig {
            name: name.into(),
            graph,
            algorithms: AlgorithmSelection::default(),
        }
    }

    pub fn with_algorithms(mut self, algorithms: AlgorithmSelection) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Parses a JSON array of experiments
    pub fn list_from_json(json: &str) -> Result<Vec<ExperimentConfig>> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("invalid experiment list: {}", e)))
    }
}

/// What an experiment ran on and how every algorithm fared
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub name: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub requested_density: f64,
    pub observed_density: f64,
    pub weight_mode: WeightMode,
    pub result: BenchmarkResult,
}

impl ExperimentReport {
    pub fn new(
        experiment: &ExperimentConfig,
        graph: &DirectedGraph,
        result: BenchmarkResult,
    ) -> Self {
        ExperimentReport {
            name: experiment.name.clone(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            requested_density: experiment.graph.density,
            observed_density: graph.density(),
            weight_mode: graph.weight_mode(),
            result,
        }
    }
}
