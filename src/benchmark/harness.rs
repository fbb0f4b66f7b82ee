use log::{debug, info, warn};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::algorithm::{
    bellman_ford, dijkstra, floyd_warshall, johnson, DistanceMatrix, DistanceVector, DistanceResult,
    ShortestPaths,
};
use crate::benchmark::experiment::{ExperimentConfig, ExperimentReport};
use crate::benchmark::outcome::{
    Algorithm, AlgorithmOutcome, AlgorithmSelection, BenchmarkResult, FailureKind,
};
use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Configuration for the benchmark harness
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Keep the computed distances in each successful outcome
    pub retain_results: bool,
    /// Fan the per-source runs of Dijkstra and Bellman-Ford out over the rayon pool
    pub parallel_sources: bool,
    /// Reject graphs with negative edges before running Dijkstra
    pub check_dijkstra_precondition: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            retain_results: false,
            parallel_sources: false,
            check_dijkstra_precondition: true,
        }
    }
}

impl HarnessConfig {
    pub fn with_retained_results(mut self, retain: bool) -> Self {
        self.retain_results = retain;
        self
    }

    pub fn with_parallel_sources(mut self, parallel: bool) -> Self {
        self.parallel_sources = parallel;
        self
    }

    pub fn with_dijkstra_precondition_check(mut self, check: bool) -> Self {
        self.check_dijkstra_precondition = check;
        self
    }
}

/// Times shortest-path engines on a graph and records how each one ended.
///
/// Each algorithm is isolated: an error, a negative cycle or even a panic in one
/// engine is recorded as that engine's outcome and the run moves on to the next.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkHarness {
    config: HarnessConfig,
}

impl BenchmarkHarness {
    pub fn new(config: HarnessConfig) -> Self {
        BenchmarkHarness { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every selected algorithm over all pairs of `graph`, in selection order.
    pub fn run(&self, graph: &DirectedGraph, selection: &AlgorithmSelection) -> BenchmarkResult {
        let mut result = BenchmarkResult::new();
        for algorithm in selection.iter() {
            let outcome = self.run_algorithm(graph, algorithm);
            match &outcome {
                AlgorithmOutcome::Success { elapsed, .. } => {
                    info!("{}: {:.4} s", algorithm, elapsed.as_secs_f64())
                }
                AlgorithmOutcome::NegativeCycleDetected => {
                    info!("{}: negative cycle detected", algorithm)
                }
                AlgorithmOutcome::Failure { kind, message } => {
                    warn!("{}: {} ({})", algorithm, kind, message)
                }
            }
            result.insert(algorithm, outcome);
        }
        result
    }

    /// Times one all-pairs computation.
    ///
    /// Single-source engines are invoked once per node; the precondition scan for
    /// Dijkstra happens before the clock starts.
    pub fn run_algorithm(&self, graph: &DirectedGraph, algorithm: Algorithm) -> AlgorithmOutcome {
        if let Err(error) = self.check_precondition(graph, algorithm) {
            return AlgorithmOutcome::from_error(&error);
        }

        let start = Instant::now();
        let computed = panic::catch_unwind(AssertUnwindSafe(|| self.all_pairs(graph, algorithm)));
        let elapsed = start.elapsed();

        let computed = computed.map(|run| run.map(|paths| paths.map(DistanceResult::Matrix)));
        self.classify(algorithm, elapsed, computed)
    }

    /// Times a single Dijkstra or Bellman-Ford invocation from `source`.
    pub fn run_single_source(
        &self,
        graph: &DirectedGraph,
        algorithm: Algorithm,
        source: usize,
    ) -> AlgorithmOutcome {
        if !algorithm.is_single_source() {
            return AlgorithmOutcome::from_error(&Error::InvalidParameter(format!(
                "{} is an all-pairs algorithm",
                algorithm
            )));
        }
        if let Err(error) = self.check_precondition(graph, algorithm) {
            return AlgorithmOutcome::from_error(&error);
        }

        let start = Instant::now();
        let computed =
            panic::catch_unwind(AssertUnwindSafe(|| single_source(graph, algorithm, source)));
        let elapsed = start.elapsed();

        let computed = computed.map(|run| run.map(|paths| paths.map(DistanceResult::Vector)));
        self.classify(algorithm, elapsed, computed)
    }

    /// Generates the experiment's graph and runs its algorithm selection on it.
    pub fn run_experiment(&self, experiment: &ExperimentConfig) -> Result<ExperimentReport> {
        let graph = experiment.graph.generate()?;
        info!(
            "experiment '{}': {} nodes, {} edges",
            experiment.name,
            graph.node_count(),
            graph.edge_count()
        );
        let result = self.run(&graph, &experiment.algorithms);
        Ok(ExperimentReport::new(experiment, &graph, result))
    }

    fn check_precondition(&self, graph: &DirectedGraph, algorithm: Algorithm) -> Result<()> {
        if algorithm == Algorithm::Dijkstra && self.config.check_dijkstra_precondition {
            dijkstra::ensure_non_negative(graph)?;
        }
        Ok(())
    }

    fn classify(
        &self,
        algorithm: Algorithm,
        elapsed: Duration,
        computed: std::thread::Result<Result<ShortestPaths<DistanceResult>>>,
    ) -> AlgorithmOutcome {
        match computed {
            Ok(Ok(ShortestPaths::Distances(distances))) => AlgorithmOutcome::Success {
                elapsed,
                result: self.config.retain_results.then_some(distances),
            },
            Ok(Ok(ShortestPaths::NegativeCycle)) => AlgorithmOutcome::NegativeCycleDetected,
            Ok(Err(error)) => AlgorithmOutcome::from_error(&error),
            Err(payload) => {
                debug!("{} panicked", algorithm);
                AlgorithmOutcome::Failure {
                    kind: FailureKind::Internal,
                    message: panic_message(payload.as_ref()),
                }
            }
        }
    }

    fn all_pairs(
        &self,
        graph: &DirectedGraph,
        algorithm: Algorithm,
    ) -> Result<ShortestPaths<DistanceMatrix>> {
        match algorithm {
            Algorithm::FloydWarshall => Ok(floyd_warshall::all_pairs(graph)),
            Algorithm::Johnson => johnson::all_pairs(graph),
            Algorithm::Dijkstra | Algorithm::BellmanFord if self.config.parallel_sources => {
                parallel_all_pairs(graph, algorithm)
            }
            Algorithm::Dijkstra => dijkstra::all_pairs(graph).map(ShortestPaths::Distances),
            Algorithm::BellmanFord => bellman_ford::all_pairs(graph),
        }
    }
}

fn single_source(
    graph: &DirectedGraph,
    algorithm: Algorithm,
    source: usize,
) -> Result<ShortestPaths<DistanceVector>> {
    match algorithm {
        Algorithm::Dijkstra => {
            dijkstra::shortest_paths_from(graph, source).map(ShortestPaths::Distances)
        }
        Algorithm::BellmanFord => bellman_ford::shortest_paths_from(graph, source),
        Algorithm::FloydWarshall | Algorithm::Johnson => Err(Error::InvalidParameter(format!(
            "{} is an all-pairs algorithm",
            algorithm
        ))),
    }
}

/// One single-source run per node on the rayon pool; rows come back in source order.
fn parallel_all_pairs(
    graph: &DirectedGraph,
    algorithm: Algorithm,
) -> Result<ShortestPaths<DistanceMatrix>> {
    let runs = (0..graph.node_count())
        .into_par_iter()
        .map(|source| single_source(graph, algorithm, source))
        .collect::<Result<Vec<_>>>()?;

    let mut rows = Vec::with_capacity(runs.len());
    for run in runs {
        match run {
            ShortestPaths::Distances(row) => rows.push(row),
            ShortestPaths::NegativeCycle => return Ok(ShortestPaths::NegativeCycle),
        }
    }
    Ok(ShortestPaths::Distances(DistanceMatrix::from_rows(rows)))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("engine panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("engine panicked: {}", message)
    } else {
        "engine panicked".to_string()
    }
}
