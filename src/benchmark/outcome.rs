use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::algorithm::DistanceResult;
use crate::{Error, Result};

/// The four engines the harness knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Johnson,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::FloydWarshall,
        Algorithm::Johnson,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::FloydWarshall => "Floyd-Warshall",
            Algorithm::Johnson => "Johnson",
        }
    }

    /// Single-source engines are run once per node to cover all pairs
    pub fn is_single_source(&self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::BellmanFord)
    }

    /// Whether the engine accepts negative edge weights
    pub fn handles_negative_weights(&self) -> bool {
        !matches!(self, Algorithm::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellmanford" | "bf" => Ok(Algorithm::BellmanFord),
            "floydwarshall" | "fw" => Ok(Algorithm::FloydWarshall),
            "johnson" => Ok(Algorithm::Johnson),
            _ => Err(Error::InvalidParameter(format!("unknown algorithm: {}", s))),
        }
    }
}

/// Ordered set of algorithms to run; duplicates are dropped, first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Algorithm>", into = "Vec<Algorithm>")]
pub struct AlgorithmSelection(Vec<Algorithm>);

impl AlgorithmSelection {
    pub fn new<I>(algorithms: I) -> Self
    where
        I: IntoIterator<Item = Algorithm>,
    {
        let mut selected = Vec::new();
        for algorithm in algorithms {
            if !selected.contains(&algorithm) {
                selected.push(algorithm);
            }
        }
        AlgorithmSelection(selected)
    }

    /// All four engines
    pub fn all() -> Self {
        AlgorithmSelection::new(Algorithm::ALL)
    }

    /// The engines that accept negative weights
    pub fn negative_tolerant() -> Self {
        AlgorithmSelection::new(
            Algorithm::ALL
                .into_iter()
                .filter(Algorithm::handles_negative_weights),
        )
    }

    pub fn without(&self, algorithm: Algorithm) -> Self {
        AlgorithmSelection(self.0.iter().copied().filter(|&a| a != algorithm).collect())
    }

    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.0.contains(&algorithm)
    }

    pub fn iter(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AlgorithmSelection {
    fn default() -> Self {
        AlgorithmSelection::all()
    }
}

impl FromIterator<Algorithm> for AlgorithmSelection {
    fn from_iter<I: IntoIterator<Item = Algorithm>>(iter: I) -> Self {
        AlgorithmSelection::new(iter)
    }
}

impl From<Vec<Algorithm>> for AlgorithmSelection {
    fn from(algorithms: Vec<Algorithm>) -> Self {
        AlgorithmSelection::new(algorithms)
    }
}

impl From<AlgorithmSelection> for Vec<Algorithm> {
    fn from(selection: AlgorithmSelection) -> Self {
        selection.0
    }
}

impl FromStr for AlgorithmSelection {
    type Err = Error;

    /// Parses a comma separated list such as `"dijkstra,johnson"`; `"all"` selects every engine.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(AlgorithmSelection::all());
        }
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Algorithm::from_str)
            .collect()
    }
}

/// Failure tags surfaced next to [`AlgorithmOutcome::NegativeCycleDetected`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidParameter,
    PreconditionViolated,
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::InvalidParameter => "InvalidParameter",
            FailureKind::PreconditionViolated => "PreconditionViolated",
            FailureKind::Internal => "Failure",
        })
    }
}

/// How one algorithm fared on one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlgorithmOutcome {
    Success {
        #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
        elapsed: Duration,
        /// Only kept when the harness is asked to retain results
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<DistanceResult>,
    },
    NegativeCycleDetected,
    Failure {
        kind: FailureKind,
        message: String,
    },
}

impl AlgorithmOutcome {
    pub fn from_error(error: &Error) -> Self {
        AlgorithmOutcome::Failure {
            kind: error.failure_kind(),
            message: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AlgorithmOutcome::Success { .. })
    }

    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, AlgorithmOutcome::NegativeCycleDetected)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            AlgorithmOutcome::Success { elapsed, .. } => Some(*elapsed),
            _ => None,
        }
    }

    /// Wall-clock seconds of a successful run
    pub fn elapsed_secs(&self) -> Option<f64> {
        self.elapsed().map(|elapsed| elapsed.as_secs_f64())
    }

    pub fn result(&self) -> Option<&DistanceResult> {
        match self {
            AlgorithmOutcome::Success { result, .. } => result.as_ref(),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            AlgorithmOutcome::Failure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for AlgorithmOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmOutcome::Success { elapsed, .. } => {
                write!(f, "{:.4} s", elapsed.as_secs_f64())
            }
            AlgorithmOutcome::NegativeCycleDetected => f.write_str("Negative Cycle Detected"),
            AlgorithmOutcome::Failure { kind, message } => write!(f, "{}: {}", kind, message),
        }
    }
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Outcomes of one benchmark run, in selection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkResult {
    outcomes: Vec<(Algorithm, AlgorithmOutcome)>,
}

impl BenchmarkResult {
    pub fn new() -> Self {
        BenchmarkResult::default()
    }

    /// Records an outcome, replacing an earlier one for the same algorithm
    pub fn insert(&mut self, algorithm: Algorithm, outcome: AlgorithmOutcome) {
        match self.outcomes.iter_mut().find(|(a, _)| *a == algorithm) {
            Some(entry) => entry.1 = outcome,
            None => self.outcomes.push((algorithm, outcome)),
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmOutcome> {
        self.outcomes
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &AlgorithmOutcome)> + '_ {
        self.outcomes.iter().map(|(a, outcome)| (*a, outcome))
    }

    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.outcomes.iter().map(|(a, _)| *a)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl Serialize for BenchmarkResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.outcomes.len()))?;
        for (algorithm, outcome) in &self.outcomes {
            map.serialize_entry(algorithm.name(), outcome)?;
        }
        map.end()
    }
}
