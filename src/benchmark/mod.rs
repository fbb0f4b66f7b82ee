pub mod experiment;
pub mod harness;
pub mod outcome;

pub use experiment::{ExperimentConfig, ExperimentReport};
pub use harness::{BenchmarkHarness, HarnessConfig};
pub use outcome::{Algorithm, AlgorithmOutcome, AlgorithmSelection, BenchmarkResult, FailureKind};
