use apsp_bench::benchmark::ExperimentReport;
use apsp_bench::graph::{GeneratorConfig, WeightMode};
use apsp_bench::{
    Algorithm, AlgorithmOutcome, AlgorithmSelection, BenchmarkHarness, ExperimentConfig,
    HarnessConfig,
};
use std::env;
use std::fs;

// The three comparisons: dense positive, sparse positive, sparse with negative weights
fn default_experiments() -> Vec<ExperimentConfig> {
    vec![
        ExperimentConfig::new("Dense graph", GeneratorConfig::new(150, 0.8)),
        ExperimentConfig::new("Sparse graph", GeneratorConfig::new(500, 0.1)),
        ExperimentConfig::new(
            "Sparse graph, negative weights",
            GeneratorConfig::new(500, 0.1).with_negative_weights(true),
        )
        .with_algorithms(AlgorithmSelection::negative_tolerant()),
    ]
}

fn label(algorithm: Algorithm) -> String {
    let scope = if algorithm.is_single_source() {
        "V x SSSP"
    } else {
        "APSP"
    };
    format!("{} ({}):", algorithm, scope)
}

fn print_report(report: &ExperimentReport) {
    println!("\n{}", report.name);
    println!(
        "Nodes: {}, Density: {} (observed {:.3}), Edges: {}, Weights: {:?}",
        report.node_count,
        report.requested_density,
        report.observed_density,
        report.edge_count,
        report.weight_mode
    );

    for algorithm in Algorithm::ALL {
        let label = label(algorithm);
        match report.result.get(algorithm) {
            Some(AlgorithmOutcome::Success { elapsed, .. }) => {
                println!("  {:<26} {:.4} s", label, elapsed.as_secs_f64())
            }
            Some(outcome) => println!("  {:<26} {}", label, outcome),
            None if report.weight_mode == WeightMode::MayContainNegative
                && !algorithm.handles_negative_weights() =>
            {
                println!("  {:<26} INVALID (negative weights)", label)
            }
            None => {}
        }
    }
    println!("{}", "-".repeat(50));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [experiments.json] [--json] [--parallel]
    let args: Vec<String> = env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let parallel = args.iter().any(|a| a == "--parallel");
    let experiments = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => ExperimentConfig::list_from_json(&fs::read_to_string(path)?)?,
        None => default_experiments(),
    };

    let harness = BenchmarkHarness::new(HarnessConfig::default().with_parallel_sources(parallel));

    if !json_output {
        println!("Comparing shortest-path algorithms...");
        println!("{}", "-".repeat(50));
    }

    let mut reports = Vec::with_capacity(experiments.len());
    for experiment in &experiments {
        let report = harness.run_experiment(experiment)?;
        if !json_output {
            print_report(&report);
        }
        reports.push(report);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
