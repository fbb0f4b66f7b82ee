use apsp_bench::algorithm::{dijkstra, DistanceResult};
use apsp_bench::graph::{generate_seeded, GeneratorConfig};
use apsp_bench::{
    Algorithm, AlgorithmOutcome, AlgorithmSelection, BenchmarkHarness, DirectedGraph,
    ExperimentConfig, FailureKind, HarnessConfig,
};

fn create_negative_triangle() -> DirectedGraph {
    DirectedGraph::from_edges(3, vec![(0, 1, 1.0), (1, 2, -5.0), (2, 0, 1.0)]).unwrap()
}

fn retaining_harness() -> BenchmarkHarness {
    BenchmarkHarness::new(HarnessConfig::default().with_retained_results(true))
}

#[test]
fn test_outcomes_follow_selection_order() {
    let graph = generate_seeded(20, 0.3, false, Some(1)).unwrap();
    let selection = AlgorithmSelection::new([
        Algorithm::Johnson,
        Algorithm::Dijkstra,
        Algorithm::FloydWarshall,
        Algorithm::BellmanFord,
    ]);

    let result = BenchmarkHarness::default().run(&graph, &selection);

    assert_eq!(result.len(), 4);
    assert_eq!(
        result.algorithms().collect::<Vec<_>>(),
        selection.iter().collect::<Vec<_>>()
    );
    for (_, outcome) in result.iter() {
        assert!(outcome.is_success());
        assert!(outcome.elapsed_secs().unwrap() >= 0.0);
        // timing-only runs drop the distances
        assert!(outcome.result().is_none());
    }
}

#[test]
fn test_retained_results_agree() {
    let graph = generate_seeded(25, 0.2, false, Some(2)).unwrap();
    let reference = dijkstra::all_pairs(&graph).unwrap();

    let result = retaining_harness().run(&graph, &AlgorithmSelection::all());

    for algorithm in Algorithm::ALL {
        match result.get(algorithm).and_then(AlgorithmOutcome::result) {
            Some(DistanceResult::Matrix(matrix)) => {
                assert!(matrix.approx_eq(&reference, 1e-9), "{} disagrees", algorithm)
            }
            other => panic!("{}: unexpected result {:?}", algorithm, other),
        }
    }
}

#[test]
fn test_negative_cycle_does_not_abort_the_run() {
    let graph = create_negative_triangle();
    let result = BenchmarkHarness::default().run(&graph, &AlgorithmSelection::all());

    assert_eq!(result.len(), 4);
    assert!(result.get(Algorithm::BellmanFord).unwrap().is_negative_cycle());
    assert!(result.get(Algorithm::FloydWarshall).unwrap().is_negative_cycle());
    assert!(result.get(Algorithm::Johnson).unwrap().is_negative_cycle());

    // Dijkstra is refused before it runs
    let dijkstra = result.get(Algorithm::Dijkstra).unwrap();
    assert_eq!(
        dijkstra.failure_kind(),
        Some(FailureKind::PreconditionViolated)
    );
    assert!(dijkstra.elapsed().is_none());
}

#[test]
fn test_unchecked_dijkstra_runs_on_negative_edges() {
    let graph = create_negative_triangle();
    let harness = BenchmarkHarness::new(
        HarnessConfig::default()
            .with_dijkstra_precondition_check(false)
            .with_retained_results(true)
            .with_parallel_sources(true),
    );
    let result = harness.run(&graph, &AlgorithmSelection::all());

    let dijkstra = result.get(Algorithm::Dijkstra).unwrap();
    assert!(dijkstra.is_success(), "{}", dijkstra);
    assert_eq!(dijkstra.failure_kind(), None);
    assert!(dijkstra.elapsed().is_some());
    assert!(result.get(Algorithm::BellmanFord).unwrap().is_negative_cycle());
    assert!(result.get(Algorithm::FloydWarshall).unwrap().is_negative_cycle());
    assert!(result.get(Algorithm::Johnson).unwrap().is_negative_cycle());

    // Label-setting order settles 0, 1, 2; the 2 -> 0 edge still lowers node 0
    let outcome = harness.run_single_source(&graph, Algorithm::Dijkstra, 0);
    assert_eq!(
        outcome.result(),
        Some(&DistanceResult::Vector(vec![-3.0, 1.0, -4.0]))
    );
}

#[test]
fn test_negative_tolerant_selection_skips_dijkstra() {
    let graph = generate_seeded(30, 0.1, true, Some(3)).unwrap();
    let result = BenchmarkHarness::default().run(&graph, &AlgorithmSelection::negative_tolerant());

    assert!(result.get(Algorithm::Dijkstra).is_none());
    assert_eq!(result.len(), 3);
    for (algorithm, outcome) in result.iter() {
        assert!(
            outcome.is_success() || outcome.is_negative_cycle(),
            "{}: {}",
            algorithm,
            outcome
        );
    }
}

#[test]
fn test_parallel_sources_match_sequential() {
    let graph = generate_seeded(30, 0.25, false, Some(4)).unwrap();
    let selection = AlgorithmSelection::new([Algorithm::Dijkstra, Algorithm::BellmanFord]);

    let sequential = retaining_harness().run(&graph, &selection);
    let parallel = BenchmarkHarness::new(
        HarnessConfig::default()
            .with_retained_results(true)
            .with_parallel_sources(true),
    )
    .run(&graph, &selection);

    for algorithm in selection.iter() {
        assert_eq!(
            sequential.get(algorithm).unwrap().result(),
            parallel.get(algorithm).unwrap().result()
        );
    }

    let cyclic = BenchmarkHarness::new(HarnessConfig::default().with_parallel_sources(true))
        .run(&create_negative_triangle(), &AlgorithmSelection::new([Algorithm::BellmanFord]));
    assert!(cyclic.get(Algorithm::BellmanFord).unwrap().is_negative_cycle());
}

#[test]
fn test_single_source_runs() {
    let graph = DirectedGraph::from_edges(3, vec![(0, 1, 2.0), (1, 2, 3.0)]).unwrap();
    let harness = retaining_harness();

    let outcome = harness.run_single_source(&graph, Algorithm::Dijkstra, 0);
    assert_eq!(
        outcome.result(),
        Some(&DistanceResult::Vector(vec![0.0, 2.0, 5.0]))
    );

    let outcome = harness.run_single_source(&graph, Algorithm::BellmanFord, 3);
    assert_eq!(outcome.failure_kind(), Some(FailureKind::InvalidParameter));

    let outcome = harness.run_single_source(&graph, Algorithm::FloydWarshall, 0);
    assert_eq!(outcome.failure_kind(), Some(FailureKind::InvalidParameter));
}

#[test]
fn test_selection_parsing() {
    let selection: AlgorithmSelection = "dijkstra, Bellman-Ford, DIJKSTRA,floyd_warshall"
        .parse()
        .unwrap();
    assert_eq!(
        selection.iter().collect::<Vec<_>>(),
        vec![
            Algorithm::Dijkstra,
            Algorithm::BellmanFord,
            Algorithm::FloydWarshall
        ]
    );

    assert_eq!("all".parse::<AlgorithmSelection>().unwrap(), AlgorithmSelection::all());
    assert!("dijkstra,astar".parse::<AlgorithmSelection>().is_err());
    assert!(!AlgorithmSelection::all().without(Algorithm::Johnson).contains(Algorithm::Johnson));
}

#[test]
fn test_result_serializes_to_json() {
    let result = BenchmarkHarness::default().run(
        &create_negative_triangle(),
        &AlgorithmSelection::new([Algorithm::FloydWarshall, Algorithm::Dijkstra]),
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["Floyd-Warshall"]["status"], "negative_cycle_detected");
    assert_eq!(json["Dijkstra"]["status"], "failure");
    assert_eq!(json["Dijkstra"]["kind"], "precondition_violated");

    let graph = generate_seeded(5, 0.5, false, Some(5)).unwrap();
    let result = BenchmarkHarness::default().run(&graph, &AlgorithmSelection::new([Algorithm::Johnson]));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["Johnson"]["status"], "success");
    assert!(json["Johnson"]["elapsed_secs"].is_f64());
    assert!(json["Johnson"].get("result").is_none());
}

#[test]
fn test_run_experiment() {
    let experiment = ExperimentConfig::new(
        "small negative",
        GeneratorConfig::new(15, 0.2)
            .with_negative_weights(true)
            .with_seed(11),
    )
    .with_algorithms(AlgorithmSelection::negative_tolerant());

    let report = BenchmarkHarness::default().run_experiment(&experiment).unwrap();
    assert_eq!(report.name, "small negative");
    assert_eq!(report.node_count, 15);
    assert_eq!(report.result.len(), 3);

    let invalid = ExperimentConfig::new("broken", GeneratorConfig::new(10, 1.5));
    assert!(BenchmarkHarness::default().run_experiment(&invalid).is_err());
}

#[test]
fn test_experiments_load_from_json() {
    let json = r#"[
        {"name": "dense", "node_count": 150, "density": 0.8},
        {"name": "sparse negative", "node_count": 500, "density": 0.1,
         "allow_negative": true, "seed": 7,
         "algorithms": ["floyd_warshall", "johnson", "bellman_ford"]}
    ]"#;

    let experiments = ExperimentConfig::list_from_json(json).unwrap();
    assert_eq!(experiments.len(), 2);
    assert_eq!(experiments[0].algorithms, AlgorithmSelection::all());
    assert!(!experiments[0].graph.allow_negative);
    assert_eq!(experiments[1].graph.seed, Some(7));
    assert!(!experiments[1].algorithms.contains(Algorithm::Dijkstra));

    assert!(ExperimentConfig::list_from_json("{not json").is_err());
}
