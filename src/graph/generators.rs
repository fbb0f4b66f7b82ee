use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, GraphBuilder, WeightMode};
use crate::{Error, Result};

/// Smallest weight drawn when negative weights are allowed
pub const MIN_NEGATIVE_WEIGHT: i32 = -10;
/// Largest weight drawn in either mode
pub const MAX_WEIGHT: i32 = 49;

/// Parameters for random graph generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub node_count: usize,
    /// Probability that a given ordered pair carries an edge
    pub density: f64,
    #[serde(default)]
    pub allow_negative: bool,
    /// Seed for a reproducible graph; `None` draws from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(node_count: usize, density: f64) -> Self {
        GeneratorConfig {
            node_count,
            density,
            allow_negative: false,
            seed: None,
        }
    }

    pub fn with_negative_weights(mut self, allow_negative: bool) -> Self {
        self.allow_negative = allow_negative;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates the graph described by this configuration
    pub fn generate(&self) -> Result<DirectedGraph> {
        generate_seeded(self.node_count, self.density, self.allow_negative, self.seed)
    }
}

/// Generates a random directed graph with independent per-pair Bernoulli(`density`) edges.
///
/// A present edge gets an integer weight drawn uniformly from `1..=49`, or from the
/// non-zero integers of `-10..=49` when `allow_negative` is set. Zero is never drawn, so
/// a zero-weight edge cannot be confused with a missing one.
pub fn generate<R>(
    node_count: usize,
    density: f64,
    allow_negative: bool,
    rng: &mut R,
) -> Result<DirectedGraph>
where
    R: Rng,
{
    validate(node_count, density)?;

    let mode = if allow_negative {
        WeightMode::MayContainNegative
    } else {
        WeightMode::NonNegative
    };
    let mut builder = GraphBuilder::new(node_count)?.with_weight_mode(mode);

    for from in 0..node_count {
        for to in 0..node_count {
            if from == to || !rng.gen_bool(density) {
                continue;
            }
            let weight = draw_weight(allow_negative, rng);
            builder.add_edge(from, to, f64::from(weight))?;
        }
    }

    debug!(
        "generated graph: {} nodes, {} edges, density {}, negative weights: {}",
        node_count,
        builder.edge_count(),
        density,
        allow_negative
    );

    Ok(builder.build())
}

/// Like [`generate`], seeding a [`StdRng`] from `seed` or from entropy.
pub fn generate_seeded(
    node_count: usize,
    density: f64,
    allow_negative: bool,
    seed: Option<u64>,
) -> Result<DirectedGraph> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(node_count, density, allow_negative, &mut rng)
}

/// Entry point for callers holding a signed node count (e.g. parsed user input).
pub fn generate_from_signed<R>(
    node_count: i64,
    density: f64,
    allow_negative: bool,
    rng: &mut R,
) -> Result<DirectedGraph>
where
    R: Rng,
{
    let node_count = usize::try_from(node_count).map_err(|_| {
        Error::InvalidParameter(format!("node count must be positive, got {}", node_count))
    })?;
    generate(node_count, density, allow_negative, rng)
}

fn validate(node_count: usize, density: f64) -> Result<()> {
    if node_count == 0 {
        return Err(Error::InvalidParameter(
            "node count must be positive, got 0".to_string(),
        ));
    }
    // Also rejects NaN
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidParameter(format!(
            "density must lie in [0, 1], got {}",
            density
        )));
    }
    Ok(())
}

fn draw_weight<R>(allow_negative: bool, rng: &mut R) -> i32
where
    R: Rng,
{
    if allow_negative {
        // Uniform over -10..=-1 and 1..=49
        let weight = rng.gen_range(MIN_NEGATIVE_WEIGHT..MAX_WEIGHT);
        if weight >= 0 {
            weight + 1
        } else {
            weight
        }
    } else {
        rng.gen_range(1..=MAX_WEIGHT)
    }
}
