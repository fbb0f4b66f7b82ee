pub mod directed;
pub mod generators;

pub use directed::{DirectedGraph, GraphBuilder, WeightMode};
pub use generators::{generate, generate_from_signed, generate_seeded, GeneratorConfig};
