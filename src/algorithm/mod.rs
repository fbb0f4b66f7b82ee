pub mod bellman_ford;
pub mod dijkstra;
pub mod distances;
pub mod floyd_warshall;
pub mod johnson;

pub use distances::{distances_match, DistanceMatrix, DistanceVector, DistanceResult, ShortestPaths};
