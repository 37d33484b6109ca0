//! Weighted graph engine
//!
//! Provides a generic directed graph with positive integer weights and three
//! observable algorithms:
//! - BFS and DFS from a start vertex until an end vertex is reached
//! - Dijkstra shortest path over the whole graph
//! - Observer trait for progress notifications

pub mod algos;
pub mod observer;
pub mod types;
pub mod weighted;

#[cfg(test)]
pub(crate) mod fixtures;

pub use observer::{
    EventLog, GraphAlgorithmObserver, GraphEvent, RecordingObserver, TracingObserver,
};
pub use types::{Cost, SearchOutcome, ShortestPaths, Vertex, Weight};
pub use weighted::WeightedGraph;
