//! Graph algorithm implementations
//!
//! Each algorithm is an inherent method on [`WeightedGraph`](crate::graph::WeightedGraph):
//! - `bfs`: Breadth-first search with queue discipline
//! - `dfs`: Depth-first search with stack discipline
//! - `dijkstra`: Weighted single-source shortest path
//! - `shared`: Exploration loop common to BFS and DFS

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub(crate) mod shared;
