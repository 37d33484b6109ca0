//! Mazepath Core Library
//!
//! Generic weighted graph engine with observable BFS, DFS and Dijkstra
//! searches, plus a maze model that converts into such a graph.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
