use crate::error::{MazepathError, Result};
use crate::graph::observer::{GraphAlgorithmObserver, ObserverList};
use crate::graph::types::{Vertex, Weight};
use indexmap::IndexMap;
use std::fmt;

/// Directed graph with positive integer edge weights
///
/// Vertices and each vertex's neighbors iterate in insertion order, which
/// makes BFS/DFS visit order and Dijkstra tie-breaks reproducible.
///
/// Traversals take `&mut self` to dispatch notifications, so the graph
/// cannot be mutated while an algorithm is running.
pub struct WeightedGraph<V: Vertex> {
    pub(crate) adjacency: IndexMap<V, IndexMap<V, Weight>>,
    pub(crate) observers: ObserverList<V>,
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            observers: ObserverList::new(),
        }
    }

    /// Register an observer; observers stay registered for the graph's lifetime
    pub fn add_observer(&mut self, observer: Box<dyn GraphAlgorithmObserver<V>>) {
        self.observers.push(observer);
    }

    /// Add a vertex with no outgoing edges
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(MazepathError::duplicate_vertex(&vertex));
        }
        self.adjacency.insert(vertex, IndexMap::new());
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Add or overwrite the directed edge `from -> to`
    ///
    /// Both endpoints must already be vertices and the weight must be
    /// strictly positive.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: Weight) -> Result<()> {
        if weight == 0 {
            return Err(MazepathError::invalid_edge(
                from,
                to,
                "weight must be positive, got 0",
            ));
        }
        if !self.contains_vertex(to) {
            return Err(MazepathError::invalid_edge(from, to, "target vertex not in graph"));
        }
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return Err(MazepathError::invalid_edge(from, to, "source vertex not in graph"));
        };
        neighbors.insert(to.clone(), weight);
        Ok(())
    }

    /// Weight of `from -> to`, or `None` when both vertices exist but no edge does
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        self.require_vertex(to)?;
        let neighbors = self
            .adjacency
            .get(from)
            .ok_or_else(|| MazepathError::vertex_not_found(from))?;
        Ok(neighbors.get(to).copied())
    }

    /// Outgoing edges of `vertex` in insertion order
    pub fn neighbors(&self, vertex: &V) -> Result<impl Iterator<Item = (&V, Weight)> + '_> {
        let neighbors = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| MazepathError::vertex_not_found(vertex))?;
        Ok(neighbors.iter().map(|(neighbor, weight)| (neighbor, *weight)))
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    pub(crate) fn require_vertex(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(MazepathError::vertex_not_found(vertex))
        }
    }
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> fmt::Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("adjacency", &self.adjacency)
            .field("observers", &self.observers.len())
            .finish()
    }
}
