//! Exploration loop shared by BFS and DFS
//!
//! The two searches differ only in their frontier: which element comes out
//! next, and which neighbors are allowed back in.

use crate::graph::observer::ObserverList;
use crate::graph::types::{SearchOutcome, Vertex, Weight};
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};

/// Pending vertices of an uninformed search
pub(crate) trait Frontier<V> {
    fn take(&mut self) -> Option<V>;

    /// Offer a neighbor of a freshly visited vertex
    fn offer(&mut self, vertex: &V, visited: &HashSet<V>);
}

/// FIFO frontier; admits a neighbor unless it is already waiting in the queue
pub(crate) struct Queue<V>(pub(crate) VecDeque<V>);

impl<V: Vertex> Frontier<V> for Queue<V> {
    fn take(&mut self) -> Option<V> {
        self.0.pop_front()
    }

    fn offer(&mut self, vertex: &V, _visited: &HashSet<V>) {
        if !self.0.contains(vertex) {
            self.0.push_back(vertex.clone());
        }
    }
}

/// LIFO frontier; admits a neighbor unless it has already been visited
pub(crate) struct Stack<V>(pub(crate) Vec<V>);

impl<V: Vertex> Frontier<V> for Stack<V> {
    fn take(&mut self) -> Option<V> {
        self.0.pop()
    }

    fn offer(&mut self, vertex: &V, visited: &HashSet<V>) {
        if !visited.contains(vertex) {
            self.0.push(vertex.clone());
        }
    }
}

/// Drain `frontier` until it empties or yields `end`
///
/// A vertex is visited (and observers told) the first time it is taken.
/// Taking `end` stops the loop before `end`'s neighbors are offered, even if
/// `end` had already been visited.
pub(crate) fn explore<V: Vertex>(
    adjacency: &IndexMap<V, IndexMap<V, Weight>>,
    observers: &mut ObserverList<V>,
    mut frontier: impl Frontier<V>,
    end: &V,
) -> SearchOutcome<V> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();
    let mut reached_end = false;

    while let Some(current) = frontier.take() {
        let is_end = current == *end;

        if visited.insert(current.clone()) {
            observers.each(|observer| observer.notify_visit(&current));
            order.push(current.clone());

            if !is_end {
                if let Some(neighbors) = adjacency.get(&current) {
                    for neighbor in neighbors.keys() {
                        frontier.offer(neighbor, &visited);
                    }
                }
            }
        }

        if is_end {
            reached_end = true;
            break;
        }
    }

    observers.each(|observer| observer.notify_search_is_over());

    SearchOutcome {
        visited: order,
        reached_end,
    }
}
