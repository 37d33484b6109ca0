//! Progress notifications for graph algorithms
//!
//! Algorithms push milestones to every registered observer, synchronously and
//! in registration order. Observers never call back into the graph.

use crate::graph::types::Cost;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

/// Listener for algorithm progress. Every method defaults to a no-op.
pub trait GraphAlgorithmObserver<V> {
    fn notify_bfs_has_begun(&mut self) {}
    fn notify_dfs_has_begun(&mut self) {}
    fn notify_dijkstra_has_begun(&mut self) {}
    fn notify_visit(&mut self, _vertex: &V) {}
    fn notify_search_is_over(&mut self) {}
    fn notify_dijkstra_vertex_finished(&mut self, _vertex: &V, _cost: Cost) {}
    fn notify_dijkstra_is_over(&mut self, _path: &[V]) {}
}

/// Ordered collection of observers owned by a graph
pub(crate) struct ObserverList<V> {
    observers: Vec<Box<dyn GraphAlgorithmObserver<V>>>,
}

impl<V> ObserverList<V> {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, observer: Box<dyn GraphAlgorithmObserver<V>>) {
        self.observers.push(observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    /// Deliver one notification to every observer in registration order
    pub(crate) fn each(&mut self, mut notify: impl FnMut(&mut dyn GraphAlgorithmObserver<V>)) {
        for observer in &mut self.observers {
            notify(observer.as_mut());
        }
    }
}

impl<V> Default for ObserverList<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// One recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent<V> {
    BfsHasBegun,
    DfsHasBegun,
    DijkstraHasBegun,
    Visit(V),
    SearchIsOver,
    DijkstraVertexFinished(V, Cost),
    DijkstraIsOver(Vec<V>),
}

/// Shared handle to the events captured by a [`RecordingObserver`]
///
/// Cloning the handle shares the underlying log, so the caller can keep one
/// while the graph owns the observer.
pub struct EventLog<V> {
    events: Rc<RefCell<Vec<GraphEvent<V>>>>,
}

impl<V> Clone for EventLog<V> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<V> Default for EventLog<V> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<V: Clone> EventLog<V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: GraphEvent<V>) {
        self.events.borrow_mut().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Snapshot of every event so far
    pub fn events(&self) -> Vec<GraphEvent<V>> {
        self.events.borrow().clone()
    }

    /// Vertices passed to `notify_visit`, in order
    pub fn visits(&self) -> Vec<V> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                GraphEvent::Visit(vertex) => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Vertex/cost pairs passed to `notify_dijkstra_vertex_finished`, in order
    pub fn finished(&self) -> Vec<(V, Cost)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                GraphEvent::DijkstraVertexFinished(vertex, cost) => Some((vertex.clone(), *cost)),
                _ => None,
            })
            .collect()
    }

    /// Path from the most recent `notify_dijkstra_is_over`
    pub fn path(&self) -> Option<Vec<V>> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            GraphEvent::DijkstraIsOver(path) => Some(path.clone()),
            _ => None,
        })
    }

}

/// Observer that records every notification into an [`EventLog`]
pub struct RecordingObserver<V> {
    log: EventLog<V>,
}

impl<V: Clone> RecordingObserver<V> {
    pub fn new() -> Self {
        Self {
            log: EventLog::new(),
        }
    }

    /// Record into an existing log
    pub fn with_log(log: EventLog<V>) -> Self {
        Self { log }
    }

    /// Handle sharing this observer's log
    pub fn log(&self) -> EventLog<V> {
        self.log.clone()
    }
}

impl<V: Clone> Default for RecordingObserver<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> GraphAlgorithmObserver<V> for RecordingObserver<V> {
    fn notify_bfs_has_begun(&mut self) {
        self.log.push(GraphEvent::BfsHasBegun);
    }

    fn notify_dfs_has_begun(&mut self) {
        self.log.push(GraphEvent::DfsHasBegun);
    }

    fn notify_dijkstra_has_begun(&mut self) {
        self.log.push(GraphEvent::DijkstraHasBegun);
    }

    fn notify_visit(&mut self, vertex: &V) {
        self.log.push(GraphEvent::Visit(vertex.clone()));
    }

    fn notify_search_is_over(&mut self) {
        self.log.push(GraphEvent::SearchIsOver);
    }

    fn notify_dijkstra_vertex_finished(&mut self, vertex: &V, cost: Cost) {
        self.log
            .push(GraphEvent::DijkstraVertexFinished(vertex.clone(), cost));
    }

    fn notify_dijkstra_is_over(&mut self, path: &[V]) {
        self.log.push(GraphEvent::DijkstraIsOver(path.to_vec()));
    }
}

/// Observer that reports progress through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver {
    steps: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: Debug> GraphAlgorithmObserver<V> for TracingObserver {
    fn notify_bfs_has_begun(&mut self) {
        self.steps = 0;
        tracing::debug!(algorithm = "bfs", "search_begun");
    }

    fn notify_dfs_has_begun(&mut self) {
        self.steps = 0;
        tracing::debug!(algorithm = "dfs", "search_begun");
    }

    fn notify_dijkstra_has_begun(&mut self) {
        self.steps = 0;
        tracing::debug!(algorithm = "dijkstra", "search_begun");
    }

    fn notify_visit(&mut self, vertex: &V) {
        self.steps += 1;
        tracing::trace!(step = self.steps, ?vertex, "visit");
    }

    fn notify_search_is_over(&mut self) {
        tracing::debug!(visited = self.steps, "search_over");
    }

    fn notify_dijkstra_vertex_finished(&mut self, vertex: &V, cost: Cost) {
        self.steps += 1;
        tracing::trace!(step = self.steps, ?vertex, %cost, "vertex_finished");
    }

    fn notify_dijkstra_is_over(&mut self, path: &[V]) {
        tracing::debug!(finished = self.steps, path_len = path.len(), "dijkstra_over");
    }
}
