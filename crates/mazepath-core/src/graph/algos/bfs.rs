use crate::error::Result;
use crate::graph::algos::shared::{explore, Queue};
use crate::graph::types::{SearchOutcome, Vertex};
use crate::graph::WeightedGraph;
use std::collections::VecDeque;

impl<V: Vertex> WeightedGraph<V> {
    /// Breadth-first search from `start`, stopping once `end` is dequeued
    ///
    /// Observers get `notify_bfs_has_begun`, one `notify_visit` per newly
    /// visited vertex, then `notify_search_is_over`. A neighbor is enqueued
    /// unless it is already waiting in the queue. If `end` is unreachable (or
    /// not a vertex at all) every vertex reachable from `start` is visited.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn bfs(&mut self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        self.require_vertex(start)?;

        self.observers
            .each(|observer| observer.notify_bfs_has_begun());

        let frontier = Queue(VecDeque::from([start.clone()]));
        let outcome = explore(&self.adjacency, &mut self.observers, frontier, end);

        tracing::debug!(
            visited = outcome.visited.len(),
            reached_end = outcome.reached_end,
            "bfs_complete"
        );
        Ok(outcome)
    }
}
