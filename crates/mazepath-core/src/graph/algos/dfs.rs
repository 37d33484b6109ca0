use crate::error::Result;
use crate::graph::algos::shared::{explore, Stack};
use crate::graph::types::{SearchOutcome, Vertex};
use crate::graph::WeightedGraph;

impl<V: Vertex> WeightedGraph<V> {
    /// Depth-first search from `start`, stopping once `end` is popped
    ///
    /// Same notification contract as [`WeightedGraph::bfs`] with
    /// `notify_dfs_has_begun` first. A neighbor is pushed unless it has
    /// already been visited, so a vertex may sit on the stack more than once.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dfs(&mut self, start: &V, end: &V) -> Result<SearchOutcome<V>> {
        self.require_vertex(start)?;

        self.observers
            .each(|observer| observer.notify_dfs_has_begun());

        let frontier = Stack(vec![start.clone()]);
        let outcome = explore(&self.adjacency, &mut self.observers, frontier, end);

        tracing::debug!(
            visited = outcome.visited.len(),
            reached_end = outcome.reached_end,
            "dfs_complete"
        );
        Ok(outcome)
    }
}
