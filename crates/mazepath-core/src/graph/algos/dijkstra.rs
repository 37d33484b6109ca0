use crate::error::{MazepathError, Result};
use crate::graph::types::{Cost, ShortestPaths, Vertex};
use crate::graph::WeightedGraph;
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Working-table row: best known cost and the vertex it was reached from
#[derive(Debug, Clone)]
struct TableEntry<V> {
    cost: Cost,
    predecessor: Option<V>,
    finished: bool,
}

impl<V> TableEntry<V> {
    fn unreached() -> Self {
        Self {
            cost: Cost::Infinite,
            predecessor: None,
            finished: false,
        }
    }
}

/// Min-heap key; the table index breaks cost ties in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    cost: Cost,
    index: usize,
}

/// Per-run Dijkstra state, keyed in graph insertion order
///
/// Heap entries are never removed on relaxation; stale ones (finished, or
/// costlier than the table) are skipped when popped.
struct DijkstraTable<V: Vertex> {
    entries: IndexMap<V, TableEntry<V>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    /// Every index below this is finished
    unreached_cursor: usize,
}

impl<V: Vertex> DijkstraTable<V> {
    fn new<'a>(vertices: impl Iterator<Item = &'a V>, start: &V) -> Self
    where
        V: 'a,
    {
        let mut entries: IndexMap<V, TableEntry<V>> = vertices
            .map(|v| (v.clone(), TableEntry::unreached()))
            .collect();
        entries.insert(
            start.clone(),
            TableEntry {
                cost: Cost::ZERO,
                predecessor: Some(start.clone()),
                finished: false,
            },
        );
        Self {
            entries,
            heap: BinaryHeap::new(),
            unreached_cursor: 0,
        }
    }

    fn cost(&self, vertex: &V) -> Cost {
        self.entries
            .get(vertex)
            .map_or(Cost::Infinite, |entry| entry.cost)
    }

    /// Lower `vertex`'s cost if going through `via` is strictly cheaper
    fn relax(&mut self, vertex: &V, via: &V, candidate: Cost) {
        if let Some((index, _, entry)) = self.entries.get_full_mut(vertex) {
            if !entry.finished && candidate < entry.cost {
                entry.cost = candidate;
                entry.predecessor = Some(via.clone());
                self.heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    index,
                }));
            }
        }
    }

    fn finish(&mut self, vertex: &V) {
        if let Some(entry) = self.entries.get_mut(vertex) {
            entry.finished = true;
        }
    }

    /// Cheapest unfinished vertex, earliest inserted on ties
    ///
    /// Once only unreachable vertices remain, they come out in insertion order
    /// with an infinite cost.
    fn next_unfinished(&mut self) -> Option<V> {
        while let Some(Reverse(HeapEntry { cost, index })) = self.heap.pop() {
            if let Some((vertex, entry)) = self.entries.get_index(index) {
                if !entry.finished && entry.cost == cost {
                    return Some(vertex.clone());
                }
            }
        }

        while let Some((vertex, entry)) = self.entries.get_index(self.unreached_cursor) {
            if !entry.finished {
                return Some(vertex.clone());
            }
            self.unreached_cursor += 1;
        }
        None
    }

    /// Walk predecessors back from `end`, returning the path start-first
    fn path(&self, start: &V, end: &V) -> Result<Vec<V>> {
        if !self.cost(end).is_finite() {
            return Err(MazepathError::unreachable(start, end));
        }

        let mut path = vec![end.clone()];
        let mut cursor = end;
        while cursor != start {
            let predecessor = self
                .entries
                .get(cursor)
                .and_then(|entry| entry.predecessor.as_ref())
                .ok_or_else(|| MazepathError::unreachable(start, end))?;
            path.push(predecessor.clone());
            cursor = predecessor;
        }
        path.reverse();
        Ok(path)
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Dijkstra's single-source shortest path from `start`
    ///
    /// Runs until every vertex is finished (it does not stop at `end`), then
    /// reports the cheapest `start -> end` path. Observers get
    /// `notify_dijkstra_has_begun`, one `notify_dijkstra_vertex_finished` per
    /// vertex carrying that vertex's final cost, then `notify_dijkstra_is_over`
    /// with the path.
    ///
    /// Fails with `VertexNotFound` before any notification if either endpoint
    /// is missing, and with `Unreachable` (no `notify_dijkstra_is_over`) when
    /// no path to `end` exists.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dijkstra(&mut self, start: &V, end: &V) -> Result<ShortestPaths<V>> {
        self.require_vertex(start)?;
        self.require_vertex(end)?;

        self.observers
            .each(|observer| observer.notify_dijkstra_has_begun());

        let mut table = DijkstraTable::new(self.adjacency.keys(), start);
        let mut finish_order = Vec::with_capacity(self.adjacency.len());
        let mut current = Some(start.clone());

        while let Some(vertex) = current {
            let base = table.cost(&vertex);
            if base.is_finite() {
                if let Some(neighbors) = self.adjacency.get(&vertex) {
                    for (neighbor, weight) in neighbors {
                        table.relax(neighbor, &vertex, base.extend(*weight));
                    }
                }
            }

            table.finish(&vertex);
            self.observers
                .each(|observer| observer.notify_dijkstra_vertex_finished(&vertex, base));
            tracing::trace!(?vertex, cost = %base, "vertex_finished");
            finish_order.push(vertex);

            current = table.next_unfinished();
        }

        let path = table.path(start, end)?;
        let cost = table.cost(end).value().unwrap_or_default();

        self.observers
            .each(|observer| observer.notify_dijkstra_is_over(&path));
        tracing::debug!(cost, path_len = path.len(), "dijkstra_complete");

        let costs = table
            .entries
            .into_iter()
            .map(|(vertex, entry)| (vertex, entry.cost))
            .collect();

        Ok(ShortestPaths {
            path,
            cost,
            costs,
            finished: finish_order,
        })
    }
}
