use indexmap::IndexMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound for anything usable as a graph vertex
///
/// Two vertices that compare equal must hash identically; the adjacency maps
/// rely on it to collapse coordinate-equal junctures into one slot.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}

/// Weight of a single directed edge (always positive once stored)
pub type Weight = u32;

/// Best known cost to reach a vertex during Dijkstra
///
/// Variant order matters: every finite cost sorts below `Infinite`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cost {
    Finite(u64),
    #[default]
    Infinite,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    pub fn value(&self) -> Option<u64> {
        match self {
            Cost::Finite(cost) => Some(*cost),
            Cost::Infinite => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Cost of extending this one by an edge of `weight`
    pub fn extend(self, weight: Weight) -> Cost {
        match self {
            Cost::Finite(cost) => Cost::Finite(cost.saturating_add(u64::from(weight))),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(cost) => write!(f, "{}", cost),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// Result of a BFS or DFS run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<V> {
    /// Vertices in the order they were visited
    pub visited: Vec<V>,
    /// Whether the search stopped because it dequeued the end vertex
    pub reached_end: bool,
}

/// Result of a Dijkstra run
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Vertex> {
    /// Lowest-cost path, start first and end last
    pub path: Vec<V>,
    /// Total cost of `path`
    pub cost: u64,
    /// Final cost of every vertex, in graph insertion order
    pub costs: IndexMap<V, Cost>,
    /// Vertices in the order they were finished
    pub finished: Vec<V>,
}

impl<V: Vertex> ShortestPaths<V> {
    /// Final cost of a vertex (`Infinite` when unreachable or unknown)
    pub fn cost_to(&self, vertex: &V) -> Cost {
        self.costs.get(vertex).copied().unwrap_or(Cost::Infinite)
    }
}
