//! Shared test graphs

use crate::graph::WeightedGraph;

fn build(
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str, u32)],
) -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();
    for vertex in vertices {
        graph.add_vertex(*vertex).unwrap();
    }
    for (from, to, weight) in edges {
        graph.add_edge(from, to, *weight).unwrap();
    }
    graph
}

/// A..D with edges A->B(1), A->C(2), A->D(3), B->C(4), D->C(5)
pub fn four_vertex_graph() -> WeightedGraph<&'static str> {
    build(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("A", "C", 2), ("A", "D", 3), ("B", "C", 4), ("D", "C", 5)],
    )
}

/// A..H where H is only reachable through F
pub fn eight_vertex_graph() -> WeightedGraph<&'static str> {
    build(
        &["A", "B", "C", "D", "E", "F", "G", "H"],
        &[
            ("A", "B", 1),
            ("A", "C", 2),
            ("A", "D", 3),
            ("B", "E", 4),
            ("B", "A", 5),
            ("C", "A", 1),
            ("C", "D", 2),
            ("C", "F", 3),
            ("D", "A", 4),
            ("D", "C", 5),
            ("E", "B", 1),
            ("E", "F", 2),
            ("F", "C", 3),
            ("F", "E", 4),
            ("F", "G", 5),
            ("F", "H", 3),
            ("G", "F", 4),
            ("H", "F", 5),
        ],
    )
}

/// A..K weighted graph; shortest H -> J is H, A, G, E, J with cost 13
pub fn eleven_vertex_graph() -> WeightedGraph<&'static str> {
    build(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"],
        &[
            ("A", "G", 1),
            ("A", "H", 2),
            ("B", "G", 10),
            ("B", "H", 14),
            ("B", "I", 6),
            ("B", "F", 2),
            ("B", "D", 1),
            ("C", "F", 4),
            ("C", "E", 10),
            ("D", "B", 1),
            ("D", "K", 2),
            ("E", "F", 1),
            ("E", "G", 3),
            ("E", "K", 8),
            ("E", "J", 7),
            ("E", "C", 10),
            ("F", "B", 2),
            ("F", "E", 1),
            ("F", "J", 6),
            ("F", "C", 4),
            ("G", "A", 1),
            ("G", "B", 10),
            ("G", "E", 3),
            ("H", "A", 2),
            ("H", "B", 14),
            ("H", "I", 4),
            ("I", "H", 4),
            ("I", "B", 6),
            ("I", "K", 9),
            ("J", "E", 7),
            ("J", "F", 6),
            ("K", "I", 9),
            ("K", "E", 8),
            ("K", "D", 2),
        ],
    )
}
