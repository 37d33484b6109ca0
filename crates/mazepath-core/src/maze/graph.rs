use std::time::Instant;

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::maze::{Direction, Juncture, Maze};

/// Weighted graph whose vertices are maze junctures
pub type MazeGraph = WeightedGraph<Juncture>;

/// Build a graph with one vertex per juncture and one directed edge for
/// every open passage direction
///
/// Vertices are added row by row. Each juncture gets an edge up, down, left
/// and right (in that order) when the neighbor lies inside the maze and no
/// wall blocks the way, weighted by what the maze reports for that direction.
#[tracing::instrument(skip(maze), fields(width = maze.width(), height = maze.height()))]
pub fn build_maze_graph(maze: &dyn Maze) -> Result<MazeGraph> {
    let start = Instant::now();
    let (width, height) = (maze.width(), maze.height());
    let mut graph = MazeGraph::new();

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(Juncture::new(x, y))?;
        }
    }

    crate::trace_time!(start, "maze_vertices_added", vertices = graph.vertex_count());

    let cells: Vec<Juncture> = graph.vertices().copied().collect();
    for cell in cells {
        for direction in Direction::ALL {
            let Some(neighbor) = direction.step(cell, width, height) else {
                continue;
            };
            if maze.is_wall(cell, direction) {
                continue;
            }
            graph.add_edge(&cell, &neighbor, maze.weight(cell, direction))?;
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed = ?start.elapsed(),
        "maze_graph_built"
    );
    Ok(graph)
}
