//! ASCII rendering of a maze with search results drawn on top

use std::collections::HashSet;

use crate::maze::{Direction, Juncture, Maze};

/// Cells to highlight when rendering
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    start: Option<Juncture>,
    end: Option<Juncture>,
    path: HashSet<Juncture>,
    visited: HashSet<Juncture>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(mut self, start: Juncture, end: Juncture) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn with_path<'a>(mut self, path: impl IntoIterator<Item = &'a Juncture>) -> Self {
        self.path.extend(path);
        self
    }

    pub fn with_visited<'a>(mut self, visited: impl IntoIterator<Item = &'a Juncture>) -> Self {
        self.visited.extend(visited);
        self
    }

    /// Marker for a cell; endpoints beat path, path beats visited
    fn marker(&self, cell: Juncture) -> char {
        if self.start == Some(cell) {
            'S'
        } else if self.end == Some(cell) {
            'E'
        } else if self.path.contains(&cell) {
            '*'
        } else if self.visited.contains(&cell) {
            '.'
        } else {
            ' '
        }
    }
}

/// Draw `maze` as a `+---+` grid, one text row per wall line and cell line
pub fn render(maze: &dyn Maze, overlay: &Overlay) -> String {
    let (width, height) = (maze.width(), maze.height());
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            let cell = Juncture::new(x, y);
            out.push('+');
            out.push_str(if maze.is_wall(cell, Direction::Up) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        for x in 0..width {
            let cell = Juncture::new(x, y);
            out.push(if maze.is_wall(cell, Direction::Left) {
                '|'
            } else {
                ' '
            });
            out.push(' ');
            out.push(overlay.marker(cell));
            out.push(' ');
        }
        out.push_str("|\n");
    }

    for _ in 0..width {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}
