//! Maze model and its conversion into a weighted graph
//!
//! A maze is a rectangular grid of junctures addressed by `(x, y)` with
//! `(0, 0)` in the top-left corner. Adjacent junctures are joined by a
//! passage that is either walled off or open with a positive weight.

pub mod graph;
pub mod grid;
pub mod render;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MazepathError;
use crate::graph::Weight;

pub use graph::{build_maze_graph, MazeGraph};
pub use grid::GridMaze;
pub use render::{render, Overlay};

/// A maze cell, identified by column `x` and row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    x: u32,
    y: u32,
}

impl Juncture {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Juncture {
    type Err = MazepathError;

    /// Parse `x,y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| MazepathError::invalid_value("juncture (expected x,y)", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| MazepathError::invalid_value("juncture (expected x,y)", s))
        };
        Ok(Juncture::new(parse(x)?, parse(y)?))
    }
}

/// Movement between adjacent junctures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Neighbor of `cell` in this direction, if it lies inside a
    /// `width` x `height` grid
    pub fn step(self, cell: Juncture, width: u32, height: u32) -> Option<Juncture> {
        let (x, y) = (cell.x, cell.y);
        let (nx, ny) = match self {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y.checked_add(1)?),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x.checked_add(1)?, y),
        };
        (nx < width && ny < height).then_some(Juncture::new(nx, ny))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Read-only view of a maze
///
/// The outer border counts as a wall. `weight` is only meaningful for a
/// direction where `is_wall` is false.
pub trait Maze {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn is_wall(&self, cell: Juncture, direction: Direction) -> bool;
    fn weight(&self, cell: Juncture, direction: Direction) -> Weight;

    fn contains(&self, cell: Juncture) -> bool {
        cell.x < self.width() && cell.y < self.height()
    }

    fn is_wall_above(&self, cell: Juncture) -> bool {
        self.is_wall(cell, Direction::Up)
    }

    fn is_wall_below(&self, cell: Juncture) -> bool {
        self.is_wall(cell, Direction::Down)
    }

    fn is_wall_to_left(&self, cell: Juncture) -> bool {
        self.is_wall(cell, Direction::Left)
    }

    fn is_wall_to_right(&self, cell: Juncture) -> bool {
        self.is_wall(cell, Direction::Right)
    }

    fn weight_above(&self, cell: Juncture) -> Weight {
        self.weight(cell, Direction::Up)
    }

    fn weight_below(&self, cell: Juncture) -> Weight {
        self.weight(cell, Direction::Down)
    }

    fn weight_to_left(&self, cell: Juncture) -> Weight {
        self.weight(cell, Direction::Left)
    }

    fn weight_to_right(&self, cell: Juncture) -> Weight {
        self.weight(cell, Direction::Right)
    }
}
