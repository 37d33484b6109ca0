use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bail_invalid;
use crate::config::MazeSettings;
use crate::error::{MazepathError, Result};
use crate::graph::Weight;
use crate::maze::{Direction, Juncture, Maze};

/// Connection between two adjacent junctures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Passage {
    open: bool,
    weight: Weight,
}

/// Which passage table a normalized passage lives in
#[derive(Debug, Clone, Copy)]
enum Axis {
    /// `(x, y)` to `(x + 1, y)`
    Horizontal,
    /// `(x, y)` to `(x, y + 1)`
    Vertical,
}

/// Rectangular maze storing one passage per adjacent pair
///
/// Walls and weights are symmetric: the passage from A to B is the
/// passage from B to A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    width: u32,
    height: u32,
    horizontal: Vec<Passage>,
    vertical: Vec<Passage>,
}

impl GridMaze {
    fn with_passages(width: u32, height: u32, mut passage: impl FnMut() -> Passage) -> Self {
        let horizontal_len = (width as usize - 1) * height as usize;
        let vertical_len = width as usize * (height as usize - 1);
        Self {
            width,
            height,
            horizontal: (0..horizontal_len).map(|_| passage()).collect(),
            vertical: (0..vertical_len).map(|_| passage()).collect(),
        }
    }

    /// Maze with no internal walls and the same weight everywhere
    pub fn open(width: u32, height: u32, weight: Weight) -> Result<Self> {
        let settings = MazeSettings {
            width,
            height,
            min_weight: weight,
            max_weight: weight,
            seed: None,
        };
        settings.validate()?;
        Ok(Self::with_passages(width, height, || Passage { open: true, weight }))
    }

    /// Perfect maze (exactly one route between any two junctures) carved by
    /// a randomized depth-first backtracker
    ///
    /// Every passage weight is drawn uniformly from
    /// `min_weight..=max_weight`. The same seed always yields the same maze.
    #[tracing::instrument(fields(
        width = settings.width,
        height = settings.height,
        seed = ?settings.seed
    ))]
    pub fn generate(settings: &MazeSettings) -> Result<Self> {
        settings.validate()?;

        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (min, max) = (settings.min_weight, settings.max_weight);
        let mut maze = Self::with_passages(settings.width, settings.height, || Passage {
            open: false,
            weight: rng.random_range(min..=max),
        });
        maze.carve(&mut rng);

        tracing::debug!(open_passages = maze.open_passages(), "maze_generated");
        Ok(maze)
    }

    fn carve(&mut self, rng: &mut StdRng) {
        let mut visited = vec![false; self.width as usize * self.height as usize];
        let origin = Juncture::new(0, 0);
        visited[self.cell_index(origin)] = true;
        let mut stack = vec![origin];

        while let Some(&cell) = stack.last() {
            let candidates: Vec<(Direction, Juncture)> = Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    direction
                        .step(cell, self.width, self.height)
                        .map(|next| (direction, next))
                })
                .filter(|(_, next)| !visited[self.cell_index(*next)])
                .collect();

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (direction, next) = candidates[rng.random_range(0..candidates.len())];
            if let Some(passage) = self.passage_mut(cell, direction) {
                passage.open = true;
            }
            visited[self.cell_index(next)] = true;
            stack.push(next);
        }
    }

    fn cell_index(&self, cell: Juncture) -> usize {
        cell.y() as usize * self.width as usize + cell.x() as usize
    }

    /// Map `cell` + `direction` to the table and index of the shared passage
    fn locate(&self, cell: Juncture, direction: Direction) -> Option<(Axis, usize)> {
        if !self.contains(cell) {
            return None;
        }
        let neighbor = direction.step(cell, self.width, self.height)?;
        let (axis, anchor) = match direction {
            Direction::Right => (Axis::Horizontal, cell),
            Direction::Left => (Axis::Horizontal, neighbor),
            Direction::Down => (Axis::Vertical, cell),
            Direction::Up => (Axis::Vertical, neighbor),
        };
        let index = match axis {
            Axis::Horizontal => {
                anchor.y() as usize * (self.width as usize - 1) + anchor.x() as usize
            }
            Axis::Vertical => anchor.y() as usize * self.width as usize + anchor.x() as usize,
        };
        Some((axis, index))
    }

    fn passage(&self, cell: Juncture, direction: Direction) -> Option<&Passage> {
        match self.locate(cell, direction)? {
            (Axis::Horizontal, index) => self.horizontal.get(index),
            (Axis::Vertical, index) => self.vertical.get(index),
        }
    }

    fn passage_mut(&mut self, cell: Juncture, direction: Direction) -> Option<&mut Passage> {
        match self.locate(cell, direction)? {
            (Axis::Horizontal, index) => self.horizontal.get_mut(index),
            (Axis::Vertical, index) => self.vertical.get_mut(index),
        }
    }

    fn require_passage(&mut self, cell: Juncture, direction: Direction) -> Result<&mut Passage> {
        self.passage_mut(cell, direction).ok_or_else(|| {
            MazepathError::invalid_value("passage", format!("{} {}", cell, direction))
        })
    }

    /// Raise or remove the wall between `cell` and its neighbor
    pub fn set_wall(&mut self, cell: Juncture, direction: Direction, wall: bool) -> Result<()> {
        self.require_passage(cell, direction)?.open = !wall;
        Ok(())
    }

    /// Change the weight of the passage between `cell` and its neighbor
    pub fn set_weight(
        &mut self,
        cell: Juncture,
        direction: Direction,
        weight: Weight,
    ) -> Result<()> {
        if weight == 0 {
            bail_invalid!("passage weight", weight);
        }
        self.require_passage(cell, direction)?.weight = weight;
        Ok(())
    }

    /// Number of passages without a wall
    pub fn open_passages(&self) -> usize {
        self.horizontal
            .iter()
            .chain(&self.vertical)
            .filter(|passage| passage.open)
            .count()
    }
}

impl Maze for GridMaze {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_wall(&self, cell: Juncture, direction: Direction) -> bool {
        self.passage(cell, direction)
            .is_none_or(|passage| !passage.open)
    }

    /// Weight of the passage, or 0 across the outer border
    fn weight(&self, cell: Juncture, direction: Direction) -> Weight {
        self.passage(cell, direction)
            .map_or(0, |passage| passage.weight)
    }
}
