//! Maze and endpoint arguments shared by the subcommands

use clap::Args;

use mazepath_core::bail_usage;
use mazepath_core::config::{Config, MazeSettings};
use mazepath_core::error::Result;
use mazepath_core::maze::{GridMaze, Juncture};

use super::parse::parse_juncture;

/// Maze shape; unset flags fall back to the `[maze]` config section
#[derive(Args, Debug, Clone, Default)]
pub struct MazeArgs {
    /// Number of columns
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of rows
    #[arg(long)]
    pub height: Option<u32>,

    /// Lowest passage weight
    #[arg(long)]
    pub min_weight: Option<u32>,

    /// Highest passage weight
    #[arg(long)]
    pub max_weight: Option<u32>,

    /// Seed for a reproducible maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// No internal walls; every passage weighs --min-weight
    #[arg(long)]
    pub open: bool,
}

impl MazeArgs {
    /// Config values overridden by whichever flags were given
    pub fn settings(&self, config: &Config) -> MazeSettings {
        let base = &config.maze;
        MazeSettings {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            min_weight: self.min_weight.unwrap_or(base.min_weight),
            max_weight: self.max_weight.unwrap_or(base.max_weight),
            seed: self.seed.or(base.seed),
        }
    }

    /// Open or generate the maze these arguments describe
    pub fn build(&self, config: &Config) -> Result<GridMaze> {
        let settings = self.settings(config);
        if self.open && self.seed.is_some() {
            bail_usage!("--seed has no effect on an --open maze");
        }
        if self.open {
            settings.validate()?;
            GridMaze::open(settings.width, settings.height, settings.min_weight)
        } else {
            GridMaze::generate(&settings)
        }
    }
}

/// Maze plus the two cells to search between
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[command(flatten)]
    pub maze: MazeArgs,

    /// Start cell as x,y [default: 0,0]
    #[arg(long, value_parser = parse_juncture)]
    pub from: Option<Juncture>,

    /// Target cell as x,y [default: bottom-right corner]
    #[arg(long, value_parser = parse_juncture)]
    pub to: Option<Juncture>,
}

impl SearchArgs {
    /// Start and target cells, defaulting to opposite corners of `settings`
    pub fn endpoints(&self, settings: &MazeSettings) -> (Juncture, Juncture) {
        let from = self.from.unwrap_or(Juncture::new(0, 0));
        let to = self.to.unwrap_or(Juncture::new(
            settings.width.saturating_sub(1),
            settings.height.saturating_sub(1),
        ));
        (from, to)
    }
}
