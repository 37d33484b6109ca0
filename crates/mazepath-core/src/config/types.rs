//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 10;
pub const DEFAULT_HEIGHT: u32 = 8;
pub const DEFAULT_MIN_WEIGHT: u32 = 1;
pub const DEFAULT_MAX_WEIGHT: u32 = 9;

/// Largest maze accepted, in cells
pub const MAX_CELLS: u64 = 1_000_000;

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maze generation defaults
    #[serde(default)]
    pub maze: MazeSettings,

    /// Output defaults
    #[serde(default)]
    pub output: OutputSettings,
}

/// Dimensions, weight range and seed for a generated maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MazeSettings {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Lowest passage weight (inclusive, at least 1)
    #[serde(default = "default_min_weight")]
    pub min_weight: u32,

    /// Highest passage weight (inclusive)
    #[serde(default = "default_max_weight")]
    pub max_weight: u32,

    /// Seed for reproducible mazes; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Default output format when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_min_weight() -> u32 {
    DEFAULT_MIN_WEIGHT
}

fn default_max_weight() -> u32 {
    DEFAULT_MAX_WEIGHT
}
