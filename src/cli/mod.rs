//! CLI argument parsing for mazepath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{MazeArgs, SearchArgs};
pub use mazepath_core::format::OutputFormat;
use parse::parse_format;

/// Mazepath - observable graph search over weighted mazes
#[derive(Parser, Debug)]
#[command(name = "mazepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records [default: human, or `[output] format` from config]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Print only the summary line, without drawing the maze
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log algorithm progress and timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "MAZEPATH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search between two cells
    Bfs(SearchArgs),

    /// Depth-first search between two cells
    Dfs(SearchArgs),

    /// Cheapest path between two cells
    Dijkstra(SearchArgs),

    /// Print the maze without searching it
    Show(MazeArgs),
}
