//! Command implementations for all mazepath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::search::{self, Algorithm};
use crate::commands::show;
use mazepath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Bfs(args) => search::execute(ctx, Algorithm::Bfs, args),
            Commands::Dfs(args) => search::execute(ctx, Algorithm::Dfs, args),
            Commands::Dijkstra(args) => search::execute(ctx, Algorithm::Dijkstra, args),
            Commands::Show(args) => show::execute(ctx, args),
        }
    }
}
