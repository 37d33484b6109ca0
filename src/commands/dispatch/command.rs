//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use mazepath_core::config::Config;
use mazepath_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format`, else the config's `[output] format`, else human
    pub fn format(&self) -> OutputFormat {
        self.cli
            .format
            .or(self.config.output.format)
            .unwrap_or_default()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("mazepath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Observable graph search over weighted mazes.");
        println!();
        println!("Run `mazepath --help` for usage information.");
        Ok(())
    }
}
