//! Command dispatch logic for mazepath

use std::time::Instant;

use crate::cli::Cli;
use mazepath_core::config::Config;
use mazepath_core::error::Result;
use tracing::debug;

pub(crate) mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
