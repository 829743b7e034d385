//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands, DistanceArgs};
use crate::commands;
use pathweave_core::analysis::CancellationToken;
use pathweave_core::config::{DistanceConfig, PathweaveConfig};
use pathweave_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: PathweaveConfig,
    pub cancellation: CancellationToken,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: PathweaveConfig,
        cancellation: CancellationToken,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            cancellation,
            start,
        }
    }

    /// Distance settings from the config file, overridden by flags
    pub fn distance_config(&self, args: &DistanceArgs) -> Result<DistanceConfig> {
        let mut config = self.config.clone();
        if let Some(strategy) = args.strategy {
            config.distance.strategy = strategy;
        }
        if let Some(max_distance) = args.max_distance {
            config.distance.max_distance = max_distance;
        }
        config.validate()?;
        Ok(config.distance)
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
        println!("pathweave {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths, cycles and path enumeration over DOT graphs.");
        println!();
        println!("Run `pathweave --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Shortest {
                file,
                from,
                to,
                distance,
                dot,
            } => commands::shortest::execute(ctx, file, from, to, distance, *dot),

            Commands::Distances {
                file,
                from,
                distance,
            } => commands::distances::execute(ctx, file, from, distance),

            Commands::Cycles { file } => commands::cycles::execute(ctx, file),

            Commands::Paths { file, from } => commands::paths::execute(ctx, file, from),

            Commands::Render {
                file,
                output,
                engine,
                image_format,
            } => commands::render::execute(ctx, file, output, *engine, *image_format),
        }
    }
}
