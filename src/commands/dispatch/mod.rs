//! Command dispatch logic for pathweave

use std::time::Instant;

use crate::cli::Cli;
use pathweave_core::analysis::CancellationToken;
use pathweave_core::config::{global, PathweaveConfig};
use pathweave_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PathweaveConfig::load(path)?,
        None => {
            debug!(source = %global::source_display(), "discovering config");
            PathweaveConfig::discover()?
        }
    };
    debug!(elapsed = ?start.elapsed(), "load_config");

    let cancellation = CancellationToken::new();
    let handle = cancellation.clone();
    if let Err(e) = ctrlc::set_handler(move || handle.cancel()) {
        debug!(error = %e, "Ctrl-C handler not installed");
    }

    let ctx = CommandContext::new(cli, config, cancellation, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
