//! `pathweave paths` - every maximal path from a start node

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use pathweave_core::analysis::PathEnumerator;
use pathweave_core::error::Result;

pub fn execute(ctx: &CommandContext, file: &Path, from: &str) -> Result<()> {
    let graph = load_graph(file)?;
    let paths = PathEnumerator::new(&graph)
        .with_cancellation(ctx.cancellation.clone())
        .all_paths(from)?;

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "start": from,
            "count": paths.len(),
            "paths": paths,
        })),
        OutputFormat::Human => {
            for path in &paths {
                println!("{}", path);
            }
            Ok(())
        }
    }
}
