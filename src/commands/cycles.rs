//! `pathweave cycles` - directed cycle check

use std::path::Path;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use pathweave_core::analysis::CycleDetector;
use pathweave_core::error::Result;

pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = load_graph(file)?;
    let cycle = CycleDetector::new(&graph).find_cycle_names();

    match ctx.cli.format {
        OutputFormat::Json => print_json(&json!({
            "cyclic": cycle.is_some(),
            "cycle": cycle,
        })),
        OutputFormat::Human => {
            match &cycle {
                Some(nodes) => {
                    println!("cyclic");
                    if !ctx.cli.quiet {
                        println!("  {}", nodes.join(" -> "));
                    }
                }
                None => println!("acyclic"),
            }
            Ok(())
        }
    }
}
