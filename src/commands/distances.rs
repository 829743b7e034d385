//! `pathweave distances` - distance of every node from a source

use std::path::Path;

use serde_json::json;

use crate::cli::{DistanceArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use pathweave_core::analysis::calculator_for;
use pathweave_core::error::Result;

pub fn execute(ctx: &CommandContext, file: &Path, from: &str, args: &DistanceArgs) -> Result<()> {
    let config = ctx.distance_config(args)?;
    let graph = load_graph(file)?;
    let calculator = calculator_for(&graph, &config, Some(ctx.cancellation.clone()))?;
    let distances = calculator.get_all_distances(from)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = distances
                .iter()
                .map(|(name, distance)| (name.to_string(), json!(distance)))
                .collect();
            print_json(&json!({
                "source": distances.source(),
                "strategy": calculator.name(),
                "distances": map,
            }))
        }
        OutputFormat::Human => {
            for (name, distance) in distances.iter() {
                match distance {
                    Some(d) => println!("{}\t{}", name, d),
                    None => println!("{}\tunreachable", name),
                }
            }
            Ok(())
        }
    }
}
