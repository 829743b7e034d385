//! `pathweave shortest` - union of all shortest paths between two nodes

use std::path::Path;

use serde_json::json;

use crate::cli::{DistanceArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, print_json};
use pathweave_core::analysis::{calculator_for, ShortestGraph};
use pathweave_core::dot::to_dot_text;
use pathweave_core::error::Result;

pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    from: &str,
    to: &str,
    args: &DistanceArgs,
    dot: bool,
) -> Result<()> {
    let config = ctx.distance_config(args)?;
    let graph = load_graph(file)?;
    let calculator = calculator_for(&graph, &config, Some(ctx.cancellation.clone()))?;
    let shortest = calculator.get_shortest_graph(from, to)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), strategy = calculator.name(), "shortest");

    if dot {
        print!("{}", to_dot_text(shortest.graph()));
        return Ok(());
    }

    match ctx.cli.format {
        OutputFormat::Json => print_json(&to_json(&shortest, calculator.name())),
        OutputFormat::Human => {
            println!("{} -> {}: {}", shortest.source(), shortest.target(), shortest.distance());
            if !ctx.cli.quiet {
                let result = shortest.graph();
                for edge in result.edges() {
                    let (source, target) = result.endpoint_names(edge);
                    println!("  {} -> {} ({})", source, target, edge.weight());
                }
            }
            Ok(())
        }
    }
}

fn to_json(shortest: &ShortestGraph, strategy: &str) -> serde_json::Value {
    let graph = shortest.graph();
    let nodes: Vec<serde_json::Value> = graph
        .nodes()
        .map(|node| {
            json!({
                "name": node.name(),
                "distance": shortest.distance_of(node.name()),
            })
        })
        .collect();
    let edges: Vec<serde_json::Value> = graph
        .edges()
        .map(|edge| {
            let (source, target) = graph.endpoint_names(edge);
            json!({
                "source": source,
                "target": target,
                "weight": edge.weight(),
            })
        })
        .collect();

    json!({
        "source": shortest.source(),
        "target": shortest.target(),
        "strategy": strategy,
        "distance": shortest.distance(),
        "nodes": nodes,
        "edges": edges,
    })
}
