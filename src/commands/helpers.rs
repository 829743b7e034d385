//! Helpers shared by the command implementations

use std::fs;
use std::path::Path;
use std::time::Instant;

use pathweave_core::dot::from_dot_text;
use pathweave_core::error::{GraphError, Result};
use pathweave_core::graph::Graph;
use pathweave_core::trace_time;

/// Read and parse a DOT file
pub fn load_graph(path: &Path) -> Result<Graph> {
    let start = Instant::now();
    let text = fs::read_to_string(path).map_err(|e| {
        GraphError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {}", path.display(), e),
        ))
    })?;
    let graph = from_dot_text(&text)?;
    trace_time!(start, "load_graph", nodes = graph.node_count());
    tracing::debug!(path = %path.display(), %graph, "graph loaded");
    Ok(graph)
}

/// Print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

