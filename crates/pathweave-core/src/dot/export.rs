use super::{node_id, quote_label};
use crate::graph::Graph;
use std::fmt::Write;

/// Render a graph as DOT text.
///
/// Bidirectional edges are written once, with `dir=both`. The edge label is
/// the edge description, or the weight when the description is empty.
/// A node description other than its name goes into `tooltip`.
pub fn to_dot_text(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str("digraph G {\n");
    out.push_str("node [style=filled];\n");
    out.push_str("rankdir=TB;\n");
    out.push_str("overlap=false;\n");

    for node in graph.nodes() {
        let _ = write!(
            out,
            "{} [shape=circle,label={}",
            node_id(node.name()),
            quote_label(node.name())
        );
        if let Some(description) = node
            .description
            .as_deref()
            .filter(|d| !d.is_empty() && *d != node.name())
        {
            let _ = write!(out, ",tooltip={}", quote_label(description));
        }
        out.push_str("]\n");
    }

    for edge in graph.edges() {
        let (source, target) = graph.endpoint_names(edge);
        let label = if edge.description.is_empty() {
            edge.weight().to_string()
        } else {
            edge.description.clone()
        };
        let _ = write!(
            out,
            "{} -> {} [label={},weight={}",
            node_id(source),
            node_id(target),
            quote_label(&label),
            edge.weight()
        );
        if edge.is_bidirectional() {
            out.push_str(",dir=both");
        }
        out.push_str("]\n");
    }

    out.push_str("}\n");
    out
}
