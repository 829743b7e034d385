use crate::bail_unsupported;
use crate::error::{GraphError, Result};
use crate::graph::{EdgeKind, Graph, Weight};
use regex::Regex;
use std::collections::HashMap;

const ID: &str = r#""(?:[^"\\]|\\.)*"|[\w.]+"#;

/// Compiled statement patterns
struct DotPatterns {
    edge: Regex,
    node: Regex,
    attribute: Regex,
}

impl DotPatterns {
    fn compile() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| GraphError::Other(format!("invalid DOT pattern: {}", e)))
        };
        Ok(DotPatterns {
            edge: compile(&format!(
                r"^({ID})\s*(<->|->|--)\s*({ID})\s*(?:\[(.*)\])?$"
            ))?,
            node: compile(&format!(r"^({ID})\s*(?:\[(.*)\])?$"))?,
            attribute: compile(r#"(\w+)\s*=\s*("(?:[^"\\]|\\.)*"|[^,;\s\]]+)"#)?,
        })
    }

    fn attributes(&self, list: Option<&str>) -> HashMap<String, String> {
        let Some(list) = list else {
            return HashMap::new();
        };
        self.attribute
            .captures_iter(list)
            .map(|cap| (cap[1].to_lowercase(), unquote(&cap[2])))
            .collect()
    }
}

fn unquote(text: &str) -> String {
    let text = text.trim();
    match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\""),
        None => text.to_string(),
    }
}

/// Split a line into statements on `;` outside quotes and brackets
fn statements(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut depth = 0usize;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '[' if !in_quotes => depth += 1,
            ']' if !in_quotes => depth = depth.saturating_sub(1),
            ';' if !in_quotes && depth == 0 => {
                parts.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&line[start..]);
    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip comments, graph headers and braces from a raw line
fn body_of(line: &str) -> &str {
    let mut line = line.trim();
    if line.starts_with("//") || line.starts_with('#') {
        return "";
    }
    let first = line
        .split(|c: char| c.is_whitespace() || c == '{')
        .next()
        .unwrap_or("");
    let rest = line[first.len()..].trim_start();
    let is_statement = ["->", "<->", "--", "["]
        .iter()
        .any(|op| rest.starts_with(op));
    let is_header = ["digraph", "graph", "strict", "subgraph"]
        .iter()
        .any(|k| k.eq_ignore_ascii_case(first));
    if is_header && !is_statement {
        line = match line.find('{') {
            Some(pos) => &line[pos + 1..],
            None => "",
        };
    }
    line.trim_start_matches('{').trim_end_matches('}').trim()
}

/// Global statements (`node [..]`, `rankdir=TB`) carry no graph content
fn is_global_statement(statement: &str) -> bool {
    let keyword = statement
        .split(|c: char| c.is_whitespace() || c == '[')
        .next()
        .unwrap_or("");
    if ["node", "edge", "graph"]
        .iter()
        .any(|k| k.eq_ignore_ascii_case(keyword))
    {
        return true;
    }
    match statement.find('=') {
        Some(pos) => !statement[..pos].contains('[') && !statement.contains("->"),
        None => false,
    }
}

/// Parse DOT text into a graph.
///
/// Node statements create nodes, with `tooltip` (or else `label`) becoming
/// the description.
/// Edge statements create missing endpoints; `label` becomes the edge
/// description and `weight` its weight (1 when absent or unparseable).
/// `<->` or `dir=both` marks a bidirectional edge. Undirected `--` edges
/// are rejected, as is a second edge between the same ordered pair.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn from_dot_text(text: &str) -> Result<Graph> {
    let patterns = DotPatterns::compile()?;
    let mut graph = Graph::new();

    for (number, line) in text.lines().enumerate() {
        for statement in statements(body_of(line)) {
            if let Some(cap) = patterns.edge.captures(statement) {
                let source = unquote(&cap[1]);
                let target = unquote(&cap[3]);
                let attributes = patterns.attributes(cap.get(4).map(|m| m.as_str()));
                add_edge(&mut graph, &source, &cap[2], &target, &attributes, number + 1)?;
            } else if is_global_statement(statement) {
                continue;
            } else if let Some(cap) = patterns.node.captures(statement) {
                let name = unquote(&cap[1]);
                let attributes = patterns.attributes(cap.get(2).map(|m| m.as_str()));
                let description = attributes.get("tooltip").or(attributes.get("label"));
                add_node(&mut graph, &name, description)?;
            } else {
                tracing::warn!(line = number + 1, statement, "unrecognised DOT statement skipped");
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "DOT text parsed"
    );
    Ok(graph)
}

fn add_node(graph: &mut Graph, name: &str, description: Option<&String>) -> Result<()> {
    let (_, id) = graph.try_add_node(name)?;
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        graph.node_mut(id).description = Some(description.clone());
    }
    Ok(())
}

fn add_edge(
    graph: &mut Graph,
    source: &str,
    op: &str,
    target: &str,
    attributes: &HashMap<String, String>,
    line: usize,
) -> Result<()> {
    if op == "--" {
        bail_unsupported!("edge operator", format!("'--' on line {}", line), "->, <->");
    }

    let weight = match attributes.get("weight") {
        None => Weight::ONE,
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => Weight::new(value)?,
            Err(_) => {
                tracing::warn!(line, weight = %raw, "unparseable edge weight, using 1");
                Weight::ONE
            }
        },
    };
    let bidirectional = op == "<->"
        || attributes
            .get("dir")
            .is_some_and(|dir| dir.eq_ignore_ascii_case("both"));

    let (_, source_id) = graph.try_add_node(source)?;
    let (_, target_id) = graph.try_add_node(target)?;
    let edge = graph.connect(source_id, target_id, weight, EdgeKind::from_flag(bidirectional))?;
    if let Some(label) = attributes.get("label") {
        graph.edge_mut(edge).description = label.clone();
    }
    Ok(())
}
