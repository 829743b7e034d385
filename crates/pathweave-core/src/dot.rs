//! DOT text interchange
//!
//! Export writes a `digraph` with one statement per node and per edge.
//! Import reads the same shape back, one statement per line (several
//! statements separated by `;` are accepted too).

mod export;
mod import;

pub use export::to_dot_text;
pub use import::from_dot_text;

/// Turn a node name into a bare DOT identifier.
///
/// Runs of non-alphanumeric characters collapse into one `_`; leading and
/// trailing underscores are dropped. Distinct names can map to the same id.
pub fn sanitize_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !id.is_empty() {
                id.push('_');
            }
            pending_sep = false;
            id.push(c);
        } else {
            pending_sep = true;
        }
    }
    if id.is_empty() {
        id.push('_');
    }
    id
}

/// Words DOT reserves, matched without regard to case
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

/// Identifier written for a node: [`sanitize_id`], quoted when the bare
/// form would read as a keyword or start with a digit
pub fn node_id(name: &str) -> String {
    let id = sanitize_id(name);
    if is_keyword(&id) || id.starts_with(|c: char| c.is_ascii_digit()) {
        format!("\"{}\"", id)
    } else {
        id
    }
}

/// Wrap text in double quotes, replacing inner `"` by `'`
pub fn quote_label(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "'"))
}
