//! Shared machinery for shortest-path strategies
//!
//! A strategy only decides how to relax edges. Everything else lives here:
//! - [`DistanceTable`]: the per-run side table (node -> tentative distance)
//! - [`Distances`]: the caller-facing result of a run, keyed by name
//! - [`ShortestGraph`]: the reconstructed union of all shortest paths

use crate::analysis::cancel::{self, CancellationToken};
use crate::error::{GraphError, Result};
use crate::graph::{Edge, EdgeKind, Graph, Node, NodeId};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

/// Relative tolerance when comparing path sums for ties, in rounding steps
const TIE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Tentative distances of a single run, indexed by node handle.
///
/// Starts at +infinity for every node except the source (0). Values only
/// ever decrease.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    source: NodeId,
    distances: Vec<f64>,
}

impl DistanceTable {
    pub fn new(graph: &Graph, source: NodeId) -> Self {
        let mut distances = vec![f64::INFINITY; graph.node_count()];
        distances[source.index()] = 0.0;
        DistanceTable { source, distances }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn get(&self, node: NodeId) -> f64 {
        self.distances[node.index()]
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.get(node).is_finite()
    }

    /// Lower the distance of `node` to `candidate` if that is an improvement
    pub fn relax(&mut self, node: NodeId, candidate: f64) -> bool {
        let slot = &mut self.distances[node.index()];
        if candidate < *slot {
            *slot = candidate;
            true
        } else {
            false
        }
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Final distances from one source, keyed by node name.
///
/// Unreachable nodes are present but report `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distances {
    source: String,
    by_name: BTreeMap<String, f64>,
}

impl Distances {
    pub fn from_table(graph: &Graph, table: &DistanceTable) -> Self {
        let by_name = graph
            .node_ids()
            .map(|id| (graph.node_name(id).to_string(), table.get(id)))
            .collect();
        Distances {
            source: graph.node_name(table.source()).to_string(),
            by_name,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distance to `name`; `None` when unreachable or unknown
    pub fn get(&self, name: &str) -> Option<f64> {
        self.by_name.get(name).copied().filter(|d| d.is_finite())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn is_reachable(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All nodes in name order with their distance (`None` = unreachable)
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.by_name
            .iter()
            .map(|(name, d)| (name.as_str(), Some(*d).filter(|d| d.is_finite())))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Subgraph holding exactly the nodes and edges on some shortest path.
///
/// Every node is annotated with its distance from the source, both in
/// [`ShortestGraph::distance_of`] and in the node description.
#[derive(Debug, Clone)]
pub struct ShortestGraph {
    graph: Graph,
    source: String,
    target: String,
    distances: HashMap<String, f64>,
}

impl ShortestGraph {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Length of the shortest path from source to target
    pub fn distance(&self) -> f64 {
        self.distances.get(&self.target).copied().unwrap_or(0.0)
    }

    pub fn distance_of(&self, name: &str) -> Option<f64> {
        self.distances.get(name).copied()
    }
}

/// A shortest-path strategy over a borrowed graph.
///
/// Implementors supply the relaxation; the trait provides the public
/// operations on top of it. Calculators keep no per-run state, so one
/// instance can serve any number of sequential runs.
pub trait DistanceCalculator {
    fn graph(&self) -> &Graph;

    fn cancellation(&self) -> Option<&CancellationToken> {
        None
    }

    /// Strategy name used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Populate `table`, which arrives initialized for its source
    fn relax_from(&self, table: &mut DistanceTable) -> Result<()>;

    /// Run the strategy from `source` and return the filled table
    fn compute(&self, source: NodeId) -> Result<DistanceTable> {
        let start = Instant::now();
        let mut table = DistanceTable::new(self.graph(), source);
        self.relax_from(&mut table)?;
        tracing::debug!(
            strategy = self.name(),
            source = self.graph().node_name(source),
            reachable = table.reachable_count(),
            nodes = self.graph().node_count(),
            elapsed = ?start.elapsed(),
            "distances computed"
        );
        Ok(table)
    }

    /// Distances of every node from `source`.
    fn get_all_distances(&self, source: &str) -> Result<Distances> {
        let source_id = self.graph().node_id(source)?;
        let table = self.compute(source_id)?;
        Ok(Distances::from_table(self.graph(), &table))
    }

    /// Union of all shortest paths from `source` to `target`.
    ///
    /// Fails with `PathNotFound` when the target is unreachable.
    fn get_shortest_graph(&self, source: &str, target: &str) -> Result<ShortestGraph> {
        let source_id = self.graph().node_id(source)?;
        let target_id = self.graph().node_id(target)?;
        let table = self.compute(source_id)?;
        reconstruct(self.graph(), &table, target_id, self.cancellation())
    }
}

/// Length of the path reaching `from` at `distance` extended by `edge`.
///
/// Fails when the sum overflows, so a reachable node is never reported as
/// unreachable.
pub(crate) fn extend_path(
    graph: &Graph,
    from: NodeId,
    distance: f64,
    edge: &Edge,
) -> Result<f64> {
    let length = distance + edge.weight().value();
    if length.is_finite() {
        Ok(length)
    } else {
        Err(GraphError::invalid_argument(format!(
            "path length through '{}' overflows",
            graph.node_name(from)
        )))
    }
}

/// Predecessors of `node` that lie on a shortest path to it, with edge weight.
///
/// All predecessors minimising `distance[p] + weight(p -> node)` are kept.
fn shortest_path_predecessors(
    graph: &Graph,
    table: &DistanceTable,
    node: NodeId,
) -> Vec<(NodeId, f64)> {
    let candidates: Vec<(NodeId, f64, f64)> = graph
        .predecessors(node)
        .filter(|(prev, _)| table.is_reachable(*prev))
        .map(|(prev, edge)| {
            let weight = edge.weight().value();
            (prev, weight, table.get(prev) + weight)
        })
        .collect();

    let Some(min) = candidates.iter().map(|c| c.2).min_by(f64::total_cmp) else {
        return Vec::new();
    };
    let tolerance = TIE_TOLERANCE * min.abs().max(1.0);

    candidates
        .into_iter()
        .filter(|c| (c.2 - min).abs() <= tolerance)
        .map(|(prev, weight, _)| (prev, weight))
        .collect()
}

/// Copy a node (name and tag) into `result` unless already there
fn ensure_node(
    result: &mut Graph,
    distances: &mut HashMap<String, f64>,
    original: &Node,
    distance: f64,
) -> Result<NodeId> {
    let (added, id) = result.try_add_node(original.name())?;
    if added {
        let copy = result.node_mut(id);
        copy.tag = original.tag.clone();
        copy.description = Some(format!("distance: {}", distance));
        distances.insert(original.name().to_string(), distance);
    }
    Ok(id)
}

/// Build the shortest-path subgraph from a finished distance table.
///
/// Walks backwards from `target` with an explicit work list. Each node is
/// expanded once; every tied shortest-path predecessor is added together
/// with a directed edge carrying the original weight.
pub fn reconstruct(
    graph: &Graph,
    table: &DistanceTable,
    target: NodeId,
    cancellation: Option<&CancellationToken>,
) -> Result<ShortestGraph> {
    let source = table.source();
    if !table.is_reachable(target) {
        return Err(GraphError::path_not_found(
            graph.node_name(source),
            graph.node_name(target),
        ));
    }

    let start = Instant::now();
    let mut result = Graph::new();
    let mut distances = HashMap::new();
    ensure_node(&mut result, &mut distances, graph.node(target), table.get(target))?;

    let mut pending = vec![target];
    let mut expanded: HashSet<NodeId> = HashSet::new();

    while let Some(node) = pending.pop() {
        cancel::check(cancellation)?;
        if node == source || !expanded.insert(node) {
            continue;
        }

        let node_copy = result.node_id(graph.node_name(node))?;
        for (prev, weight) in shortest_path_predecessors(graph, table, node) {
            let prev_copy = ensure_node(&mut result, &mut distances, graph.node(prev), table.get(prev))?;
            if result.find_edge(prev_copy, node_copy).is_none() {
                let weight = crate::graph::Weight::new(weight)?;
                let edge = result.connect(prev_copy, node_copy, weight, EdgeKind::Directed)?;
                result.edge_mut(edge).description = weight.to_string();
            }
            pending.push(prev);
        }
    }

    crate::trace_time!(start, "reconstruct", expanded = expanded.len());
    tracing::debug!(
        source = graph.node_name(source),
        target = graph.node_name(target),
        nodes = result.node_count(),
        edges = result.edge_count(),
        "shortest graph reconstructed"
    );

    Ok(ShortestGraph {
        graph: result,
        source: graph.node_name(source).to_string(),
        target: graph.node_name(target).to_string(),
        distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_initialization() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, false).unwrap();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let table = DistanceTable::new(&graph, a);
        assert_eq!(table.get(a), 0.0);
        assert!(table.get(b).is_infinite());
        assert_eq!(table.reachable_count(), 1);
    }

    #[test]
    fn test_relax_only_decreases() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, false).unwrap();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let mut table = DistanceTable::new(&graph, a);
        assert!(table.relax(b, 5.0));
        assert!(!table.relax(b, 7.0));
        assert!(!table.relax(b, 5.0));
        assert!(table.relax(b, 3.0));
        assert_eq!(table.get(b), 3.0);
    }

    #[test]
    fn test_reconstruct_unreachable_is_path_not_found() {
        let mut graph = Graph::new();
        graph.add_node("A").unwrap();
        graph.add_node("B").unwrap();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let table = DistanceTable::new(&graph, a);
        assert!(matches!(
            reconstruct(&graph, &table, b, None),
            Err(GraphError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_reconstruct_source_equals_target() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, false).unwrap();
        let a = graph.node_id("A").unwrap();
        let table = DistanceTable::new(&graph, a);
        let shortest = reconstruct(&graph, &table, a, None).unwrap();
        assert_eq!(shortest.graph().node_count(), 1);
        assert_eq!(shortest.graph().edge_count(), 0);
        assert_eq!(shortest.distance(), 0.0);
    }

    #[test]
    fn test_distances_report_unreachable_as_none() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, false).unwrap();
        graph.add_node("C").unwrap();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let mut table = DistanceTable::new(&graph, a);
        table.relax(b, 1.0);

        let distances = Distances::from_table(&graph, &table);
        assert_eq!(distances.source(), "A");
        assert_eq!(distances.get("A"), Some(0.0));
        assert_eq!(distances.get("B"), Some(1.0));
        assert_eq!(distances.get("C"), None);
        assert!(distances.contains("C"));
        assert!(!distances.contains("Z"));
        let listed: Vec<(&str, Option<f64>)> = distances.iter().collect();
        assert_eq!(listed, vec![("A", Some(0.0)), ("B", Some(1.0)), ("C", None)]);
    }
}
