use crate::analysis::cancel::{self, CancellationToken};
use crate::analysis::cycles::CycleDetector;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use serde::Serialize;
use std::fmt;

/// One root-to-leaf path, as node names in walking order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GraphPath(Vec<String>);

impl GraphPath {
    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GraphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("->"))
    }
}

/// Enumerates every maximal path of an acyclic graph from a start node.
///
/// A path ends at a node with no successors. Output order follows edge
/// insertion order at every fork. The number of paths can grow
/// exponentially with the graph.
pub struct PathEnumerator<'g> {
    graph: &'g Graph,
    cancellation: Option<CancellationToken>,
}

impl<'g> PathEnumerator<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        PathEnumerator {
            graph,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// All paths from `start` rendered as `A->B->C`
    pub fn get_all_paths(&self, start: &str) -> Result<Vec<String>> {
        Ok(self
            .all_paths(start)?
            .iter()
            .map(GraphPath::to_string)
            .collect())
    }

    #[tracing::instrument(skip(self), fields(nodes = self.graph.node_count()))]
    pub fn all_paths(&self, start: &str) -> Result<Vec<GraphPath>> {
        let start = self.graph.node_id(start)?;
        if let Some(cycle) = CycleDetector::new(self.graph).find_cycle_names() {
            return Err(GraphError::invalid_argument(format!(
                "path enumeration requires an acyclic graph, found cycle {}",
                cycle.join("->")
            )));
        }

        let mut paths = Vec::new();
        let mut stack: Vec<Vec<NodeId>> = vec![vec![start]];

        while let Some(path) = stack.pop() {
            cancel::check(self.cancellation.as_ref())?;
            let Some(&last) = path.last() else {
                continue;
            };

            let successors: Vec<NodeId> = self.graph.successors(last).map(|(n, _)| n).collect();
            if successors.is_empty() {
                paths.push(self.named(&path));
                continue;
            }
            for next in successors.into_iter().rev() {
                let mut extended = path.clone();
                extended.push(next);
                stack.push(extended);
            }
        }

        tracing::debug!(paths = paths.len(), "paths enumerated");
        Ok(paths)
    }

    fn named(&self, path: &[NodeId]) -> GraphPath {
        GraphPath(
            path.iter()
                .map(|&id| self.graph.node_name(id).to_string())
                .collect(),
        )
    }
}
