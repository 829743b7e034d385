use crate::analysis::cancel::{self, CancellationToken};
use crate::analysis::distance::{extend_path, DistanceCalculator, DistanceTable};
use crate::config::DistanceConfig;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Ceiling used when none is configured
pub const DEFAULT_MAX_DISTANCE: f64 = 20.0;

/// Bounded depth-first relaxation.
///
/// Walks the graph depth-first and re-expands a node every time a strictly
/// shorter candidate reaches it. Candidates above `max_distance` are pruned,
/// so nodes farther than the ceiling are reported as unreachable. Within the
/// ceiling the resulting distances are exact.
pub struct DepthFirstCalculator<'g> {
    graph: &'g Graph,
    max_distance: f64,
    cancellation: Option<CancellationToken>,
}

impl<'g> DepthFirstCalculator<'g> {
    pub fn new(graph: &'g Graph, max_distance: f64) -> Result<Self> {
        if max_distance.is_nan() || max_distance <= 0.0 {
            return Err(GraphError::invalid_argument(format!(
                "max distance must be positive, got {}",
                max_distance
            )));
        }
        Ok(DepthFirstCalculator {
            graph,
            max_distance,
            cancellation: None,
        })
    }

    pub fn with_default_bound(graph: &'g Graph) -> Self {
        DepthFirstCalculator {
            graph,
            max_distance: DEFAULT_MAX_DISTANCE,
            cancellation: None,
        }
    }

    pub fn from_config(graph: &'g Graph, config: &DistanceConfig) -> Result<Self> {
        Self::new(graph, config.max_distance)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl DistanceCalculator for DepthFirstCalculator<'_> {
    fn graph(&self) -> &Graph {
        self.graph
    }

    fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    fn name(&self) -> &'static str {
        "depth-first"
    }

    #[tracing::instrument(skip(self, table), fields(source = self.graph.node_name(table.source()), max_distance = self.max_distance))]
    fn relax_from(&self, table: &mut DistanceTable) -> Result<()> {
        let graph = self.graph;
        let mut stack = vec![table.source()];
        let mut expansions = 0usize;

        while let Some(node) = stack.pop() {
            cancel::check(self.cancellation())?;
            expansions += 1;

            let distance = table.get(node);
            let successors: Vec<_> = graph.successors(node).collect();
            // Reversed so the first inserted edge is explored first
            for (next, edge) in successors.into_iter().rev() {
                let candidate = extend_path(graph, node, distance, edge)?;
                if candidate > self.max_distance {
                    continue;
                }
                if table.relax(next, candidate) {
                    tracing::trace!(
                        from = graph.node_name(node),
                        to = graph.node_name(next),
                        distance = candidate,
                        "relaxed"
                    );
                    stack.push(next);
                }
            }
        }

        tracing::debug!(expansions, "bounded relaxation finished");
        Ok(())
    }
}
