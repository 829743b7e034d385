use crate::analysis::cancel::{self, CancellationToken};
use crate::analysis::distance::{extend_path, DistanceCalculator, DistanceTable};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance, then name)
#[derive(Debug, Clone)]
pub struct HeapEntry<'g> {
    pub distance: f64,
    pub name: &'g str,
    pub node: NodeId,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.name.cmp(other.name))
    }
}

/// Dijkstra-style relaxation over non-negative weights.
///
/// Nodes are settled in order of tentative distance; among equal distances
/// the lexicographically smallest name goes first. Stale heap entries are
/// skipped on pop instead of being decreased in place.
pub struct DijkstraCalculator<'g> {
    graph: &'g Graph,
    cancellation: Option<CancellationToken>,
}

impl<'g> DijkstraCalculator<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        DijkstraCalculator {
            graph,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

impl DistanceCalculator for DijkstraCalculator<'_> {
    fn graph(&self) -> &Graph {
        self.graph
    }

    fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }

    #[tracing::instrument(skip(self, table), fields(source = self.graph.node_name(table.source()), nodes = self.graph.node_count()))]
    fn relax_from(&self, table: &mut DistanceTable) -> Result<()> {
        let graph = self.graph;
        let mut settled = vec![false; graph.node_count()];
        let mut heap = BinaryHeap::new();
        let source = table.source();
        heap.push(Reverse(HeapEntry {
            distance: 0.0,
            name: graph.node_name(source),
            node: source,
        }));

        while let Some(Reverse(HeapEntry { distance, node, .. })) = heap.pop() {
            cancel::check(self.cancellation())?;

            // Stale entry
            if settled[node.index()] || distance > table.get(node) {
                continue;
            }
            settled[node.index()] = true;

            for (next, edge) in graph.successors(node) {
                if settled[next.index()] {
                    continue;
                }
                let candidate = extend_path(graph, node, distance, edge)?;
                if table.relax(next, candidate) {
                    tracing::trace!(
                        from = graph.node_name(node),
                        to = graph.node_name(next),
                        distance = candidate,
                        "relaxed"
                    );
                    heap.push(Reverse(HeapEntry {
                        distance: candidate,
                        name: graph.node_name(next),
                        node: next,
                    }));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
