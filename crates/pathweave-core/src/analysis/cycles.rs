use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Reports whether a graph contains a directed cycle.
///
/// Three-colour depth-first search driven by an explicit stack, so deep
/// graphs cannot overflow the call stack. Every node is tried as a root.
/// Self-loops count as cycles, and so does any bidirectional edge between
/// two distinct nodes.
pub struct CycleDetector<'g> {
    graph: &'g Graph,
}

impl<'g> CycleDetector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        CycleDetector { graph }
    }

    pub fn is_cyclic(&self) -> bool {
        self.find_cycle().is_some()
    }

    pub fn is_acyclic(&self) -> bool {
        !self.is_cyclic()
    }

    /// First cycle found, as a closed walk (first node == last node)
    #[tracing::instrument(skip(self), fields(nodes = self.graph.node_count()))]
    pub fn find_cycle(&self) -> Option<Vec<NodeId>> {
        let mut marks = vec![Mark::Unvisited; self.graph.node_count()];
        let mut stack: Vec<(NodeId, std::vec::IntoIter<NodeId>)> = Vec::new();

        for root in self.graph.node_ids() {
            if marks[root.index()] != Mark::Unvisited {
                continue;
            }
            marks[root.index()] = Mark::InProgress;
            stack.push((root, self.successors(root)));

            loop {
                let Some((node, pending)) = stack.last_mut() else {
                    break;
                };
                let node = *node;

                let Some(next) = pending.next() else {
                    marks[node.index()] = Mark::Done;
                    stack.pop();
                    continue;
                };

                match marks[next.index()] {
                    Mark::InProgress => {
                        let start = stack.iter().position(|(n, _)| *n == next).unwrap_or(0);
                        let mut cycle: Vec<NodeId> =
                            stack[start..].iter().map(|(n, _)| *n).collect();
                        cycle.push(next);
                        tracing::debug!(length = cycle.len() - 1, "cycle found");
                        return Some(cycle);
                    }
                    Mark::Unvisited => {
                        marks[next.index()] = Mark::InProgress;
                        stack.push((next, self.successors(next)));
                    }
                    Mark::Done => {}
                }
            }
        }

        None
    }

    /// First cycle found, by node name
    pub fn find_cycle_names(&self) -> Option<Vec<String>> {
        self.find_cycle().map(|cycle| {
            cycle
                .into_iter()
                .map(|id| self.graph.node_name(id).to_string())
                .collect()
        })
    }

    fn successors(&self, node: NodeId) -> std::vec::IntoIter<NodeId> {
        self.graph
            .successors(node)
            .map(|(next, _)| next)
            .collect::<Vec<_>>()
            .into_iter()
    }
}
