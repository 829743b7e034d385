use super::types::{EdgeKind, NodeId, Weight};

/// A weighted connection between two nodes of the same graph.
///
/// Endpoints are arena handles; resolve them through the owning graph.
/// A bidirectional edge is a single object that is traversable both ways.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) weight: Weight,
    pub(crate) kind: EdgeKind,
    pub description: String,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId, weight: Weight, kind: EdgeKind) -> Self {
        Edge {
            source,
            target,
            weight,
            kind,
            description: String::new(),
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn is_bidirectional(&self) -> bool {
        self.kind.is_bidirectional()
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Node reached when leaving `from` along this edge, if the edge allows it
    pub fn successor_of(&self, from: NodeId) -> Option<NodeId> {
        match self.kind {
            _ if self.source == from => Some(self.target),
            EdgeKind::Bidirectional if self.target == from => Some(self.source),
            _ => None,
        }
    }

    /// Node this edge can be entered from when arriving at `to`
    pub fn predecessor_of(&self, to: NodeId) -> Option<NodeId> {
        match self.kind {
            _ if self.target == to => Some(self.source),
            EdgeKind::Bidirectional if self.source == to => Some(self.target),
            _ => None,
        }
    }

    /// Whether the edge can be walked from `from` to `to`
    pub fn leads(&self, from: NodeId, to: NodeId) -> bool {
        self.successor_of(from) == Some(to)
    }

    /// Whether adding an edge `source -> target` of `kind` would duplicate this one
    pub(crate) fn conflicts_with(&self, source: NodeId, target: NodeId, kind: EdgeKind) -> bool {
        if self.source == source && self.target == target {
            return true;
        }
        let either_bidirectional = kind.is_bidirectional() || self.is_bidirectional();
        either_bidirectional && self.source == target && self.target == source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: usize, target: usize, kind: EdgeKind) -> Edge {
        Edge::new(NodeId(source), NodeId(target), Weight::ONE, kind)
    }

    #[test]
    fn test_directed_edge_walks_one_way() {
        let e = edge(0, 1, EdgeKind::Directed);
        assert_eq!(e.successor_of(NodeId(0)), Some(NodeId(1)));
        assert_eq!(e.successor_of(NodeId(1)), None);
        assert_eq!(e.predecessor_of(NodeId(1)), Some(NodeId(0)));
        assert_eq!(e.predecessor_of(NodeId(0)), None);
    }

    #[test]
    fn test_bidirectional_edge_walks_both_ways() {
        let e = edge(0, 1, EdgeKind::Bidirectional);
        assert!(e.leads(NodeId(0), NodeId(1)));
        assert!(e.leads(NodeId(1), NodeId(0)));
        assert_eq!(e.predecessor_of(NodeId(0)), Some(NodeId(1)));
    }

    #[test]
    fn test_self_loop_is_its_own_successor() {
        let e = edge(2, 2, EdgeKind::Directed);
        assert!(e.is_self_loop());
        assert_eq!(e.successor_of(NodeId(2)), Some(NodeId(2)));
    }

    #[test]
    fn test_conflicts() {
        let directed = edge(0, 1, EdgeKind::Directed);
        assert!(directed.conflicts_with(NodeId(0), NodeId(1), EdgeKind::Directed));
        assert!(!directed.conflicts_with(NodeId(1), NodeId(0), EdgeKind::Directed));
        assert!(directed.conflicts_with(NodeId(1), NodeId(0), EdgeKind::Bidirectional));

        let both = edge(0, 1, EdgeKind::Bidirectional);
        assert!(both.conflicts_with(NodeId(1), NodeId(0), EdgeKind::Directed));
    }
}
