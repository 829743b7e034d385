use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeId, EdgeKind, NodeId, Weight};
use crate::error::{GraphError, Result};
use std::collections::HashMap;

/// Directed weighted graph stored as an arena.
///
/// Nodes and edges live in vectors owned by the graph and refer to each
/// other through [`NodeId`]/[`EdgeId`] handles. Every node keeps the list of
/// edges incident to it so neighbourhood queries never scan the whole edge
/// set. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_name: HashMap<String, NodeId>,
    incident: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node with the given name.
    ///
    /// Fails with `NodeAlreadyExists` when the name is taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        self.insert_node(Node::new(name)?)
    }

    /// Add a fully built node (description, tag).
    pub fn insert_node(&mut self, node: Node) -> Result<NodeId> {
        if self.by_name.contains_key(node.name()) {
            return Err(GraphError::node_already_exists(node.name()));
        }
        let id = NodeId(self.nodes.len());
        self.by_name.insert(node.name().to_string(), id);
        self.nodes.push(node);
        self.incident.push(Vec::new());
        Ok(id)
    }

    /// Add a node unless one with that name exists.
    ///
    /// Returns `(true, new_id)` when added and `(false, existing_id)` otherwise.
    /// Only an invalid name is an error.
    pub fn try_add_node(&mut self, name: impl Into<String>) -> Result<(bool, NodeId)> {
        let name = name.into();
        match self.by_name.get(&name) {
            Some(&id) => Ok((false, id)),
            None => self.add_node(name).map(|id| (true, id)),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn node_name(&self, id: NodeId) -> &str {
        self.nodes[id.0].name()
    }

    pub fn node_id(&self, name: &str) -> Result<NodeId> {
        self.try_node_id(name)
            .ok_or_else(|| GraphError::node_not_found(name))
    }

    pub fn try_node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up a node by name, failing with `NodeNotFound`.
    pub fn get_node(&self, name: &str) -> Result<&Node> {
        self.node_id(name).map(|id| self.node(id))
    }

    pub fn try_get_node(&self, name: &str) -> Option<&Node> {
        self.try_node_id(name).map(|id| self.node(id))
    }

    /// Connect two nodes by name, creating missing endpoints.
    ///
    /// Fails with `EdgeAlreadyExists` if an edge already connects the ordered
    /// pair, or either direction when a bidirectional edge is involved, and
    /// with `InvalidArgument` for a non-positive weight. Returns the graph so
    /// calls can be chained.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        bidirectional: bool,
    ) -> Result<&mut Self> {
        let weight = Weight::new(weight)?;
        if source.trim().is_empty() || target.trim().is_empty() {
            return Err(GraphError::invalid_argument("node name must not be empty"));
        }
        let (_, source_id) = self.try_add_node(source)?;
        let (_, target_id) = self.try_add_node(target)?;
        self.connect(source_id, target_id, weight, EdgeKind::from_flag(bidirectional))?;
        Ok(self)
    }

    /// Non-failing variant of [`Graph::add_edge`]; returns whether an edge was added.
    pub fn try_add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        bidirectional: bool,
    ) -> bool {
        match self.add_edge(source, target, weight, bidirectional) {
            Ok(_) => true,
            Err(e) => {
                tracing::trace!(source, target, error = %e, "edge not added");
                false
            }
        }
    }

    /// Connect two existing nodes by handle.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Weight,
        kind: EdgeKind,
    ) -> Result<EdgeId> {
        let conflict = self.incident[source.0]
            .iter()
            .any(|&eid| self.edges[eid.0].conflicts_with(source, target, kind));
        if conflict {
            return Err(GraphError::edge_already_exists(
                self.node_name(source),
                self.node_name(target),
            ));
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(source, target, weight, kind));
        self.incident[source.0].push(id);
        if source != target {
            self.incident[target.0].push(id);
        }
        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.0]
    }

    /// Edge walkable from `source` to `target`, by handle
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.incident[source.0]
            .iter()
            .copied()
            .find(|&eid| self.edges[eid.0].leads(source, target))
    }

    /// Look up the edge walkable from `source` to `target`.
    ///
    /// A bidirectional edge is found in either direction. Fails with
    /// `NodeNotFound` for unknown endpoints and `EdgeNotFound` otherwise.
    pub fn get_edge(&self, source: &str, target: &str) -> Result<&Edge> {
        let source_id = self.node_id(source)?;
        let target_id = self.node_id(target)?;
        self.find_edge(source_id, target_id)
            .map(|eid| self.edge(eid))
            .ok_or_else(|| GraphError::edge_not_found(source, target))
    }

    pub fn try_get_edge(&self, source: &str, target: &str) -> Option<&Edge> {
        let source_id = self.try_node_id(source)?;
        let target_id = self.try_node_id(target)?;
        self.find_edge(source_id, target_id).map(|eid| self.edge(eid))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + Clone + '_ {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + Clone {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All distinct edges; a bidirectional edge appears once.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + Clone + '_ {
        self.edges.iter()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + Clone {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Neighbours reachable in one step from `id`, with the edge used
    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.incident[id.0].iter().filter_map(move |&eid| {
            let edge = &self.edges[eid.0];
            edge.successor_of(id).map(|next| (next, edge))
        })
    }

    /// Neighbours that reach `id` in one step, with the edge used
    pub fn predecessors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.incident[id.0].iter().filter_map(move |&eid| {
            let edge = &self.edges[eid.0];
            edge.predecessor_of(id).map(|prev| (prev, edge))
        })
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.successors(id).count()
    }

    /// Names of both endpoints of an edge
    pub fn endpoint_names(&self, edge: &Edge) -> (&str, &str) {
        (self.node_name(edge.source), self.node_name(edge.target))
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nodes: {}, Edges: {}", self.node_count(), self.edge_count())
    }
}
