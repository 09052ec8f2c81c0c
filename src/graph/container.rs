//! Core graph structure — node and edge tables with ID-based incidence.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::types::{AttributeCollection, Edge, GraphError, GraphResult, Node};

/// Declared kind of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphType {
    /// Edges have a direction.
    Directed,
    /// Edges are symmetric.
    Undirected,
}

impl GraphType {
    /// Return the name used in graph descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a graph type from its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An in-memory graph owning its nodes and edges.
///
/// Nodes and edges refer to each other by ID only: a node records the IDs of
/// its incident edges, an edge the IDs of its endpoints. Every edge endpoint
/// is a node of this graph.
#[derive(Debug, Clone)]
pub struct Graph {
    graph_type: GraphType,
    attributes: AttributeCollection,
    nodes: BTreeMap<String, Node>,
    edges: BTreeMap<String, Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            attributes: AttributeCollection::new(),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// The declared graph type.
    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &AttributeCollection {
        &self.attributes
    }

    /// Graph-level attributes (mutable).
    pub fn attributes_mut(&mut self) -> &mut AttributeCollection {
        &mut self.attributes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by ID (mutable).
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Get an edge by ID (mutable).
    pub fn edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// All nodes, ascending by ID.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All nodes, ascending by ID (mutable).
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// All edges, ascending by ID.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Add a node with empty attributes.
    ///
    /// Re-adding an existing ID replaces that node's attributes; edges already
    /// attached to it stay attached.
    pub fn add_node(&mut self, id: impl Into<String>) -> GraphResult<&mut Node> {
        let mut node = Node::new(id)?;
        if let Some(mut previous) = self.nodes.remove(node.id()) {
            log::warn!("Node {} redefined, attributes reset", node.id());
            node.restore_edges(previous.take_edges());
        }
        let id = node.id().to_string();
        Ok(self.nodes.entry(id).or_insert(node))
    }

    /// Add an edge connecting the given nodes, in declaration order.
    ///
    /// The edge is registered in the incidence set of every endpoint. An
    /// existing edge with the same ID is detached and replaced.
    pub fn add_edge<S: AsRef<str>>(
        &mut self,
        attributes: AttributeCollection,
        node_ids: &[S],
    ) -> GraphResult<&Edge> {
        let edge = Edge::new(attributes, node_ids)?;

        if let Some(missing) = edge.node_ids().find(|id| !self.nodes.contains_key(*id)) {
            return Err(GraphError::UnknownNode(missing.to_string()));
        }

        if let Some(previous) = self.edges.remove(edge.id()) {
            log::warn!("Edge {} redefined, replacing previous endpoints", edge.id());
            for node_id in previous.node_ids() {
                if let Some(node) = self.nodes.get_mut(node_id) {
                    node.detach(previous.id());
                }
            }
        }

        for node_id in edge.node_ids() {
            if let Some(node) = self.nodes.get_mut(node_id) {
                node.attach(edge.id());
            }
        }

        log::debug!(
            "Added edge {} over {} node(s)",
            edge.id(),
            edge.node_ids().count()
        );
        let id = edge.id().to_string();
        Ok(self.edges.entry(id).or_insert(edge))
    }

    /// Whether `source` and `target` share an edge.
    ///
    /// Only defined for undirected graphs. A node is connected to itself when
    /// it participates in any edge.
    pub fn has_connection(&self, source: &str, target: &str) -> GraphResult<bool> {
        match self.graph_type {
            GraphType::Undirected => Ok(self
                .edges
                .values()
                .any(|edge| edge.connects(source) && edge.connects(target))),
            other => Err(GraphError::UnsupportedGraphType(other)),
        }
    }

    /// Distinct nodes reachable over a single incident edge, excluding the
    /// node itself. Edge direction is ignored.
    pub fn adjacent(&self, id: &str) -> GraphResult<BTreeSet<&str>> {
        let mut adjacent = BTreeSet::new();
        for edge in self.incident_edges(id)? {
            adjacent.extend(edge.node_ids().filter(|n| *n != id));
        }
        Ok(adjacent)
    }

    /// Edges the node participates in, ascending by ID.
    pub fn incident_edges(&self, id: &str) -> GraphResult<Vec<&Edge>> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        Ok(node
            .edge_ids()
            .filter_map(|edge_id| self.edges.get(edge_id))
            .collect())
    }
}
