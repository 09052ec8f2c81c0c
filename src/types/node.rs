//! Graph vertices.

use std::collections::BTreeSet;

use super::attr::AttributeCollection;
use super::error::{GraphError, GraphResult};

/// A vertex of the graph, identified by a caller-supplied string.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    /// Attributes associated with this node.
    pub attributes: AttributeCollection,
    /// IDs of the edges this node participates in.
    edges: BTreeSet<String>,
}

impl Node {
    /// Create a node with empty attributes and no incident edges.
    pub fn new(id: impl Into<String>) -> GraphResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(GraphError::EmptyNodeId);
        }
        Ok(Self {
            id,
            attributes: AttributeCollection::new(),
            edges: BTreeSet::new(),
        })
    }

    /// The node's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// IDs of incident edges, ascending.
    pub fn edge_ids(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(String::as_str)
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn attach(&mut self, edge_id: &str) {
        self.edges.insert(edge_id.to_string());
    }

    pub(crate) fn detach(&mut self, edge_id: &str) {
        self.edges.remove(edge_id);
    }

    pub(crate) fn take_edges(&mut self) -> BTreeSet<String> {
        std::mem::take(&mut self.edges)
    }

    pub(crate) fn restore_edges(&mut self, edges: BTreeSet<String>) {
        self.edges = edges;
    }
}
