//! Edges (and hyper-edges) between nodes.

use std::collections::BTreeSet;

use super::attr::{AttrValue, AttributeCollection};
use super::error::{GraphError, GraphResult};
use super::{EDGE_ID_ATTRIBUTE, EDGE_ID_SEPARATOR};

/// A connection between two or more nodes.
///
/// Endpoints are held by ID; the owning graph resolves them. An edge never
/// registers itself anywhere: [`Graph::add_edge`](crate::Graph::add_edge)
/// writes it into each endpoint's incidence set.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: String,
    /// Attributes associated with this edge. The reserved `id` is stripped at
    /// construction.
    pub attributes: AttributeCollection,
    declared: Vec<String>,
    nodes: BTreeSet<String>,
}

impl Edge {
    /// Build an edge over the given endpoint IDs, in declaration order.
    ///
    /// If `attributes` carries an `id` entry it must be non-empty text; it
    /// becomes the edge ID and is stripped. Otherwise the ID is the endpoint
    /// IDs joined with `-`.
    pub fn new<S: AsRef<str>>(
        mut attributes: AttributeCollection,
        endpoints: &[S],
    ) -> GraphResult<Self> {
        if endpoints.len() < 2 {
            return Err(GraphError::InsufficientEndpoints(endpoints.len()));
        }

        let id = match attributes.remove(EDGE_ID_ATTRIBUTE) {
            Some(AttrValue::Text(id)) if !id.is_empty() => id,
            Some(_) => return Err(GraphError::InvalidEdgeId),
            None => endpoints
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(EDGE_ID_SEPARATOR),
        };

        let declared: Vec<String> = endpoints.iter().map(|n| n.as_ref().to_string()).collect();
        Ok(Self {
            id,
            attributes,
            nodes: declared.iter().cloned().collect(),
            declared,
        })
    }

    /// The edge's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Distinct endpoint IDs, ascending.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Endpoint IDs as declared, duplicates included.
    pub fn declared_endpoints(&self) -> &[String] {
        &self.declared
    }

    /// Whether `node_id` is one of this edge's endpoints.
    pub fn connects(&self, node_id: &str) -> bool {
        self.nodes.contains(node_id)
    }

    /// More than two distinct endpoints.
    pub fn is_hyper(&self) -> bool {
        self.nodes.len() > 2
    }
}
