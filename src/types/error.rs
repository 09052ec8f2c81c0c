//! Error types for the attr-graph library.

use thiserror::Error;

use crate::graph::GraphType;

/// All errors that can occur in the attr-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node identifiers must be non-empty.
    #[error("Invalid identifier: node id must be non-empty")]
    EmptyNodeId,

    /// An explicit edge id was empty or not text.
    #[error("Invalid edge id")]
    InvalidEdgeId,

    /// Edges connect at least two nodes.
    #[error("Insufficient endpoints: edge declares {0} node(s), at least 2 required")]
    InsufficientEndpoints(usize),

    /// Edge endpoint does not resolve to a node in the graph.
    #[error("Edge references unknown node: {0}")]
    UnknownNode(String),

    /// Node not found by ID.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// Connectivity queries are only defined for some graph types.
    #[error("Unsupported graph type: {0}")]
    UnsupportedGraphType(GraphType),

    /// Ordered iteration was requested without a visit function.
    #[error("Missing iteration function")]
    MissingIterationFunction,

    /// Attribute values cannot be ordered.
    #[error("Non-orderable attribute type for '{attribute}': {detail}; requires text, integer or float")]
    NonOrderableAttribute { attribute: String, detail: String },

    /// Graph description declares a type we do not know.
    #[error("Unknown graph type: {0}")]
    UnknownGraphType(String),

    /// Graph description carries a node id that is not text.
    #[error("Invalid node id: {0}")]
    InvalidNodeId(String),

    /// Graph description carries an attribute value with no scalar mapping.
    #[error("Invalid value for attribute '{name}': {kind} is not a scalar")]
    InvalidAttributeValue { name: String, kind: &'static str },

    /// Attribute holds a float that JSON cannot represent.
    #[error("Cannot export attribute '{name}': {value} is not a finite number")]
    NonFiniteValue { name: String, value: f64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
