//! Fluent API for building Graph instances.

use crate::types::{AttrValue, AttributeCollection, GraphResult, MergePolicy};

use super::{Graph, GraphType};

enum Step {
    Node {
        id: String,
        attributes: AttributeCollection,
    },
    Edge {
        attributes: AttributeCollection,
        node_ids: Vec<String>,
    },
}

/// Fluent builder for constructing a Graph.
///
/// Steps are replayed through [`Graph::add_node`] and [`Graph::add_edge`] in
/// the order they were recorded, so the same validation applies.
pub struct GraphBuilder {
    graph_type: GraphType,
    attributes: AttributeCollection,
    steps: Vec<Step>,
}

impl GraphBuilder {
    /// Create a builder for a graph of the given type.
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            attributes: AttributeCollection::new(),
            steps: Vec::new(),
        }
    }

    /// Create a builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphType::Undirected)
    }

    /// Set a graph-level attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Add a node without attributes.
    pub fn node(self, id: impl Into<String>) -> Self {
        self.node_with(id, AttributeCollection::new())
    }

    /// Add several nodes without attributes.
    pub fn nodes<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self = self.node(id);
        }
        self
    }

    /// Add a node with attributes.
    pub fn node_with(mut self, id: impl Into<String>, attributes: AttributeCollection) -> Self {
        self.steps.push(Step::Node {
            id: id.into(),
            attributes,
        });
        self
    }

    /// Add an edge without attributes.
    pub fn edge(self, node_ids: &[&str]) -> Self {
        self.edge_with(AttributeCollection::new(), node_ids)
    }

    /// Add an edge with attributes (an `id` entry names the edge).
    pub fn edge_with(mut self, attributes: AttributeCollection, node_ids: &[&str]) -> Self {
        self.steps.push(Step::Edge {
            attributes,
            node_ids: node_ids.iter().map(|id| id.to_string()).collect(),
        });
        self
    }

    /// Build the final Graph, stopping at the first failing step.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.graph_type);
        graph.attributes_mut().merge(&self.attributes, MergePolicy::Override);

        for step in self.steps {
            match step {
                Step::Node { id, attributes } => {
                    let node = graph.add_node(id)?;
                    node.attributes.merge(&attributes, MergePolicy::Override);
                }
                Step::Edge {
                    attributes,
                    node_ids,
                } => {
                    graph.add_edge(attributes, &node_ids)?;
                }
            }
        }

        Ok(graph)
    }
}
