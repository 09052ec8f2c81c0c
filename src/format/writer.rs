//! Writes in-memory graphs as JSON graph descriptions.

use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::graph::Graph;
use crate::types::error::{GraphError, GraphResult};
use crate::types::{AttrValue, AttributeCollection, EDGE_ID_ATTRIBUTE};

/// Writer for JSON graph descriptions.
///
/// Every edge is written with an explicit `id`, so reading the output back
/// reproduces the same edge IDs. A node attribute named `id` is dropped in
/// favour of the node's own ID. Non-finite floats cannot be written.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphWriter {
    pretty: bool,
}

impl GraphWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write a Graph to a JSON file.
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a Graph to any writer.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        let document = Self::to_value(graph)?;
        if self.pretty {
            serde_json::to_writer_pretty(writer, &document)?;
        } else {
            serde_json::to_writer(writer, &document)?;
        }
        Ok(())
    }

    /// Render a Graph as a JSON string.
    pub fn write_to_string(&self, graph: &Graph) -> GraphResult<String> {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Build the JSON document for a Graph.
    pub fn to_value(graph: &Graph) -> GraphResult<Value> {
        let nodes = graph
            .nodes()
            .map(|node| -> GraphResult<Value> {
                let mut entry = attributes_to_map(&node.attributes)?;
                let node_id = Value::String(node.id().to_string());
                if let Some(shadowed) = entry.insert("id".to_string(), node_id) {
                    log::warn!(
                        "Node {} carries a reserved 'id' attribute ({}), not exported",
                        node.id(),
                        shadowed
                    );
                }
                Ok(Value::Object(entry))
            })
            .collect::<GraphResult<Vec<Value>>>()?;

        let edges = graph
            .edges()
            .map(|edge| -> GraphResult<Value> {
                let mut items: Vec<Value> = edge
                    .declared_endpoints()
                    .iter()
                    .map(|id| Value::String(id.clone()))
                    .collect();
                let mut attributes = attributes_to_map(&edge.attributes)?;
                attributes.insert(
                    EDGE_ID_ATTRIBUTE.to_string(),
                    Value::String(edge.id().to_string()),
                );
                items.push(Value::Object(attributes));
                Ok(Value::Array(items))
            })
            .collect::<GraphResult<Vec<Value>>>()?;

        Ok(serde_json::json!({
            "type": graph.graph_type().name(),
            "attributes": attributes_to_map(graph.attributes())?,
            "nodes": nodes,
            "edges": edges,
        }))
    }
}

fn attributes_to_map(attributes: &AttributeCollection) -> GraphResult<Map<String, Value>> {
    attributes
        .iter()
        .map(|(name, value)| -> GraphResult<(String, Value)> {
            if let AttrValue::Float(f) = value {
                if !f.is_finite() {
                    return Err(GraphError::NonFiniteValue {
                        name: name.clone(),
                        value: *f,
                    });
                }
            }
            Ok((name.clone(), serde_json::to_value(value)?))
        })
        .collect()
}
