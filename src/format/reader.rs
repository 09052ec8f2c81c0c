//! Reads JSON graph descriptions into an in-memory graph.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::graph::{Graph, GraphType};
use crate::types::error::{GraphError, GraphResult};
use crate::types::{AttrValue, AttributeCollection};

/// On-disk shape of a graph description.
#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(rename = "type", default)]
    graph_type: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
    #[serde(default)]
    nodes: Vec<Map<String, Value>>,
    #[serde(default)]
    edges: Vec<Vec<Value>>,
}

/// Reader for JSON graph descriptions.
pub struct GraphReader;

impl GraphReader {
    /// Read a JSON file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let data = std::fs::read_to_string(path)?;
        Self::read_from_str(&data)
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<Graph> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::read_from_str(&data)
    }

    /// Parse a JSON document into a Graph.
    ///
    /// Graph attributes are loaded first, then nodes, then edges, each through
    /// the regular construction calls.
    pub fn read_from_str(data: &str) -> GraphResult<Graph> {
        let document: GraphDocument = serde_json::from_str(data)?;

        let graph_type = match document.graph_type.as_deref() {
            None => GraphType::Undirected,
            Some(name) => GraphType::from_name(name)
                .ok_or_else(|| GraphError::UnknownGraphType(name.to_string()))?,
        };
        let mut graph = Graph::new(graph_type);

        for (name, value) in &document.attributes {
            graph.attributes_mut().set(name.as_str(), attr_from_json(name, value)?);
        }

        for entry in &document.nodes {
            let id = match entry.get("id") {
                Some(Value::String(id)) => id,
                Some(other) => return Err(GraphError::InvalidNodeId(other.to_string())),
                None => {
                    log::warn!("Skipping node entry without id");
                    continue;
                }
            };
            let node = graph.add_node(id.as_str())?;
            for (name, value) in entry.iter().filter(|(name, _)| name.as_str() != "id") {
                node.attributes.set(name.as_str(), attr_from_json(name, value)?);
            }
        }

        for entry in &document.edges {
            let mut node_ids: Vec<&str> = Vec::new();
            let mut attributes = AttributeCollection::new();
            for item in entry {
                match item {
                    Value::String(id) => node_ids.push(id),
                    Value::Object(map) => {
                        for (name, value) in map {
                            attributes.set(name.as_str(), attr_from_json(name, value)?);
                        }
                    }
                    other => log::warn!("Ignoring edge item {}", other),
                }
            }
            graph.add_edge(attributes, &node_ids)?;
        }

        log::debug!(
            "Loaded {} graph with {} node(s) and {} edge(s)",
            graph.graph_type(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Map a JSON scalar onto an attribute value.
pub fn attr_from_json(name: &str, value: &Value) -> GraphResult<AttrValue> {
    let invalid = |kind| GraphError::InvalidAttributeValue {
        name: name.to_string(),
        kind,
    };
    match value {
        Value::Null => Ok(AttrValue::Null),
        Value::Bool(b) => Ok(AttrValue::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(AttrValue::Int)
            .or_else(|| n.as_f64().map(AttrValue::Float))
            .ok_or_else(|| invalid("number")),
        Value::String(s) => Ok(AttrValue::Text(s.clone())),
        Value::Array(_) => Err(invalid("array")),
        Value::Object(_) => Err(invalid("object")),
    }
}
