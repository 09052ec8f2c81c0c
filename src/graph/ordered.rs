//! Node iteration ordered by an attribute value.

use std::cmp::Ordering;

use crate::types::{AttrValue, GraphError, Node};

use super::Graph;

/// An attribute value that can be ordered.
///
/// Only text, integer and float values qualify. Integers and floats form one
/// numeric kind and compare by value. Text is never compared with numbers by
/// [`iter_nodes`]; the ordering between kinds exists so the type is totally
/// ordered.
#[derive(Debug, Clone, Copy)]
pub enum OrderKey<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
}

impl<'a> OrderKey<'a> {
    /// Borrow an ordering key out of an attribute value.
    pub fn from_value(value: &'a AttrValue) -> Option<Self> {
        match value {
            AttrValue::Text(s) => Some(Self::Text(s)),
            AttrValue::Int(i) => Some(Self::Int(*i)),
            AttrValue::Float(f) => Some(Self::Float(*f)),
            AttrValue::Null | AttrValue::Bool(_) => None,
        }
    }

    /// Name of the key kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) | Self::Float(_) => "number",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) | Self::Float(_) => 0,
            Self::Text(_) => 1,
        }
    }
}

impl PartialEq for OrderKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey<'_> {}

impl PartialOrd for OrderKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Visit every node carrying `attribute` in ascending order of its value.
///
/// Nodes without the attribute are skipped. Nodes with equal values are
/// visited consecutively, in no particular order among themselves. All
/// values must share one orderable kind; this is checked before the first
/// visit.
///
/// `visit` returns whether to continue. An error from `visit` stops the
/// iteration and is returned as is; `Ok(false)` stops it cleanly.
pub fn iter_nodes<F, E>(graph: &Graph, attribute: &str, visit: Option<F>) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<bool, E>,
    E: From<GraphError>,
{
    let mut visit = visit.ok_or(GraphError::MissingIterationFunction)?;

    let mut keyed: Vec<(OrderKey<'_>, &Node)> = Vec::new();
    for node in graph.nodes() {
        let Some(value) = node.attributes.get(attribute) else {
            continue;
        };
        let key = OrderKey::from_value(value).ok_or_else(|| {
            GraphError::NonOrderableAttribute {
                attribute: attribute.to_string(),
                detail: format!("node {} holds a {} value", node.id(), value.type_name()),
            }
        })?;
        if let Some((first, first_node)) = keyed.first() {
            if first.kind() != key.kind() {
                return Err(GraphError::NonOrderableAttribute {
                    attribute: attribute.to_string(),
                    detail: format!(
                        "mixed {} (node {}) and {} (node {}) values",
                        first.kind(),
                        first_node.id(),
                        key.kind(),
                        node.id()
                    ),
                }
                .into());
            }
        }
        keyed.push((key, node));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    for (_, node) in keyed {
        if !visit(node)? {
            break;
        }
    }
    Ok(())
}
