//! All data types for the attr-graph library.

pub mod attr;
pub mod edge;
pub mod error;
pub mod node;

pub use attr::{AttrValue, AttributeCollection, MergePolicy};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Distance written by BFS for nodes it never reached.
pub const INFINITY_DISTANCE: i64 = -1;

/// Joins endpoint IDs when an edge has no explicit ID.
pub const EDGE_ID_SEPARATOR: &str = "-";

/// Reserved edge attribute carrying an explicit edge ID.
pub const EDGE_ID_ATTRIBUTE: &str = "id";

/// Distance attribute used by [`bfs_default`](crate::graph::bfs_default).
pub const DEFAULT_DISTANCE_ATTRIBUTE: &str = "d";
