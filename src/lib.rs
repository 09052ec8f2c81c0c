//! attr-graph — in-memory attribute-tagged graphs.
//!
//! Nodes, edges (including hyper-edges) and the graph itself each carry a
//! dynamically typed attribute bag. Graphs are built from JSON descriptions or
//! programmatically, searched breadth-first from a root, and replayed in
//! ascending order of any node attribute.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphWriter};
pub use graph::{
    bfs, bfs_default, iter_nodes, BfsTree, Graph, GraphBuilder, GraphType, OrderKey,
};
pub use types::{
    AttrValue, AttributeCollection, Edge, GraphError, GraphResult, MergePolicy, Node,
    DEFAULT_DISTANCE_ATTRIBUTE, EDGE_ID_ATTRIBUTE, EDGE_ID_SEPARATOR, INFINITY_DISTANCE,
};
