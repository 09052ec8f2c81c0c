//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod container;
pub mod ordered;
pub mod traversal;

pub use builder::GraphBuilder;
pub use container::{Graph, GraphType};
pub use ordered::{iter_nodes, OrderKey};
pub use traversal::{bfs, bfs_default, BfsTree};
