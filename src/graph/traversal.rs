//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, VecDeque};

use crate::types::{GraphError, GraphResult, DEFAULT_DISTANCE_ATTRIBUTE, INFINITY_DISTANCE};

use super::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Undiscovered,
    Discovered,
    Visited,
}

/// Breadth-first search tree produced by [`bfs`].
#[derive(Debug, Clone, Default)]
pub struct BfsTree {
    order: Vec<String>,
    distances: HashMap<String, i64>,
    predecessors: HashMap<String, String>,
}

impl BfsTree {
    /// Reached nodes in discovery order, root first.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Number of reached nodes, root included.
    pub fn reached(&self) -> usize {
        self.order.len()
    }

    /// Hop distance from the root, `None` if the node was not reached.
    pub fn distance(&self, id: &str) -> Option<i64> {
        self.distances.get(id).copied()
    }

    /// The node that discovered `id`.
    pub fn predecessor(&self, id: &str) -> Option<&str> {
        self.predecessors.get(id).map(String::as_str)
    }

    /// Shortest hop path from the root to `target`, both ends included.
    pub fn path_to(&self, target: &str) -> Option<Vec<&str>> {
        let (key, _) = self.distances.get_key_value(target)?;
        let mut path = vec![key.as_str()];
        let mut current = key.as_str();
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// BFS from `root`, writing each node's hop distance into
/// `distance_attribute`.
///
/// Unreached nodes get [`INFINITY_DISTANCE`]. Incident edges are followed
/// both ways regardless of the graph type. Traversal state lives in the
/// returned tree; no other attribute is touched.
pub fn bfs(graph: &mut Graph, root: &str, distance_attribute: &str) -> GraphResult<BfsTree> {
    if graph.node_count() == 0 {
        return Ok(BfsTree::default());
    }
    if graph.node(root).is_none() {
        return Err(GraphError::NodeNotFound(root.to_string()));
    }

    let tree = explore(graph, root)?;

    for node in graph.nodes_mut() {
        let distance = tree.distance(node.id()).unwrap_or(INFINITY_DISTANCE);
        node.attributes.set(distance_attribute, distance);
    }

    log::debug!(
        "BFS from {} reached {} of {} node(s)",
        root,
        tree.reached(),
        graph.node_count()
    );
    Ok(tree)
}

/// [`bfs`] writing distances into [`DEFAULT_DISTANCE_ATTRIBUTE`].
pub fn bfs_default(graph: &mut Graph, root: &str) -> GraphResult<BfsTree> {
    bfs(graph, root, DEFAULT_DISTANCE_ATTRIBUTE)
}

fn explore(graph: &Graph, root: &str) -> GraphResult<BfsTree> {
    let mut colors: HashMap<&str, Color> = graph
        .nodes()
        .map(|node| (node.id(), Color::Undiscovered))
        .collect();
    let mut distances: HashMap<&str, i64> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    colors.insert(root, Color::Discovered);
    distances.insert(root, 0);
    order.push(root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        let Some(&distance) = distances.get(current) else {
            continue;
        };
        let next = distance + 1;

        for neighbor in graph.adjacent(current)? {
            if colors.get(neighbor) == Some(&Color::Undiscovered) {
                colors.insert(neighbor, Color::Discovered);
                distances.insert(neighbor, next);
                predecessors.insert(neighbor, current);
                order.push(neighbor);
                queue.push_back(neighbor);
            }
        }

        colors.insert(current, Color::Visited);
    }

    Ok(BfsTree {
        order: order.into_iter().map(str::to_string).collect(),
        distances: distances
            .into_iter()
            .map(|(id, d)| (id.to_string(), d))
            .collect(),
        predecessors: predecessors
            .into_iter()
            .map(|(id, p)| (id.to_string(), p.to_string()))
            .collect(),
    })
}
