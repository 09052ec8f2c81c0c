//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::{bfs, iter_nodes};
use crate::types::{AttrValue, GraphResult, Node, INFINITY_DISTANCE};

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let hyper_edges = graph.edges().filter(|e| e.is_hyper()).count();
    let isolated = graph.nodes().filter(|n| n.degree() == 0).count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "type": graph.graph_type().name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "hyper_edges": hyper_edges,
            "isolated_nodes": isolated,
            "attributes": graph.attributes(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Type: {}", graph.graph_type());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("  Hyper-edges: {}", hyper_edges);
        println!("  Isolated nodes: {}", isolated);
        let mut attributes: Vec<_> = graph.attributes().iter().collect();
        attributes.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in attributes {
            println!("  {}: {}", name, value);
        }
    }
    Ok(())
}

/// Run breadth-first search and list nodes by distance.
pub fn cmd_bfs(path: &Path, root: &str, attribute: &str, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let tree = bfs(&mut graph, root, attribute)?;

    let mut rows: Vec<(String, i64, Option<String>)> = Vec::new();
    iter_nodes(
        &graph,
        attribute,
        Some(|node: &Node| -> GraphResult<bool> {
            let distance = node
                .attributes
                .get(attribute)
                .and_then(AttrValue::as_int)
                .unwrap_or(INFINITY_DISTANCE);
            rows.push((
                node.id().to_string(),
                distance,
                tree.predecessor(node.id()).map(str::to_string),
            ));
            Ok(true)
        }),
    )?;

    if json {
        let nodes: Vec<serde_json::Value> = rows
            .iter()
            .map(|(id, distance, predecessor)| {
                serde_json::json!({
                    "id": id,
                    "distance": distance,
                    "predecessor": predecessor,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&nodes).unwrap_or_default()
        );
    } else {
        println!(
            "BFS from {}: reached {} of {} nodes",
            root,
            tree.reached(),
            graph.node_count()
        );
        for (id, distance, predecessor) in &rows {
            match predecessor {
                Some(p) => println!("  {} {}={} (via {})", id, attribute, distance, p),
                None => println!("  {} {}={}", id, attribute, distance),
            }
        }
    }
    Ok(())
}

/// List nodes in ascending order of an attribute.
pub fn cmd_order(path: &Path, attribute: &str, limit: usize, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;

    let mut rows: Vec<(String, String)> = Vec::new();
    if limit > 0 {
        iter_nodes(
            &graph,
            attribute,
            Some(|node: &Node| -> GraphResult<bool> {
                let value = node
                    .attributes
                    .get(attribute)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                rows.push((node.id().to_string(), value));
                Ok(rows.len() < limit)
            }),
        )?;
    }

    if json {
        let nodes: Vec<serde_json::Value> = rows
            .iter()
            .map(|(id, value)| serde_json::json!({"id": id, attribute: value}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&nodes).unwrap_or_default()
        );
    } else if rows.is_empty() {
        println!("No nodes carry '{}'", attribute);
    } else {
        for (id, value) in &rows {
            println!("  {} {}={}", id, attribute, value);
        }
    }
    Ok(())
}

/// Check whether two nodes share an edge.
pub fn cmd_connected(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let connected = graph.has_connection(source, target)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target, "connected": connected})
        );
    } else if connected {
        println!("{} - {}: connected", source, target);
    } else {
        println!("{} - {}: not connected", source, target);
    }
    Ok(())
}

/// List the neighbours of a node.
pub fn cmd_adjacent(path: &Path, node_id: &str, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let adjacent = graph.adjacent(node_id)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"node": node_id, "adjacent": adjacent})
        );
    } else {
        println!("Node {} ({} neighbours)", node_id, adjacent.len());
        for id in adjacent {
            println!("  {}", id);
        }
    }
    Ok(())
}

/// Re-emit a graph file as normalized JSON.
pub fn cmd_export(path: &Path, pretty: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let writer = if pretty {
        GraphWriter::pretty()
    } else {
        GraphWriter::new()
    };
    println!("{}", writer.write_to_string(&graph)?);
    Ok(())
}
