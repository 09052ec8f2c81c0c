//! Phase 1 tests: attribute store + graph data model.

use attr_graph::graph::{Graph, GraphBuilder, GraphType};
use attr_graph::types::attr::{AttrValue, AttributeCollection, MergePolicy};
use attr_graph::types::edge::Edge;
use attr_graph::types::error::GraphError;
use attr_graph::types::node::Node;

// ==================== Helper ====================

fn attrs(pairs: &[(&str, AttrValue)]) -> AttributeCollection {
    pairs.iter().cloned().collect()
}

/// CLRS figure 22.1 undirected graph, edges named a..g.
fn five_node_graph() -> Graph {
    GraphBuilder::undirected()
        .nodes(["1", "2", "3", "4", "5"])
        .edge_with(attrs(&[("id", "a".into()), ("style", "dashed".into())]), &["1", "2"])
        .edge_with(attrs(&[("id", "b".into())]), &["1", "5"])
        .edge_with(attrs(&[("id", "c".into())]), &["2", "5"])
        .edge_with(attrs(&[("id", "d".into())]), &["2", "3"])
        .edge_with(attrs(&[("id", "e".into())]), &["2", "4"])
        .edge_with(attrs(&[("id", "f".into())]), &["3", "4"])
        .edge_with(attrs(&[("id", "g".into())]), &["4", "5"])
        .build()
        .unwrap()
}

// ==================== Attribute Store Tests ====================

#[test]
fn test_attribute_set_get_overwrite() {
    let mut a = AttributeCollection::new();
    assert_eq!(a.count(), 0);
    assert!(a.get("color").is_none());

    a.set("color", "green");
    assert_eq!(a.get("color"), Some(&AttrValue::Text("green".into())));

    a.set("color", 7);
    assert_eq!(a.get("color"), Some(&AttrValue::Int(7)));
    assert_eq!(a.count(), 1);
}

#[test]
fn test_attribute_null_is_present() {
    let mut a = AttributeCollection::new();
    a.set("note", AttrValue::Null);

    assert!(a.contains("note"));
    assert_eq!(a.get("note"), Some(&AttrValue::Null));
    assert!(!a.contains("missing"));
    assert_eq!(a.get("missing"), None);
}

#[test]
fn test_attribute_remove_is_noop_when_absent() {
    let mut a = AttributeCollection::new();
    a.set("x", 1.5);
    assert_eq!(a.remove("y"), None);
    assert_eq!(a.count(), 1);
    assert_eq!(a.remove("x"), Some(AttrValue::Float(1.5)));
    assert!(a.is_empty());
}

#[test]
fn test_attribute_merge_policies() {
    let mut base = attrs(&[("a", 1.into()), ("b", "keep".into())]);
    let incoming = attrs(&[("b", "new".into()), ("c", true.into())]);

    let mut kept = base.clone();
    kept.merge(&incoming, MergePolicy::KeepExisting);
    assert_eq!(kept.get("b"), Some(&AttrValue::Text("keep".into())));
    assert_eq!(kept.get("c"), Some(&AttrValue::Bool(true)));
    assert_eq!(kept.count(), 3);

    base.merge(&incoming, MergePolicy::Override);
    assert_eq!(base.get("b"), Some(&AttrValue::Text("new".into())));
    assert_eq!(base.get("a"), Some(&AttrValue::Int(1)));
    assert_eq!(base.count(), 3);
}

#[test]
fn test_attr_value_accessors() {
    assert_eq!(AttrValue::Int(3).as_float(), Some(3.0));
    assert_eq!(AttrValue::Text("x".into()).as_int(), None);
    assert_eq!(AttrValue::from(None::<i64>), AttrValue::Null);
    assert_eq!(AttrValue::from(Some("y")), AttrValue::Text("y".into()));
    assert_eq!(AttrValue::Bool(false).type_name(), "bool");
    assert_eq!(AttrValue::Float(0.5).to_string(), "0.5");
}

// ==================== Node / Edge Tests ====================

#[test]
fn test_node_empty_id_rejected() {
    assert!(matches!(Node::new(""), Err(GraphError::EmptyNodeId)));

    let mut graph = Graph::new(GraphType::Undirected);
    assert!(matches!(graph.add_node(""), Err(GraphError::EmptyNodeId)));
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn test_edge_id_synthesized_in_declaration_order() {
    let edge = Edge::new(AttributeCollection::new(), &["b", "a", "c"]).unwrap();
    assert_eq!(edge.id(), "b-a-c");
    assert!(edge.is_hyper());
    assert_eq!(edge.node_ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn test_edge_explicit_id_is_stripped() {
    let edge = Edge::new(attrs(&[("id", "e1".into()), ("w", 2.into())]), &["a", "b"]).unwrap();
    assert_eq!(edge.id(), "e1");
    assert!(!edge.attributes.contains("id"));
    assert_eq!(edge.attributes.count(), 1);
}

#[test]
fn test_edge_invalid_id() {
    let empty = Edge::new(attrs(&[("id", "".into())]), &["a", "b"]);
    assert!(matches!(empty, Err(GraphError::InvalidEdgeId)));

    let numeric = Edge::new(attrs(&[("id", 4.into())]), &["a", "b"]);
    assert!(matches!(numeric, Err(GraphError::InvalidEdgeId)));
    assert_eq!(
        GraphError::InvalidEdgeId.to_string(),
        "Invalid edge id"
    );
}

#[test]
fn test_edge_insufficient_endpoints_not_registered() {
    let mut graph = GraphBuilder::undirected().nodes(["1", "2"]).build().unwrap();

    let single = graph.add_edge(AttributeCollection::new(), &["1"]);
    assert!(matches!(single, Err(GraphError::InsufficientEndpoints(1))));

    let none = graph.add_edge(AttributeCollection::new(), &[] as &[&str]);
    assert!(matches!(none, Err(GraphError::InsufficientEndpoints(0))));

    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node("1").unwrap().degree(), 0);
    assert_eq!(graph.node("2").unwrap().degree(), 0);
}

#[test]
fn test_edge_unknown_endpoint_rejected() {
    let mut graph = GraphBuilder::undirected().node("1").build().unwrap();
    let result = graph.add_edge(AttributeCollection::new(), &["1", "ghost"]);
    match result {
        Err(GraphError::UnknownNode(id)) => assert_eq!(id, "ghost"),
        other => panic!("Expected UnknownNode error, got {:?}", other),
    }
    assert_eq!(graph.node("1").unwrap().degree(), 0);
}

#[test]
fn test_add_edge_registers_incidence() {
    let graph = five_node_graph();
    assert_eq!(graph.edge_count(), 7);

    let two: Vec<&str> = graph.node("2").unwrap().edge_ids().collect();
    assert_eq!(two, vec!["a", "c", "d", "e"]);
    assert_eq!(
        graph.edge("a").unwrap().attributes.get("style"),
        Some(&AttrValue::Text("dashed".into()))
    );
}

#[test]
fn test_redefined_edge_detaches_previous_endpoints() {
    let mut graph = GraphBuilder::undirected()
        .nodes(["a", "b", "c"])
        .edge_with(attrs(&[("id", "e".into())]), &["a", "b"])
        .build()
        .unwrap();

    graph
        .add_edge(attrs(&[("id", "e".into())]), &["b", "c"])
        .unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node("a").unwrap().degree(), 0);
    assert!(graph.adjacent("a").unwrap().is_empty());
    assert!(graph.adjacent("c").unwrap().contains("b"));
}

#[test]
fn test_redefined_node_keeps_edges() {
    let mut graph = GraphBuilder::undirected()
        .nodes(["a", "b"])
        .edge(&["a", "b"])
        .build()
        .unwrap();
    graph.node_mut("a").unwrap().attributes.set("x", 1);

    graph.add_node("a").unwrap();

    let a = graph.node("a").unwrap();
    assert!(a.attributes.is_empty());
    assert_eq!(a.degree(), 1);
    assert!(graph.has_connection("a", "b").unwrap());
}

// ==================== Query Tests ====================

#[test]
fn test_has_connection_undirected() {
    let graph = five_node_graph();

    let expected = [
        ("1", "1", true),
        ("1", "2", true),
        ("2", "1", true),
        ("1", "3", false),
        ("3", "1", false),
        ("1", "4", false),
        ("1", "5", true),
        ("2", "3", true),
        ("2", "4", true),
        ("2", "5", true),
        ("3", "4", true),
        ("3", "5", false),
        ("5", "3", false),
        ("4", "5", true),
        ("5", "5", true),
    ];
    for (source, target, connected) in expected {
        assert_eq!(
            graph.has_connection(source, target).unwrap(),
            connected,
            "{}-{}",
            source,
            target
        );
    }
}

#[test]
fn test_has_connection_isolated_self() {
    let graph = GraphBuilder::undirected().node("alone").build().unwrap();
    assert!(!graph.has_connection("alone", "alone").unwrap());
}

#[test]
fn test_has_connection_unsupported_type() {
    let graph = Graph::new(GraphType::Directed);
    match graph.has_connection("first", "second") {
        Err(GraphError::UnsupportedGraphType(t)) => assert_eq!(t, GraphType::Directed),
        other => panic!("Expected UnsupportedGraphType, got {:?}", other),
    }
    assert_eq!(
        GraphError::UnsupportedGraphType(GraphType::Directed).to_string(),
        "Unsupported graph type: directed"
    );
}

#[test]
fn test_adjacent_excludes_self_and_dedups() {
    let graph = GraphBuilder::undirected()
        .nodes(["a", "b", "c", "d"])
        .edge(&["a", "b", "c"])
        .edge(&["a", "b"])
        .edge(&["c", "d"])
        .build()
        .unwrap();

    let adj: Vec<&str> = graph.adjacent("a").unwrap().into_iter().collect();
    assert_eq!(adj, vec!["b", "c"]);

    let adj_c: Vec<&str> = graph.adjacent("c").unwrap().into_iter().collect();
    assert_eq!(adj_c, vec!["a", "b", "d"]);
}

#[test]
fn test_adjacent_self_loop() {
    let graph = GraphBuilder::undirected()
        .nodes(["a", "b"])
        .edge(&["a", "a"])
        .build()
        .unwrap();

    let edge = graph.edge("a-a").unwrap();
    assert_eq!(edge.node_ids().count(), 1);
    assert_eq!(edge.declared_endpoints().len(), 2);
    assert!(graph.adjacent("a").unwrap().is_empty());
    assert!(graph.has_connection("a", "a").unwrap());
    assert!(!graph.has_connection("a", "b").unwrap());
}

#[test]
fn test_adjacent_unknown_node() {
    let graph = five_node_graph();
    assert!(matches!(
        graph.adjacent("nope"),
        Err(GraphError::NodeNotFound(_))
    ));
}

#[test]
fn test_directed_graph_type_roundtrip() {
    for t in [GraphType::Directed, GraphType::Undirected] {
        assert_eq!(GraphType::from_name(t.name()), Some(t));
    }
    assert_eq!(GraphType::from_name("foo"), None);
    assert_eq!(GraphType::from_name("Directed"), None);
    assert_eq!(GraphType::from_name("UNDIRECTED"), None);
}
