//! Tests for tree→graph materialization and graph→tree reconstruction.
mod common;
use common::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use waza::prelude::*;

fn materialize_default(tree: &ActionNode) -> Graph {
    let mut ids = IdAllocator::new();
    materialize(tree, &mut ids, &LayoutConfig::default())
}

#[test]
fn test_materialize_simple_tree() {
    let graph = materialize_default(&create_simple_tree());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    // Pre-order: the root is created first.
    let types: Vec<_> = graph.nodes.iter().map(|n| n.node_type).collect();
    assert_eq!(
        types,
        vec![NodeType::Sequence, NodeType::Delay, NodeType::Sound]
    );
    assert_eq!(root_id(&graph), graph.nodes[0].id);

    let root = &graph.nodes[0];
    for edge in &graph.edges {
        assert_eq!(edge.source, root.id);
    }
}

#[test]
fn test_materialize_positions() {
    let graph = materialize_default(&create_combo_tree());
    let layout = LayoutConfig::default();

    let root = graph.node(&id_of(&graph, "Combo")).unwrap();
    assert_eq!(root.position, layout.anchor);

    // The i-th child of a container sits i spacings to the right, one row down.
    let impact = graph.node(&id_of(&graph, "Impact")).unwrap();
    assert_eq!(
        impact.position,
        Position::new(layout.anchor.x + layout.spacing_x, layout.anchor.y + layout.spacing_y)
    );

    // A Requirement's child sits directly below it.
    let finisher = graph.node(&id_of(&graph, "Finisher")).unwrap();
    let bleed = graph.node(&id_of(&graph, "Bleed")).unwrap();
    assert_eq!(bleed.position.x, finisher.position.x);
    assert_eq!(bleed.position.y, finisher.position.y + layout.gate_offset_y);
}

#[test]
fn test_materialize_emits_edge_for_requirement_child() {
    let graph = materialize_default(&create_combo_tree());
    let finisher = id_of(&graph, "Finisher");
    let bleed = id_of(&graph, "Bleed");
    let empty = id_of(&graph, "Empty");

    assert!(
        graph
            .edges
            .iter()
            .any(|e| e.source == finisher && e.target == bleed)
    );
    assert_eq!(graph.outgoing(&empty).count(), 0);

    // Every node but the root has exactly one parent.
    for node in graph.nodes.iter().skip(1) {
        let parents = graph.edges.iter().filter(|e| e.target == node.id).count();
        assert_eq!(parents, 1, "node '{}' should have one parent", node.id);
    }
    assert_eq!(graph.roots().count(), 1);
}

#[test]
fn test_materialize_copies_fields_without_children() {
    let graph = materialize_default(&create_combo_tree());
    let combo = graph.node(&id_of(&graph, "Combo")).unwrap();

    match &combo.data {
        NodeData::Sequence(c) => assert_eq!(c.loop_count, 2),
        other => panic!("Expected Sequence data, got {:?}", other),
    }
    let value = serde_json::to_value(&combo.data).unwrap();
    assert!(value.get("children").is_none());
    assert_eq!(value["loop"], 2);
}

#[test]
fn test_round_trip_simple_tree() {
    let tree = create_simple_tree();
    let graph = materialize_default(&tree);

    let rebuilt = reconstruct(&graph).expect("graph has a root");
    assert_eq!(rebuilt, tree);
    assert_eq!(
        root_child_types(&rebuilt),
        vec![NodeType::Delay, NodeType::Sound]
    );
}

#[test]
fn test_round_trip_combo_tree() {
    let tree = create_combo_tree();
    let rebuilt = reconstruct(&materialize_default(&tree)).unwrap();
    assert_eq!(rebuilt, tree);
}

#[test]
fn test_round_trip_random_trees() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let tree = random_tree(&mut rng, 5);
        let rebuilt = reconstruct(&materialize_default(&tree)).unwrap();
        assert_eq!(rebuilt, tree);
    }
}

#[test]
fn test_round_trip_through_json() {
    let json = r#"{
        "type": "Sequence",
        "name": "Root",
        "loop": 1,
        "children": [
            { "type": "Delay", "name": "Wait", "delay": 1.0 },
            { "type": "Sound", "name": "Clang", "key": "hit1", "volume": 1.0 }
        ]
    }"#;
    let tree = ActionNode::from_json(json).unwrap();
    let graph_json = materialize_default(&tree).to_json_pretty().unwrap();

    let graph = Graph::from_json(&graph_json).unwrap();
    let rebuilt = reconstruct(&graph).unwrap();
    assert_eq!(rebuilt, tree);
}

#[test]
fn test_reconstruct_empty_graph() {
    assert!(reconstruct(&Graph::new()).is_none());
}

#[test]
fn test_reconstruct_without_root() {
    // Two nodes pointing at each other: nobody is parentless.
    let mut graph = Graph::new();
    graph.nodes.push(FlowNode::new(
        NodeId::from("a"),
        Position::default(),
        NodeType::Sequence.default_data(),
    ));
    graph.nodes.push(FlowNode::new(
        NodeId::from("b"),
        Position::default(),
        NodeType::Sequence.default_data(),
    ));
    graph
        .edges
        .push(FlowEdge::new(EdgeId::from("ab"), "a".into(), "b".into()));
    graph
        .edges
        .push(FlowEdge::new(EdgeId::from("ba"), "b".into(), "a".into()));

    assert!(reconstruct(&graph).is_none());
}

#[test]
fn test_reconstruct_orders_children_by_x() {
    let mut graph = Graph::new();
    graph.nodes.push(FlowNode::new(
        "root".into(),
        Position::new(0.0, 0.0),
        NodeType::Sequence.default_data(),
    ));
    graph.nodes.push(FlowNode::new(
        "late".into(),
        Position::new(500.0, 100.0),
        NodeType::Sound.default_data(),
    ));
    graph.nodes.push(FlowNode::new(
        "early".into(),
        Position::new(-300.0, 100.0),
        NodeType::Delay.default_data(),
    ));
    graph
        .edges
        .push(FlowEdge::new("e1".into(), "root".into(), "late".into()));
    graph
        .edges
        .push(FlowEdge::new("e2".into(), "root".into(), "early".into()));

    let tree = reconstruct(&graph).unwrap();
    assert_eq!(
        root_child_types(&tree),
        vec![NodeType::Delay, NodeType::Sound]
    );
}

#[test]
fn test_reconstruct_picks_earliest_root() {
    let mut ids = IdAllocator::new();
    let layout = LayoutConfig::default();
    let mut graph = Graph::new();

    let first = graph
        .add_node(NodeType::Parallel, None, &mut ids, &layout)
        .unwrap();
    graph
        .add_node(NodeType::Sequence, None, &mut ids, &layout)
        .unwrap();
    graph
        .add_node(NodeType::Delay, Some(&first), &mut ids, &layout)
        .unwrap();

    let tree = reconstruct(&graph).unwrap();
    assert_eq!(tree.node_type(), NodeType::Parallel);
    assert_eq!(root_child_types(&tree), vec![NodeType::Delay]);
}

#[test]
fn test_reconstruct_ignores_leaf_edges() {
    let mut ids = IdAllocator::new();
    let layout = LayoutConfig::default();
    let mut graph = materialize(&create_simple_tree(), &mut ids, &layout);

    let delay = graph
        .nodes
        .iter()
        .find(|n| n.node_type == NodeType::Delay)
        .unwrap()
        .id
        .clone();
    graph
        .add_node(NodeType::Hit, Some(&delay), &mut ids, &layout)
        .unwrap();

    let tree = reconstruct(&graph).unwrap();
    assert_eq!(tree, create_simple_tree());
}

#[test]
fn test_reconstruct_terminates_on_cycle() {
    let mut ids = IdAllocator::new();
    let layout = LayoutConfig::default();
    let mut graph = Graph::new();

    let root = graph
        .add_node(NodeType::Sequence, None, &mut ids, &layout)
        .unwrap();
    let outer = graph
        .add_node(NodeType::Sequence, Some(&root), &mut ids, &layout)
        .unwrap();
    let inner = graph
        .add_node(NodeType::Parallel, Some(&outer), &mut ids, &layout)
        .unwrap();
    // No cycle detection on connect: inner → outer closes a loop.
    graph.connect(&inner, &outer, &mut ids).unwrap();

    let tree = reconstruct(&graph).unwrap();
    assert_eq!(tree.node_count(), 3);
    let outer_node = &tree.children()[0];
    assert_eq!(outer_node.node_type(), NodeType::Sequence);
    assert_eq!(outer_node.children()[0].node_type(), NodeType::Parallel);
    assert!(outer_node.children()[0].children().is_empty());
}
