use trailmap::{
    Direction, LayoutNode, StepEdge, StepNode, layout_elements, layout_roadmap,
};

fn step(id: &str) -> StepNode {
    StepNode {
        id: id.to_string(),
        label: format!("Step {id}"),
        description: format!("Learn about {id}"),
        resources: Vec::new(),
    }
}

fn edge(source: &str, target: &str) -> StepEdge {
    StepEdge {
        source: source.to_string(),
        target: target.to_string(),
    }
}

#[test]
fn every_input_node_comes_back_once_in_input_order() {
    let nodes = vec![step("c"), step("a"), step("b")];
    let out = layout_roadmap(&nodes, &[edge("a", "b")], Direction::TopToBottom);

    let ids: Vec<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn every_input_edge_comes_back_once_in_input_order() {
    let nodes = vec![step("a"), step("b")];
    let edges = vec![
        edge("a", "b"),
        edge("b", "ghost"),
        edge("a", "b"), // duplicate
        edge("a", "a"), // self-loop
    ];
    let out = layout_roadmap(&nodes, &edges, Direction::TopToBottom);

    assert_eq!(out.edges.len(), 4);
    let pairs: Vec<(&str, &str)> = out
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("a", "b"), ("b", "ghost"), ("a", "b"), ("a", "a")]
    );
}

#[test]
fn chain_ranks_stack_down_the_page() {
    // Three-step chain: a -> b -> c.
    let nodes = vec![step("a"), step("b"), step("c")];
    let edges = vec![edge("a", "b"), edge("b", "c")];
    let out = layout_roadmap(&nodes, &edges, Direction::TopToBottom);

    let pos: Vec<(f64, f64)> = out.nodes.iter().map(|n| (n.position.x, n.position.y)).collect();

    // Single node per rank: same x, strictly increasing y.
    assert_eq!(pos[0].0, pos[1].0);
    assert_eq!(pos[1].0, pos[2].0);
    assert!(pos[0].1 < pos[1].1 && pos[1].1 < pos[2].1);

    // 50-unit margin, 80-unit node, 80-unit rank gap.
    assert_eq!(pos[0], (50.0, 50.0));
    assert_eq!(pos[1], (50.0, 210.0));
    assert_eq!(pos[2], (50.0, 370.0));
}

#[test]
fn left_to_right_swaps_the_progression_axis() {
    let nodes = vec![step("a"), step("b")];
    let out = layout_roadmap(&nodes, &[edge("a", "b")], Direction::LeftToRight);

    let a = out.nodes[0].position;
    let b = out.nodes[1].position;
    assert_eq!(a.y, b.y);
    assert!(a.x < b.x);
    // 250-unit node plus 80-unit rank gap.
    assert_eq!(b.x - a.x, 330.0);
}

#[test]
fn edges_without_nodes_are_echoed_through() {
    // Empty node list, one dangling edge.
    let out = layout_roadmap(&[], &[edge("x", "y")], Direction::TopToBottom);

    assert!(out.nodes.is_empty());
    assert_eq!(out.edges.len(), 1);
    assert_eq!(out.edges[0].id, "exy");
    assert_eq!(out.edges[0].source, "x");
    assert_eq!(out.edges[0].target, "y");
    assert_eq!(out.edges[0].kind, "smoothstep");
    assert!(!out.edges[0].animated);
}

#[test]
fn self_loop_does_not_crash_and_keeps_the_node_at_the_top() {
    // Two nodes, edge a -> a.
    let nodes = vec![step("a"), step("b")];
    let out = layout_roadmap(&nodes, &[edge("a", "a")], Direction::TopToBottom);

    assert_eq!(out.nodes.len(), 2);
    assert_eq!(out.edges.len(), 1);
    assert_eq!(out.edges[0].id, "eaa");
    // Both nodes are unconstrained, so they share the top rank.
    assert_eq!(out.nodes[0].position.y, out.nodes[1].position.y);
}

#[test]
fn fan_out_children_share_a_rank_below_a_centered_root() {
    // One root, four children, no edges among the children.
    let nodes = vec![step("root"), step("c1"), step("c2"), step("c3"), step("c4")];
    let edges = vec![
        edge("root", "c1"),
        edge("root", "c2"),
        edge("root", "c3"),
        edge("root", "c4"),
    ];
    let out = layout_roadmap(&nodes, &edges, Direction::TopToBottom);

    let root = out.nodes[0].position;
    let children: Vec<_> = out.nodes[1..].iter().map(|n| n.position).collect();

    for c in &children {
        assert_eq!(c.y, children[0].y);
        assert!(root.y < c.y);
    }

    // Distinct slots, no overlap: adjacent nodes are node width + 50-unit gap apart.
    for pair in children.windows(2) {
        assert_eq!(pair[1].x - pair[0].x, 300.0);
    }

    // Root is centered over the fan-out.
    let mid = (children[0].x + children[3].x) / 2.0;
    assert_eq!(root.x, mid);
}

#[test]
fn payload_is_preserved_and_augmented() {
    let mut node = step("a");
    node.resources.push(trailmap::StepResource {
        title: "The Book".to_string(),
        url: "https://example.com/book".to_string(),
    });
    let out = layout_roadmap(&[node], &[], Direction::TopToBottom);

    let data = &out.nodes[0].data;
    assert_eq!(data.label, "Step a");
    assert_eq!(data.description, "Learn about a");
    assert_eq!(data.resources.len(), 1);
    assert_eq!(data.resources[0].title, "The Book");
    assert!(!data.completed);
    assert_eq!(out.nodes[0].kind, "roadmapNode");
}

#[test]
fn layout_is_deterministic_across_calls() {
    let nodes = vec![step("a"), step("b"), step("c"), step("d")];
    let edges = vec![
        edge("a", "b"),
        edge("a", "c"),
        edge("b", "d"),
        edge("c", "d"),
    ];

    let first = layout_roadmap(&nodes, &edges, Direction::TopToBottom);
    let second = layout_roadmap(&nodes, &edges, Direction::TopToBottom);
    assert_eq!(first, second);
}

#[test]
fn cyclic_input_degrades_instead_of_failing() {
    let nodes = vec![step("a"), step("b"), step("c")];
    let edges = vec![edge("a", "b"), edge("b", "c"), edge("c", "a")];
    let out = layout_roadmap(&nodes, &edges, Direction::TopToBottom);

    assert_eq!(out.nodes.len(), 3);
    assert_eq!(out.edges.len(), 3);
    // The cycle-closing edge is echoed in its original direction.
    assert_eq!(out.edges[2].source, "c");
    assert_eq!(out.edges[2].target, "a");
}

#[test]
fn engine_is_generic_over_the_payload() {
    #[derive(Debug, Clone, PartialEq)]
    struct Opaque(u32);

    let nodes = vec![
        LayoutNode {
            id: "a".to_string(),
            data: Opaque(1),
        },
        LayoutNode {
            id: "b".to_string(),
            data: Opaque(2),
        },
    ];
    let out = layout_elements(nodes, &[edge("a", "b")], Direction::TopToBottom);

    assert_eq!(out.nodes[0].data, Opaque(1));
    assert_eq!(out.nodes[1].data, Opaque(2));
    assert!(out.nodes[0].position.y < out.nodes[1].position.y);
}

#[test]
fn output_serializes_to_the_canvas_transport_shape() {
    let nodes = vec![step("a"), step("b")];
    let out = layout_roadmap(&nodes, &[edge("a", "b")], Direction::TopToBottom);

    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["nodes"][0]["type"], "roadmapNode");
    assert_eq!(value["nodes"][0]["data"]["completed"], false);
    assert_eq!(value["nodes"][0]["position"]["x"], 50.0);
    assert_eq!(value["edges"][0]["type"], "smoothstep");
    assert_eq!(value["edges"][0]["id"], "eab");
    assert_eq!(value["edges"][0]["animated"], false);
}
