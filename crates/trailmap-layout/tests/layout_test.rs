use trailmap_layout::graphlib::Graph;
use trailmap_layout::{Direction, EdgeLabel, GraphConfig, NodeLabel, layout};

use std::collections::BTreeMap;

fn roadmap_graph(direction: Direction) -> Graph<NodeLabel, EdgeLabel, GraphConfig> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphConfig> = Graph::new();
    g.set_graph(GraphConfig {
        direction,
        ..Default::default()
    });
    g.set_default_node_label(|| NodeLabel::with_size(250.0, 80.0));
    g
}

fn coords(g: &Graph<NodeLabel, EdgeLabel, GraphConfig>) -> BTreeMap<String, (f64, f64)> {
    let mut out = BTreeMap::new();
    g.for_each_node(|id, n| {
        out.insert(id.to_string(), (n.x.unwrap(), n.y.unwrap()));
    });
    out
}

#[test]
fn layout_of_an_empty_graph_is_a_no_op() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    layout(&mut g);
    assert_eq!(g.node_count(), 0);
}

#[test]
fn layout_centers_a_single_node_inside_the_margins() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    g.set_node("a", NodeLabel::with_size(250.0, 80.0));

    layout(&mut g);
    assert_eq!(coords(&g), [("a".to_string(), (175.0, 90.0))].into());
}

#[test]
fn layout_stacks_a_chain_down_the_primary_axis() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    g.set_path(&["a", "b", "c"]);

    layout(&mut g);
    let c = coords(&g);

    let (ax, ay) = c["a"];
    let (bx, by) = c["b"];
    let (cx, cy) = c["c"];

    // Single node per rank: identical secondary coordinate, strictly increasing primary.
    assert_eq!(ax, bx);
    assert_eq!(bx, cx);
    assert!(ay < by && by < cy);
    // Rank pitch is node height plus ranksep.
    assert_eq!(by - ay, 160.0);
    assert_eq!(cy - by, 160.0);
}

#[test]
fn layout_left_to_right_swaps_the_axes() {
    let mut g = roadmap_graph(Direction::LeftToRight);
    g.set_path(&["a", "b", "c"]);

    layout(&mut g);
    let c = coords(&g);

    let (ax, ay) = c["a"];
    let (bx, by) = c["b"];
    let (cx, cy) = c["c"];

    assert_eq!(ay, by);
    assert_eq!(by, cy);
    assert!(ax < bx && bx < cx);
    // Rank pitch is node width plus ranksep.
    assert_eq!(bx - ax, 330.0);
    assert_eq!(cx - bx, 330.0);

    // Node extents are restored after the coordinate transform.
    g.for_each_node(|_, n| {
        assert_eq!((n.width, n.height), (250.0, 80.0));
    });
}

#[test]
fn layout_centers_a_root_over_its_fan_out() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    for child in ["c1", "c2", "c3", "c4"] {
        g.set_edge("root", child);
    }

    layout(&mut g);
    let c = coords(&g);

    let root_y = c["root"].1;
    let child_xs: Vec<f64> = ["c1", "c2", "c3", "c4"].iter().map(|id| c[*id].0).collect();
    let child_y = c["c1"].1;

    assert!(root_y < child_y);
    for id in ["c2", "c3", "c4"] {
        assert_eq!(c[id].1, child_y);
    }

    // Adjacent same-rank nodes are a full node width plus nodesep apart.
    for pair in child_xs.windows(2) {
        assert_eq!(pair[1] - pair[0], 300.0);
    }

    // The root sits at the midpoint of its children.
    let mid = (child_xs[0] + child_xs[3]) / 2.0;
    assert_eq!(c["root"].0, mid);
}

#[test]
fn layout_handles_a_cycle_without_panicking() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    g.set_path(&["a", "b", "c"]);
    g.set_edge("c", "a");

    layout(&mut g);

    g.for_each_node(|id, n| {
        assert!(n.x.is_some() && n.y.is_some(), "{id} was not positioned");
    });
    // Feedback arcs are restored to their input direction.
    assert!(g.has_edge("c", "a"));
    assert!(!g.edge("c", "a").unwrap().reversed);
}

#[test]
fn layout_returns_a_two_cycle_graph_with_both_arcs_intact() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    g.set_edge("a", "b");
    g.set_edge("b", "a");

    layout(&mut g);

    // The arc dropped during cycle breaking is reinstated, so the caller's graph is unchanged.
    assert_eq!(g.edge_count(), 2);
    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "a"));
    assert!(!g.edge("a", "b").unwrap().reversed);
    assert!(!g.edge("b", "a").unwrap().reversed);
    g.for_each_node(|id, n| {
        assert!(n.x.is_some() && n.y.is_some(), "{id} was not positioned");
    });
}

#[test]
fn layout_places_disconnected_components_without_collision() {
    let mut g = roadmap_graph(Direction::TopToBottom);
    g.set_path(&["a", "b"]);
    g.set_path(&["x", "y"]);

    layout(&mut g);
    let c = coords(&g);

    // Both roots share rank 0; both chains share the coordinate space without overlap.
    assert_eq!(c["a"].1, c["x"].1);
    assert_eq!(c["b"].1, c["y"].1);
    assert!((c["a"].0 - c["x"].0).abs() >= 300.0);
}

#[test]
fn layout_is_deterministic() {
    let build = || {
        let mut g = roadmap_graph(Direction::TopToBottom);
        g.set_path(&["a", "b", "e"]);
        g.set_path(&["a", "c", "e"]);
        g.set_edge("a", "d");
        g.set_edge("d", "e");
        layout(&mut g);
        coords(&g)
    };

    assert_eq!(build(), build());
}

#[test]
fn version_is_wired_to_the_manifest() {
    assert_eq!(trailmap_layout::VERSION, env!("CARGO_PKG_VERSION"));
}
