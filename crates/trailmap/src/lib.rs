#![forbid(unsafe_code)]

//! `trailmap` lays out learning-roadmap graphs for an interactive node canvas.
//!
//! The input is what a roadmap generator emits: a list of step nodes (label, description,
//! resource links) and a list of directed prerequisite edges. The output is the transport shape
//! the canvas consumes: one positioned node per input node (top-left anchored, fixed 250×80
//! footprint, `"roadmapNode"` kind, `completed: false`) and one render edge per input edge
//! (`"smoothstep"`, not animated), both in input order.
//!
//! Layout is pure and total: no state survives a call, identical input gives identical output,
//! and malformed edges (dangling references, self-loops, duplicates, cycles) degrade gracefully.
//! Edges are never filtered — an edge whose endpoints don't exist is ignored by the solver but
//! still echoed to the output, where the canvas drops or dangles it.
//!
//! The engine itself is generic over the node payload ([`layout_elements`]); the roadmap-specific
//! record is attached by [`layout_roadmap`]. Document validation lives in [`schema`], beside the
//! engine rather than inside it: the layout entry points never fail.

use serde::{Deserialize, Serialize};

pub use trailmap_layout::Direction;

pub mod schema;

/// Logical footprint of every step node, in layout units. Label length does not change the
/// footprint; the canvas clips or wraps.
pub const NODE_WIDTH: f64 = 250.0;
pub const NODE_HEIGHT: f64 = 80.0;

/// Rendering kind tags understood by the canvas.
pub const NODE_KIND: &str = "roadmapNode";
pub const EDGE_KIND: &str = "smoothstep";

/// A link attached to a roadmap step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResource {
    pub title: String,
    pub url: String,
}

/// One step of a generated roadmap, as produced upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepNode {
    pub id: String,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<StepResource>,
}

/// A directed prerequisite edge. Endpoints are not required to reference existing step ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEdge {
    pub source: String,
    pub target: String,
}

/// Top-left corner of a node in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// An engine input node: an id plus an opaque payload carried through verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode<T> {
    pub id: String,
    pub data: T,
}

/// A node the canvas can draw: original id and payload plus computed geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode<T> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: Position,
    pub data: T,
}

/// An edge the canvas can draw. The id is the plain concatenation of the endpoint ids; two
/// parallel edges collide and collapse visually, which is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutedGraph<T> {
    pub nodes: Vec<PositionedNode<T>>,
    pub edges: Vec<RenderEdge>,
}

/// Payload attached to every positioned roadmap node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepData {
    pub label: String,
    pub description: String,
    pub resources: Vec<StepResource>,
    pub completed: bool,
}

/// Lays out nodes with an arbitrary payload type.
///
/// Every input node yields exactly one output node, in input order; every input edge yields
/// exactly one output edge, in input order, whether or not the solver could use it. Edges whose
/// endpoints are unknown (and the arcs of self-loops and duplicates beyond the first) simply
/// don't constrain the solve.
pub fn layout_elements<T>(
    nodes: Vec<LayoutNode<T>>,
    edges: &[StepEdge],
    direction: Direction,
) -> LayoutedGraph<T> {
    use trailmap_layout::graphlib::Graph;
    use trailmap_layout::{EdgeLabel, GraphConfig, NodeLabel};

    let mut g: Graph<NodeLabel, EdgeLabel, GraphConfig> = Graph::new();
    g.set_graph(GraphConfig {
        direction,
        ..Default::default()
    });

    for node in &nodes {
        g.set_node(
            node.id.clone(),
            NodeLabel::with_size(NODE_WIDTH, NODE_HEIGHT),
        );
    }

    for edge in edges {
        // Dangling endpoints would otherwise materialize as phantom nodes; the output edge list
        // below echoes these edges regardless.
        if g.has_node(&edge.source) && g.has_node(&edge.target) {
            g.set_edge(edge.source.clone(), edge.target.clone());
        }
    }

    trailmap_layout::layout(&mut g);

    let positioned = nodes
        .into_iter()
        .map(|node| {
            let (cx, cy) = g
                .node(&node.id)
                .map(|n| (n.x.unwrap_or(0.0), n.y.unwrap_or(0.0)))
                .unwrap_or((0.0, 0.0));
            PositionedNode {
                id: node.id,
                kind: NODE_KIND,
                // The solver hands back center points; the canvas anchors top-left.
                position: Position {
                    x: cx - NODE_WIDTH / 2.0,
                    y: cy - NODE_HEIGHT / 2.0,
                },
                data: node.data,
            }
        })
        .collect();

    let render_edges = edges
        .iter()
        .map(|edge| RenderEdge {
            id: format!("e{}{}", edge.source, edge.target),
            source: edge.source.clone(),
            target: edge.target.clone(),
            kind: EDGE_KIND,
            animated: false,
        })
        .collect();

    LayoutedGraph {
        nodes: positioned,
        edges: render_edges,
    }
}

/// Lays out roadmap steps, attaching the canvas payload (`completed` starts false).
pub fn layout_roadmap(
    nodes: &[StepNode],
    edges: &[StepEdge],
    direction: Direction,
) -> LayoutedGraph<StepData> {
    let inputs = nodes
        .iter()
        .map(|n| LayoutNode {
            id: n.id.clone(),
            data: StepData {
                label: n.label.clone(),
                description: n.description.clone(),
                resources: n.resources.clone(),
                completed: false,
            },
        })
        .collect();

    layout_elements(inputs, edges, direction)
}
