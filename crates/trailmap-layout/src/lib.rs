//! Layered (hierarchical) graph layout for roadmap-shaped DAGs.
//!
//! The pipeline is a compact take on the classic Sugiyama stages: break cycles, rank, reduce
//! crossings, assign coordinates. It is deterministic (no randomness, insertion-order
//! tie-breaking everywhere) and total: malformed edges, self-loops, two-cycles, and disconnected
//! subgraphs degrade gracefully instead of failing. All state lives in the caller's graph; the
//! crate holds nothing between calls.

pub use trailmap_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod model;
pub use model::{Direction, EdgeLabel, GraphConfig, NodeLabel};

pub mod acyclic;
pub mod coordinate_system;
pub mod order;
pub mod position;
pub mod rank;
pub mod util;

use graphlib::Graph;

/// Runs the full pipeline in place. After this returns, every node carries a rank, an order slot,
/// and center `x`/`y` coordinates; reversed feedback arcs are restored to their input direction.
pub fn layout(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    if g.node_count() == 0 {
        return;
    }

    let dropped = acyclic::run(g);
    rank::rank(g);
    order::order(g);
    coordinate_system::adjust(g);
    position::position(g);
    coordinate_system::undo(g);
    acyclic::undo(g, dropped);
}
