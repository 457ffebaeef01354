//! Direction handling.
//!
//! The positioning pass always lays ranks out top-to-bottom. For `LeftToRight`, node extents are
//! swapped before positioning and coordinates swapped back afterwards, so rank becomes the
//! horizontal axis without the solver knowing.

use crate::{Direction, EdgeLabel, GraphConfig, NodeLabel};
use trailmap_graphlib::Graph;

pub fn adjust(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    if g.graph().direction == Direction::LeftToRight {
        swap_width_height(g);
    }
}

pub fn undo(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    if g.graph().direction == Direction::LeftToRight {
        swap_xy(g);
        swap_width_height(g);
    }
}

fn swap_width_height(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    g.for_each_node_mut(|_, n| {
        (n.width, n.height) = (n.height, n.width);
    });
}

fn swap_xy(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    g.for_each_node_mut(|_, n| {
        if let (Some(x), Some(y)) = (n.x, n.y) {
            n.x = Some(y);
            n.y = Some(x);
        }
    });
}
