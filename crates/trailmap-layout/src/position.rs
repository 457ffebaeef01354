//! Coordinate assignment.
//!
//! Works in the adjusted coordinate space where the primary axis is always vertical (see
//! `coordinate_system`). Each rank is centered against the widest rank, which keeps a lone root
//! centered over its fan-out, and margins are folded in here so callers get final coordinates.
//! Assigned `x`/`y` are node centers.

use crate::util::build_layer_matrix;
use crate::{EdgeLabel, GraphConfig, NodeLabel};
use trailmap_graphlib::Graph;

pub fn position(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    let cfg = g.graph().clone();
    let layers = build_layer_matrix(g);
    if layers.is_empty() {
        return;
    }

    let node_size = |g: &Graph<NodeLabel, EdgeLabel, GraphConfig>, id: &str| -> (f64, f64) {
        g.node(id).map(|n| (n.width, n.height)).unwrap_or((0.0, 0.0))
    };

    let mut rank_heights: Vec<f64> = Vec::with_capacity(layers.len());
    let mut rank_widths: Vec<f64> = Vec::with_capacity(layers.len());
    for ids in &layers {
        let mut h: f64 = 0.0;
        let mut w: f64 = 0.0;
        for (i, id) in ids.iter().enumerate() {
            let (nw, nh) = node_size(g, id);
            h = h.max(nh);
            w += nw;
            if i + 1 < ids.len() {
                w += cfg.nodesep;
            }
        }
        rank_heights.push(h);
        rank_widths.push(w);
    }
    let max_rank_width = rank_widths.iter().copied().fold(0.0_f64, f64::max);

    let mut y_cursor = cfg.marginy;
    for (rank_idx, ids) in layers.iter().enumerate() {
        let rank_h = rank_heights[rank_idx];
        let y = y_cursor + rank_h / 2.0;

        let mut x_cursor = cfg.marginx + (max_rank_width - rank_widths[rank_idx]) / 2.0;
        for id in ids {
            let (nw, _) = node_size(g, id);
            let x = x_cursor + nw / 2.0;
            if let Some(n) = g.node_mut(id) {
                n.x = Some(x);
                n.y = Some(y);
            }
            x_cursor += nw + cfg.nodesep;
        }

        y_cursor += rank_h;
        if rank_idx + 1 < layers.len() {
            y_cursor += cfg.ranksep;
        }
    }
}
