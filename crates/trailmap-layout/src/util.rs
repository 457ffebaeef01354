//! Small helpers shared across pipeline stages.

use crate::{EdgeLabel, GraphConfig, NodeLabel};
use trailmap_graphlib::Graph;

/// Nodes grouped by rank (outer index) and sorted by order slot within each rank. Nodes without a
/// rank are skipped; ranks with no nodes yield empty layers.
pub fn build_layer_matrix(g: &Graph<NodeLabel, EdgeLabel, GraphConfig>) -> Vec<Vec<String>> {
    let mut max_rank: i32 = i32::MIN;
    let mut entries: Vec<(i32, usize, String)> = Vec::new();

    g.for_each_node(|id, n| {
        let Some(rank) = n.rank else {
            return;
        };
        max_rank = max_rank.max(rank);
        entries.push((rank, n.order.unwrap_or(0), id.to_string()));
    });

    if max_rank == i32::MIN {
        return Vec::new();
    }

    let mut layers: Vec<Vec<(usize, String)>> = vec![Vec::new(); (max_rank.max(0) as usize) + 1];
    for (rank, order, id) in entries {
        if rank >= 0 {
            layers[rank as usize].push((order, id));
        }
    }

    layers
        .into_iter()
        .map(|mut layer| {
            layer.sort_by_key(|(o, _)| *o);
            layer.into_iter().map(|(_, id)| id).collect()
        })
        .collect()
}
