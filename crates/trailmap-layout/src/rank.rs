//! Rank assignment.
//!
//! Forward longest-path ranking: nodes are visited in a deterministic Kahn topological order
//! (queue seeded and drained in insertion order) and every arc pushes its head at least `minlen`
//! ranks below its tail. Sources end up at rank 0, which also holds per connected component, so
//! disconnected subgraphs share the top of the drawing instead of dangling from the bottom.
//!
//! Network-simplex-grade rankers produce tighter drawings for big graphs, but at roadmap scale
//! (a handful to a few dozen nodes) longest-path is indistinguishable and trivially total.

use crate::{EdgeLabel, GraphConfig, NodeLabel};
use rustc_hash::FxHashMap;
use trailmap_graphlib::Graph;

use std::collections::VecDeque;

pub fn rank(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) {
    let node_ids = g.node_ids();

    let mut indegree: FxHashMap<String, usize> =
        node_ids.iter().map(|id| (id.clone(), 0)).collect();
    for e in g.edges() {
        if e.is_self_loop() {
            continue;
        }
        if let Some(d) = indegree.get_mut(&e.w) {
            *d += 1;
        }
    }

    let mut queue: VecDeque<String> = node_ids
        .iter()
        .filter(|id| indegree.get(*id).copied().unwrap_or(0) == 0)
        .cloned()
        .collect();

    let mut topo: Vec<String> = Vec::with_capacity(node_ids.len());
    while let Some(v) = queue.pop_front() {
        topo.push(v.clone());
        for e in g.out_edges(&v) {
            if e.is_self_loop() {
                continue;
            }
            if let Some(d) = indegree.get_mut(&e.w) {
                *d = d.saturating_sub(1);
                if *d == 0 {
                    queue.push_back(e.w.clone());
                }
            }
        }
    }

    // A residual cycle means acyclic::run was skipped or defeated; append the stragglers in
    // insertion order so every node still gets a rank.
    if topo.len() != node_ids.len() {
        for id in &node_ids {
            if !topo.contains(id) {
                topo.push(id.clone());
            }
        }
    }

    let mut ranks: FxHashMap<String, i32> = node_ids.iter().map(|id| (id.clone(), 0)).collect();
    for v in &topo {
        let r = ranks.get(v).copied().unwrap_or(0);
        for e in g.out_edges(v) {
            if e.is_self_loop() {
                continue;
            }
            let minlen = g.edge_by_key(&e).map(|lbl| lbl.minlen.max(1)).unwrap_or(1);
            let candidate = r + minlen as i32;
            if let Some(current) = ranks.get_mut(&e.w) {
                if candidate > *current {
                    *current = candidate;
                }
            }
        }
    }

    g.for_each_node_mut(|id, n| {
        n.rank = Some(ranks.get(id).copied().unwrap_or(0));
    });
}

/// Largest rank present, or `None` for the empty graph.
pub fn max_rank(g: &Graph<NodeLabel, EdgeLabel, GraphConfig>) -> Option<i32> {
    let mut max: Option<i32> = None;
    g.for_each_node(|_, n| {
        if let Some(r) = n.rank {
            max = Some(max.map_or(r, |m: i32| m.max(r)));
        }
    });
    max
}
