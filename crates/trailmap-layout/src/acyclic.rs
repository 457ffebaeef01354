//! Cycle breaking.
//!
//! Ranking needs an acyclic graph, so feedback arcs found by a DFS are reversed before the solve
//! and restored afterwards. An arc whose reversal already exists (a two-cycle) cannot be reversed
//! in place; it is taken out of the solve graph instead and handed back to [`undo`] for
//! reinsertion. Self-loops never enter the feedback set: reversing one changes nothing, and they
//! must not constrain rank assignment.

use crate::{EdgeLabel, GraphConfig, NodeLabel};
use trailmap_graphlib::{EdgeKey, Graph};

use std::collections::BTreeSet;

/// Breaks cycles in place. Returns the arcs that had to be dropped from the solve graph because
/// their reversal was already present; pass them to [`undo`] to restore the caller's graph.
pub fn run(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>) -> Vec<(EdgeKey, EdgeLabel)> {
    let mut dropped = Vec::new();

    for e in dfs_fas(g) {
        let Some(label) = g.edge_by_key(&e).cloned() else {
            continue;
        };
        let _ = g.remove_edge_key(&e);

        if g.has_edge(&e.w, &e.v) {
            dropped.push((e, label));
            continue;
        }

        g.set_edge_with_label(
            e.w,
            e.v,
            EdgeLabel {
                reversed: true,
                ..label
            },
        );
    }

    dropped
}

pub fn undo(g: &mut Graph<NodeLabel, EdgeLabel, GraphConfig>, dropped: Vec<(EdgeKey, EdgeLabel)>) {
    for e in g.edge_keys() {
        let Some(label) = g.edge_by_key(&e).cloned() else {
            continue;
        };
        if !label.reversed {
            continue;
        }
        let _ = g.remove_edge_key(&e);
        g.set_edge_with_label(
            e.w,
            e.v,
            EdgeLabel {
                reversed: false,
                ..label
            },
        );
    }

    for (key, label) in dropped {
        g.set_edge_with_label(key.v, key.w, label);
    }
}

fn dfs_fas(g: &Graph<NodeLabel, EdgeLabel, GraphConfig>) -> Vec<EdgeKey> {
    let mut fas: Vec<EdgeKey> = Vec::new();
    let mut stack: BTreeSet<String> = BTreeSet::new();
    let mut visited: BTreeSet<String> = BTreeSet::new();

    fn dfs(
        g: &Graph<NodeLabel, EdgeLabel, GraphConfig>,
        v: &str,
        visited: &mut BTreeSet<String>,
        stack: &mut BTreeSet<String>,
        fas: &mut Vec<EdgeKey>,
    ) {
        if !visited.insert(v.to_string()) {
            return;
        }
        stack.insert(v.to_string());
        for e in g.out_edges(v) {
            if e.is_self_loop() {
                continue;
            }
            if stack.contains(&e.w) {
                fas.push(e);
            } else {
                dfs(g, &e.w, visited, stack, fas);
            }
        }
        stack.remove(v);
    }

    for v in g.node_ids() {
        dfs(g, &v, &mut visited, &mut stack, &mut fas);
    }
    fas
}
