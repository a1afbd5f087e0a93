// src/analysis/frontier.rs
//! Dominance frontiers.
//!
//! `v ∈ DF(u)` iff `u` dominates a predecessor of `v` but does not strictly
//! dominate `v`, the classical relation used to place φ-functions.

use super::dom_tree::IdomMap;
use crate::graph::FlowGraph;
use petgraph::graph::NodeIndex;
use std::collections::{BTreeSet, HashMap};

/// `node → DF(node)`, total over the graph's nodes.
pub type FrontierMap = HashMap<NodeIndex, BTreeSet<NodeIndex>>;

/// Computes the dominance frontier of every node.
///
/// For each node `v`, walk up the idom chain from each predecessor: every
/// node passed before reaching `idom(v)` has `v` in its frontier. The loop
/// runs over all nodes unconditionally; single-predecessor nodes
/// contribute nothing unless their sole predecessor is `idom(v)`, which the
/// walk handles for free. The walk also stops at the entry node, which has
/// no idom of its own.
#[must_use]
pub fn compute_frontiers(cfg: &FlowGraph, idom: &IdomMap) -> FrontierMap {
    let mut frontiers: FrontierMap = cfg.nodes().map(|node| (node, BTreeSet::new())).collect();
    let Some(entry) = cfg.entry() else {
        return frontiers;
    };

    for node in cfg.nodes() {
        let target_idom = idom.get(&node).copied();

        for pred in cfg.predecessors(node) {
            let mut runner = pred;
            loop {
                if Some(runner) == target_idom {
                    break;
                }
                frontiers.entry(runner).or_default().insert(node);
                if runner == entry {
                    break;
                }
                match idom.get(&runner) {
                    Some(&up) => runner = up,
                    None => break,
                }
            }
        }
    }

    frontiers
}

/// Materialises the frontier relation as a graph: one edge `u → v` per
/// `v ∈ DF(u)`, over the same node identities as `cfg`.
#[must_use]
pub fn frontier_graph(cfg: &FlowGraph, frontiers: &FrontierMap) -> FlowGraph {
    let mut out = cfg.empty_like();
    for node in cfg.nodes() {
        if let Some(targets) = frontiers.get(&node) {
            for &target in targets {
                out.add_edge(node, target);
            }
        }
    }
    out
}
