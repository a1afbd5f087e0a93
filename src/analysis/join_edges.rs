// src/analysis/join_edges.rs
use crate::graph::FlowGraph;
use std::collections::BTreeSet;
use std::sync::Arc;

/// An edge set canonicalised on name pairs, sorted for rendering.
pub type NamedEdgeSet = BTreeSet<(Arc<str>, Arc<str>)>;

/// The join edges of a CFG: `edges(cfg) \ edges(tree)`.
///
/// Both edge lists are canonicalised into name-pair sets first, so
/// duplicate input edges collapse and order is immaterial. Traversal uses
/// node indices; set arithmetic uses names only.
#[must_use]
pub fn join_edges(cfg: &FlowGraph, tree: &FlowGraph) -> NamedEdgeSet {
    let tree_edges: NamedEdgeSet = tree.edge_names().collect();
    cfg.edge_names().filter(|edge| !tree_edges.contains(edge)).collect()
}
