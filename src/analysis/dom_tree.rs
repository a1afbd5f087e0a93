// src/analysis/dom_tree.rs
//! Immediate-dominator selection and dominator-tree construction.

use super::dominators::DomTable;
use crate::error::GraphError;
use crate::graph::FlowGraph;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet, VecDeque};

/// `node → idom(node)` for every non-entry node.
pub type IdomMap = HashMap<NodeIndex, NodeIndex>;

/// Selects the immediate dominator of every non-entry node.
///
/// For each node, the strict-dominator set `S = Dom(n) \ {n}` is linearly
/// ordered under dominance; its maximum (the element dominated by every
/// other) is `idom(n)`. With a single candidate that element is taken
/// directly; otherwise a reverse breadth-first walk over predecessor edges
/// finds the closest `S` member, which is necessarily the deepest one in the
/// dominator chain.
///
/// # Errors
///
/// Returns [`GraphError::IdomSearchFailure`] if the walk finds no strict
/// dominator, which indicates an inconsistent table.
pub fn immediate_dominators(cfg: &FlowGraph, dom: &DomTable) -> Result<IdomMap, GraphError> {
    let Some(entry) = cfg.entry() else {
        return Ok(IdomMap::new());
    };

    let mut idom = IdomMap::with_capacity(cfg.node_count().saturating_sub(1));
    for node in cfg.nodes() {
        if node == entry {
            continue;
        }

        let search_failure = || GraphError::IdomSearchFailure { name: cfg.name(node).to_string() };

        let mut strict: HashSet<NodeIndex> =
            dom.dominators_of(node).ok_or_else(search_failure)?.clone();
        strict.remove(&node);

        let parent = if strict.len() == 1 {
            strict.iter().copied().next()
        } else {
            closest_dominator(cfg, node, &strict)
        };
        let parent = parent.ok_or_else(search_failure)?;

        idom.insert(node, parent);
    }

    Ok(idom)
}

/// Reverse BFS from `node` over predecessor edges; the first member of
/// `strict` encountered is the closest strict dominator. The visited set
/// keeps predecessor cycles from re-enqueuing forever.
fn closest_dominator(
    cfg: &FlowGraph,
    node: NodeIndex,
    strict: &HashSet<NodeIndex>,
) -> Option<NodeIndex> {
    let mut queue = VecDeque::from([node]);
    let mut visited = HashSet::from([node]);

    while let Some(current) = queue.pop_front() {
        for pred in cfg.predecessors(current) {
            if strict.contains(&pred) {
                return Some(pred);
            }
            if visited.insert(pred) {
                queue.push_back(pred);
            }
        }
    }

    None
}

/// Materialises the dominator tree: a fresh graph with the same node
/// identities as `cfg` and one edge `idom(n) → n` per non-entry node. The
/// input CFG is left untouched.
///
/// # Errors
///
/// Propagates [`GraphError::IdomSearchFailure`] from idom selection.
pub fn build_dom_tree(cfg: &FlowGraph, dom: &DomTable) -> Result<FlowGraph, GraphError> {
    let idom = immediate_dominators(cfg, dom)?;

    let mut tree = cfg.empty_like();
    for node in cfg.nodes() {
        if let Some(&parent) = idom.get(&node) {
            tree.add_edge(parent, node);
        }
    }

    Ok(tree)
}
