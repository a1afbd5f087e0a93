// src/analysis/dominators.rs
//! Dominator computation for rooted flow graphs.
//!
//! A node `u` *dominates* `v` iff every path from the entry node to `v`
//! passes through `u`. The solver produces the full dominator table
//! `Dom: node → set of dominators` by iterative data-flow fixed-point over
//! the equations
//!
//! ```text
//! Dom(entry) = { entry }
//! Dom(n)     = { n } ∪ ⋂ Dom(p)   over all predecessors p of n
//! ```
//!
//! Each `Dom(n)` only shrinks after the first pass, so the iteration
//! terminates.

use crate::error::GraphError;
use crate::graph::FlowGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;
use std::collections::{HashMap, HashSet};

/// The dominator table of a flow graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomTable {
    sets: HashMap<NodeIndex, HashSet<NodeIndex>>,
}

impl DomTable {
    /// The full dominator set of a node, itself included.
    #[must_use]
    pub fn dominators_of(&self, node: NodeIndex) -> Option<&HashSet<NodeIndex>> {
        self.sets.get(&node)
    }

    /// Whether `dom` dominates `node` (reflexively).
    #[must_use]
    pub fn dominates(&self, dom: NodeIndex, node: NodeIndex) -> bool {
        self.sets.get(&node).is_some_and(|set| set.contains(&dom))
    }

    /// Whether `dom` dominates `node` and `dom ≠ node`.
    #[must_use]
    pub fn strictly_dominates(&self, dom: NodeIndex, node: NodeIndex) -> bool {
        dom != node && self.dominates(dom, node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &HashSet<NodeIndex>)> {
        self.sets.iter().map(|(&node, set)| (node, set))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Computes the dominator table of `cfg` with respect to its entry node.
///
/// An empty graph yields an empty table. A node unreachable from the entry
/// would stabilise at the pathological `Dom(n) = U`, so rootedness is
/// checked up front and the first unreachable node (in insertion order) is
/// reported instead.
///
/// # Errors
///
/// Returns [`GraphError::UnreachableNode`] if some node cannot be reached
/// from the entry.
pub fn compute_dominators(cfg: &FlowGraph) -> Result<DomTable, GraphError> {
    let Some(entry) = cfg.entry() else {
        return Ok(DomTable::default());
    };

    check_rooted(cfg, entry)?;

    let universe: HashSet<NodeIndex> = cfg.nodes().collect();
    let mut sets: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::with_capacity(universe.len());
    for node in cfg.nodes() {
        if node == entry {
            sets.insert(node, HashSet::from([node]));
        } else {
            sets.insert(node, universe.clone());
        }
    }

    // Sweep in insertion order until a full pass changes nothing.
    let mut changed = true;
    while changed {
        changed = false;

        for node in cfg.nodes() {
            if node == entry {
                continue;
            }

            let mut intersection: Option<HashSet<NodeIndex>> = None;
            for pred in cfg.predecessors(node) {
                let pred_set = &sets[&pred];
                intersection = Some(match intersection {
                    None => pred_set.clone(),
                    Some(acc) => acc.intersection(pred_set).copied().collect(),
                });
            }

            // The intersection over zero predecessors is the universe;
            // after the rootedness check every non-entry node has at least
            // one predecessor.
            let mut new_set = intersection.unwrap_or_else(|| universe.clone());
            new_set.insert(node);

            if sets[&node] != new_set {
                sets.insert(node, new_set);
                changed = true;
            }
        }
    }

    Ok(DomTable { sets })
}

fn check_rooted(cfg: &FlowGraph, entry: NodeIndex) -> Result<(), GraphError> {
    let mut reachable = HashSet::with_capacity(cfg.node_count());
    let mut dfs = Dfs::new(cfg.graph(), entry);
    while let Some(node) = dfs.next(cfg.graph()) {
        reachable.insert(node);
    }

    if reachable.len() == cfg.node_count() {
        return Ok(());
    }
    match cfg.nodes().find(|node| !reachable.contains(node)) {
        Some(node) => Err(GraphError::UnreachableNode { name: cfg.name(node).to_string() }),
        None => Ok(()),
    }
}
