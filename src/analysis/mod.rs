// src/analysis/mod.rs
//! # Analysis Module
//!
//! Dominance analyses over a [`FlowGraph`](crate::graph::FlowGraph). Each
//! analysis is a pure function of its inputs and returns a fresh value; the
//! input CFG is never mutated.
//!
//! Pipeline order: [`compute_dominators`] → [`immediate_dominators`] /
//! [`build_dom_tree`] → [`join_edges`] / [`compute_frontiers`].
mod dom_tree;
mod dominators;
mod frontier;
mod join_edges;

pub use dom_tree::{build_dom_tree, immediate_dominators, IdomMap};
pub use dominators::{compute_dominators, DomTable};
pub use frontier::{compute_frontiers, frontier_graph, FrontierMap};
pub use join_edges::{join_edges, NamedEdgeSet};
