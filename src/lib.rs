// src/lib.rs
/// # domfront
///
/// A dominator-graph toolkit for rooted control-flow graphs. From an
/// edge-list input (parsed or randomly generated) it derives the dominator
/// table, the dominator tree, the dominance join graph and the dominance
/// frontier, and renders any of them as Graphviz DOT or PNG.
///
/// Pipeline: edge list → [`graph::FlowGraph`] → dominator table → (idom map
/// + tree) → (join edges, frontier) → DOT.
///
/// ## Important modules:
/// * `graph` - Rooted directed graph storage and node payload side maps
/// * `analysis` - Dominator solver, tree builder, join edges, frontiers
/// * `parser` - Edge-list text parsing
/// * `generator` - Random CFG generation for test inputs
/// * `printers` - DOT and edge-list rendering
/// * `driver` - CLI command dispatch and file plumbing
/// * `error` - Error types and styled batch reporting
/// * `cli` - Command-line interface definition
pub mod analysis;
pub mod cli;
pub mod driver;
pub mod error;
pub mod generator;
pub mod graph;
pub mod parser;
pub mod printers;
