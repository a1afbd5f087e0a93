// src/printers/dot_printer.rs
//! Graphviz DOT rendering.
//!
//! One renderer for all graph kinds: [`DotGraph`] tags what is being drawn
//! and the renderer branches on the tag for the kind-specific decorations
//! (dotted join edges on the join graph, self-loops on frontier nodes with
//! an empty frontier).

use crate::analysis::NamedEdgeSet;
use crate::graph::FlowGraph;
use std::fmt::Write;

pub const DEF_GRAPH_NAME: &str = "CFG";
pub const DEF_NODE_SHAPE: &str = "square";
pub const DEF_NODE_COLOR: &str = "lightblue";
pub const DEF_EDGE_SHAPE: &str = "vee";
pub const DEF_EDGE_COLOR: &str = "red";
pub const DEF_FILE_NAME: &str = "graph";
pub const DEF_NODE_NAME: &str = "BB";

/// Rendering options. Colors accept any Graphviz color, RGB included
/// (`#ffffff`); shapes are Graphviz node shapes / arrowheads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotStyle {
    pub graph_name: String,
    pub node_shape: String,
    pub node_color: String,
    pub edge_shape: String,
    pub edge_color: String,
    pub file_name: String,
    pub node_name_prefix: String,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            graph_name: DEF_GRAPH_NAME.to_string(),
            node_shape: DEF_NODE_SHAPE.to_string(),
            node_color: DEF_NODE_COLOR.to_string(),
            edge_shape: DEF_EDGE_SHAPE.to_string(),
            edge_color: DEF_EDGE_COLOR.to_string(),
            file_name: DEF_FILE_NAME.to_string(),
            node_name_prefix: DEF_NODE_NAME.to_string(),
        }
    }
}

/// What is being rendered.
#[derive(Debug, Clone, Copy)]
pub enum DotGraph<'a> {
    Cfg(&'a FlowGraph),
    DomTree(&'a FlowGraph),
    /// The dominator tree with the join edges overlaid as dotted edges.
    Join { tree: &'a FlowGraph, join: &'a NamedEdgeSet },
    Frontier(&'a FlowGraph),
}

impl<'a> DotGraph<'a> {
    const fn base(self) -> &'a FlowGraph {
        match self {
            Self::Cfg(graph) | Self::DomTree(graph) | Self::Frontier(graph) => graph,
            Self::Join { tree, .. } => tree,
        }
    }
}

/// Renders a graph as a DOT document.
#[must_use]
pub fn render_dot(graph: DotGraph<'_>, style: &DotStyle) -> String {
    let base = graph.base();
    let mut out = String::new();

    let _ = writeln!(out, "digraph {} {{", style.graph_name);
    out.push_str("    dpi = 100;\n");
    out.push_str("    fontname = \"Comic Sans MS\";\n");
    out.push_str("    fontsize = 20;\n");
    out.push_str("    rankdir = TB;\n");
    let _ = writeln!(
        out,
        "    node [shape = {}, style = filled, fillcolor = \"{}\"];",
        style.node_shape, style.node_color
    );
    let _ = writeln!(
        out,
        "    edge [color = {}, arrowhead = {}, arrowsize = 1, penwidth = 1.2];",
        style.edge_color, style.edge_shape
    );

    for (from, to) in base.edge_names() {
        let _ = writeln!(out, "    {from} -> {to};");
    }

    match graph {
        DotGraph::Join { join, .. } => {
            for (from, to) in join {
                let _ = writeln!(out, "    {from} -> {to} [style = dotted];");
            }
        }
        DotGraph::Frontier(frontier) => {
            // A node with an empty frontier is drawn with a self-loop; a
            // rendering convention only, not part of the DF relation.
            for node in frontier.nodes() {
                if frontier.successors(node).next().is_none() {
                    let name = frontier.name(node);
                    let _ = writeln!(out, "    {name} -> {name};");
                }
            }
        }
        DotGraph::Cfg(_) | DotGraph::DomTree(_) => {}
    }

    out.push_str("}\n");
    out
}

/// Renders a graph back into the edge-list text format, in edge insertion
/// order. Parsing the result reproduces an isomorphic graph.
#[must_use]
pub fn render_edge_list(graph: &FlowGraph) -> String {
    let mut out = String::new();
    for (from, to) in graph.edge_names() {
        let _ = writeln!(out, "{from} --> {to}");
    }
    out
}
