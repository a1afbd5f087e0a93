// src/printers/mod.rs
//! # Printers Module
//!
//! Rendering of flow graphs to external formats: Graphviz DOT (with
//! per-kind decorations) and the plain edge-list text format.
pub mod dot_printer;

pub use dot_printer::{render_dot, render_edge_list, DotGraph, DotStyle};
