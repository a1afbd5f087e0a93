// src/driver.rs
//! Command dispatch: file plumbing around the analysis pipeline.
//!
//! Flow per invocation: obtain an edge-list file (`--arg` or generate one),
//! parse it, build the CFG, run the stages the requested target needs, and
//! write the `.dot`/`.png` outputs next to the edge list. Analyses are pure;
//! all I/O happens here.

use crate::analysis::{
    build_dom_tree, compute_dominators, compute_frontiers, frontier_graph, immediate_dominators,
    join_edges,
};
use crate::cli::{Args, GraphKind};
use crate::error::GraphError;
use crate::generator;
use crate::graph::FlowGraph;
use crate::parser::parse_edge_list;
use crate::printers::{render_dot, DotGraph};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs one CLI invocation. Parse failures come back as the whole batch;
/// every other failure is a batch of one.
pub fn run(args: &Args) -> Result<(), Vec<GraphError>> {
    let formats = args.graph.formats();

    let (txt_path, generated) = prepare_edge_list(args).map_err(|e| vec![e])?;
    if !formats.dot && !formats.png {
        return Ok(());
    }

    let cfg = load_graph(&txt_path)?;
    // The generated edge list is an intermediate unless the target asked
    // for it; user-supplied inputs are never removed.
    if generated && !formats.txt {
        fs::remove_file(&txt_path).map_err(|e| vec![GraphError::Io(e)])?;
    }

    let dot = render_target(args, &cfg).map_err(|e| vec![e])?;
    let dot_path = txt_path.with_extension("dot");
    fs::write(&dot_path, dot).map_err(|e| vec![GraphError::Io(e)])?;

    if formats.png {
        let png_path = dot_path.with_extension("png");
        let result = render_png(&dot_path, &png_path).and_then(|()| {
            if args.show { show_png(&png_path) } else { Ok(()) }
        });
        if !formats.dot {
            let _ = fs::remove_file(&dot_path);
        }
        result.map_err(|e| vec![e])?;
    }

    Ok(())
}

/// Resolves the edge-list file: the `--arg` input if given, otherwise a
/// freshly generated `<path>/<file-name>.txt`. The boolean reports whether
/// the file was generated by us.
fn prepare_edge_list(args: &Args) -> Result<(PathBuf, bool), GraphError> {
    if let Some(input) = &args.input {
        if !input.is_file() {
            return Err(GraphError::InvalidArgument(format!(
                "{} is an invalid path",
                input.display()
            )));
        }
        return Ok((input.clone(), false));
    }

    if !args.path.is_dir() {
        return Err(GraphError::InvalidArgument(format!(
            "{} is an invalid path",
            args.path.display()
        )));
    }
    let txt_path = args.path.join(&args.file_name).with_extension("txt");
    let mut file = fs::File::create(&txt_path)?;
    generator::generate_graph(&mut file, args.num_nodes, args.num_edges, &args.node_name)?;
    Ok((txt_path, true))
}

fn load_graph(txt_path: &Path) -> Result<FlowGraph, Vec<GraphError>> {
    let source = fs::read_to_string(txt_path).map_err(|e| vec![GraphError::Io(e)])?;
    let (edges, errors) = parse_edge_list(&source);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(FlowGraph::from_edges(edges))
}

/// Runs the pipeline stages the target kind needs and renders the result.
fn render_target(args: &Args, cfg: &FlowGraph) -> Result<String, GraphError> {
    let style = args.style();
    let dot = match args.graph.kind() {
        GraphKind::Cfg => render_dot(DotGraph::Cfg(cfg), &style),
        GraphKind::DomTree => {
            let dom = compute_dominators(cfg)?;
            let tree = build_dom_tree(cfg, &dom)?;
            render_dot(DotGraph::DomTree(&tree), &style)
        }
        GraphKind::JoinGraph => {
            let dom = compute_dominators(cfg)?;
            let tree = build_dom_tree(cfg, &dom)?;
            let join = join_edges(cfg, &tree);
            render_dot(DotGraph::Join { tree: &tree, join: &join }, &style)
        }
        GraphKind::DomFrontier => {
            let dom = compute_dominators(cfg)?;
            let idom = immediate_dominators(cfg, &dom)?;
            let frontiers = compute_frontiers(cfg, &idom);
            let frontier = frontier_graph(cfg, &frontiers);
            render_dot(DotGraph::Frontier(&frontier), &style)
        }
    };
    Ok(dot)
}

fn render_png(dot_path: &Path, png_path: &Path) -> Result<(), GraphError> {
    let status =
        Command::new("dot").arg("-Tpng").arg(dot_path).arg("-o").arg(png_path).status()?;
    if !status.success() {
        return Err(GraphError::Render { status });
    }
    Ok(())
}

fn show_png(png_path: &Path) -> Result<(), GraphError> {
    let status = Command::new("display").arg(png_path).status()?;
    if !status.success() {
        return Err(GraphError::Render { status });
    }
    Ok(())
}
