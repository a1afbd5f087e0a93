// src/generator.rs
//! Random CFG generator. Emits edge-list text suitable for
//! [`parse_edge_list`](crate::parser::parse_edge_list):
//!
//! ```text
//! BB_1 --> BB_2
//! BB_2 --> BB_3
//! BB_3 --> BB_1
//! BB_1 --> BB_1
//! ```

use rand::Rng;
use std::io::{self, Write};

pub const DEF_NODE_COUNT: usize = 5;
pub const DEF_EDGE_LIMIT: usize = 1;
pub const MAX_NODE_COUNT: usize = 15;
pub const MAX_EDGE_LIMIT: usize = 5;

/// Writes a random directed graph with `node_count` nodes, each with
/// between 1 and `edge_limit` out-edges to distinct targets (self-loops
/// included). Out-of-range requests fall back to the defaults:
/// an `edge_limit` above `node_count` clamps to 1, a `node_count` of zero
/// or above [`MAX_NODE_COUNT`] resets to [`DEF_NODE_COUNT`], and an
/// `edge_limit` above [`MAX_EDGE_LIMIT`] resets to `DEF_EDGE_LIMIT + 1`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn generate_graph<W: Write>(
    out: &mut W,
    mut node_count: usize,
    mut edge_limit: usize,
    node_name: &str,
) -> io::Result<()> {
    if edge_limit > node_count {
        edge_limit = 1;
    }
    if node_count == 0 || node_count > MAX_NODE_COUNT {
        node_count = DEF_NODE_COUNT;
    }
    if edge_limit == 0 {
        edge_limit = DEF_EDGE_LIMIT;
    }
    if edge_limit > MAX_EDGE_LIMIT {
        edge_limit = DEF_EDGE_LIMIT + 1;
    }

    let mut rng = rand::thread_rng();
    for node in 1..=node_count {
        // Targets are drawn without replacement so a node never emits the
        // same edge twice.
        let mut targets: Vec<usize> = (1..=node_count).collect();
        let edge_count = rng.gen_range(1..=edge_limit);
        for _ in 0..edge_count {
            let cell = rng.gen_range(0..targets.len());
            writeln!(out, "{node_name}_{node} --> {node_name}_{}", targets[cell])?;
            targets.remove(cell);
        }
    }

    Ok(())
}
