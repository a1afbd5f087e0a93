// src/parser/edge_list.rs
use crate::error::GraphError;

/// The edge separator. The from-name is everything before its first
/// occurrence; the to-name is the remainder of the line.
pub const ARROW: &str = " --> ";

/// Parses edge-list text into `(from, to)` pairs plus the parse errors
/// encountered along the way. Malformed lines are collected, not thrown:
/// callers report the whole batch and well-formed lines still contribute
/// edges. Leading whitespace and blank lines are skipped.
#[must_use]
pub fn parse_edge_list(source: &str) -> (Vec<(String, String)>, Vec<GraphError>) {
    let mut edges = Vec::new();
    let mut errors = Vec::new();

    for (number, raw) in source.lines().enumerate() {
        let line = raw.trim_start();
        if line.is_empty() {
            continue;
        }
        let line_number = number + 1;

        let Some((from, to)) = line.split_once(ARROW) else {
            errors.push(GraphError::InputParse {
                line: line_number,
                message: format!("missing `{}` separator", ARROW.trim()),
            });
            continue;
        };
        let to = to.trim_end();

        if from.is_empty() || to.is_empty() {
            errors.push(GraphError::InputParse {
                line: line_number,
                message: "empty node name".to_string(),
            });
            continue;
        }
        if from.contains(char::is_whitespace) || to.contains(char::is_whitespace) {
            errors.push(GraphError::InputParse {
                line: line_number,
                message: "node names may not contain whitespace".to_string(),
            });
            continue;
        }

        edges.push((from.to_string(), to.to_string()));
    }

    (edges, errors)
}
