// src/error/report.rs
use super::graph_error::GraphError;
use console::style;

const fn category(error: &GraphError) -> &'static str {
    match error {
        GraphError::InputParse { .. } => "PARSE",
        GraphError::InvalidArgument(_) => "ARG",
        GraphError::UnreachableNode { .. } => "GRAPH",
        GraphError::IdomSearchFailure { .. } => "IDOM",
        GraphError::Io(_) => "I/O",
        GraphError::Render { .. } => "RENDER",
    }
}

/// Reports a batch of errors to stderr with styled headers. Validation
/// errors arrive here as a set, never one fatal throw at a time.
pub fn report_errors(errors: &[GraphError]) {
    for error in errors {
        eprintln!(
            "{} {}: {}",
            style("ERROR").red().bold(),
            style(category(error)).red(),
            style(error).yellow()
        );
    }
}
