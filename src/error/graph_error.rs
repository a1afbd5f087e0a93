// src/error/graph_error.rs
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("line {line}: {message}")]
    InputParse { line: usize, message: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("node `{name}` is unreachable from the entry node")]
    UnreachableNode { name: String },

    #[error("no immediate dominator found for node `{name}`")]
    IdomSearchFailure { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer exited with {status}")]
    Render { status: ExitStatus },
}

impl GraphError {
    /// Input-validation failures exit with the dedicated code; everything
    /// else is an analysis or system failure.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InputParse { .. } | Self::InvalidArgument(_))
    }
}
