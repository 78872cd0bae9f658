//! Build errors for transition tables.

use thiserror::Error;

/// A single problem found while validating a transition table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableViolation {
    #[error("Table declares no states")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("Edge '{from}' -> '{to}' points at an undeclared state")]
    UnknownTarget { from: String, to: String },

    #[error("Edge '{from}' -> '{to}' is listed more than once")]
    DuplicateEdge { from: String, to: String },
}

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid transition table ({} violation(s)): {}", .violations.len(), summarize(.violations))]
    InvalidTable { violations: Vec<TableViolation> },

    #[error("Failed to parse transition table: {0}")]
    Parse(#[from] serde_json::Error),
}

fn summarize(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
