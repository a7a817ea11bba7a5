//! Error types for graph queries and import.
//!
//! Mutations on missing keys are not errors: `add_edge`, `remove_edge` and
//! `remove_node` silently do nothing. Only queries that need an existing node
//! and the import path report failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node not found: {key}")]
    NodeNotFound { key: String },

    #[error("node already exists: {key}")]
    AlreadyExists { key: String },

    /// `line` is 1-based and absent when the whole document is rejected.
    #[error("invalid import format{}: {reason}", at_line(.line))]
    ImportFormat { line: Option<usize>, reason: String },

    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl GraphError {
    pub(crate) fn not_found<Q: std::fmt::Debug + ?Sized>(key: &Q) -> Self {
        GraphError::NodeNotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn format(line: Option<usize>, reason: impl Into<String>) -> Self {
        GraphError::ImportFormat {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_format_message() {
        let whole = GraphError::format(None, "missing `strict graph` marker");
        assert_eq!(
            whole.to_string(),
            "invalid import format: missing `strict graph` marker"
        );

        let line = GraphError::format(Some(3), "expected `[`");
        assert_eq!(line.to_string(), "invalid import format at line 3: expected `[`");
    }

    #[test]
    fn test_not_found_uses_debug_form() {
        assert_eq!(GraphError::not_found("A").to_string(), "node not found: \"A\"");
        assert_eq!(GraphError::not_found(&7).to_string(), "node not found: 7");
    }
}
