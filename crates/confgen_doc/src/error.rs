//! Error types for the document module.

use thiserror::Error;

/// Result type alias for document operations.
pub type DocResult<T> = Result<T, DocError>;

/// Errors that can occur while loading a data document.
///
/// Content-level problems are never reported here; those become findings in
/// a [`crate::ValidationReport`]. These errors cover only conditions the
/// loader cannot classify as findings.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("YAML document is empty")]
    Empty,

    #[error("YAML root must be a mapping/object (got {0})")]
    RootNotMapping(&'static str),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
