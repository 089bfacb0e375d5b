//! Error types for the pipeline.

use std::fmt;

use thiserror::Error;

use confgen_doc::DocError;
use confgen_render::TemplateError;

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Broad classification of a pipeline failure, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Io,
    DocumentSyntax,
    DocumentShape,
    Validation,
    TemplateNotFound,
    Render,
    Unexpected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Io => "I/O error",
            FailureKind::DocumentSyntax => "document syntax error",
            FailureKind::DocumentShape => "document shape error",
            FailureKind::Validation => "validation failure",
            FailureKind::TemplateNotFound => "template not found",
            FailureKind::Render => "render error",
            FailureKind::Unexpected => "unexpected error",
        };
        f.write_str(name)
    }
}

/// Errors that abort a pipeline run.
///
/// Validation findings are not errors by themselves; they surface here only
/// as [`PipelineError::ValidationFailed`] when the strict policy turns a
/// non-empty report into an abort.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("YAML parsing error: {0}")]
    DocumentSyntax(String),

    #[error("Invalid document: {0}")]
    DocumentShape(String),

    #[error("Validation failed (strict mode): {findings} finding(s)")]
    ValidationFailed { findings: usize },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Which failure category this error falls into.
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::DocumentSyntax(_) => FailureKind::DocumentSyntax,
            PipelineError::DocumentShape(_) => FailureKind::DocumentShape,
            PipelineError::ValidationFailed { .. } => FailureKind::Validation,
            PipelineError::TemplateNotFound(_) => FailureKind::TemplateNotFound,
            PipelineError::Render(_) => FailureKind::Render,
            PipelineError::Io(_) => FailureKind::Io,
        }
    }
}

impl From<DocError> for PipelineError {
    fn from(err: DocError) -> Self {
        match err {
            DocError::Io(e) => PipelineError::Io(e),
            DocError::Yaml(e) => PipelineError::DocumentSyntax(e.to_string()),
            DocError::Empty | DocError::RootNotMapping(_) => {
                PipelineError::DocumentShape(err.to_string())
            }
        }
    }
}

impl From<TemplateError> for PipelineError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(name) => PipelineError::TemplateNotFound(name),
            TemplateError::RenderingFailed(message) => PipelineError::Render(message),
        }
    }
}
