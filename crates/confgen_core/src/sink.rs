//! Diagnostic reporting seam for the pipeline.

use tracing::{error, info, warn};

/// Severity of one pipeline diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Destination for pipeline diagnostics.
///
/// The pipeline reports progress lines and validation findings through this
/// trait instead of a process-wide logger, so callers can capture them in
/// tests or route them elsewhere.
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);
}

/// Sink that forwards diagnostics to the active `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Info => info!("{message}"),
            Level::Warn => warn!("{message}"),
            Level::Error => error!("{message}"),
        }
    }
}
