//! The generation pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use confgen_doc::{load_document, DocumentValidator, ValidationReport};
use confgen_render::TemplateRenderer;

use crate::error::{PipelineError, PipelineResult};
use crate::sink::{DiagnosticSink, Level};

/// Paths and policy for one generation run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    /// Abort before rendering when validation reports any finding.
    pub strict: bool,
}

impl PipelineOptions {
    pub fn new(
        data_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            template_path: template_path.into(),
            output_path: output_path.into(),
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Every finding validation collected, also when the run proceeded
    /// past them in permissive mode.
    pub report: ValidationReport,
    pub output_path: PathBuf,
}

/// Sequencer for one generation run: load, validate, render, write.
///
/// The stages always run in that order, so the document is loaded and fully
/// validated before the template is even looked up. Holds no state across
/// runs.
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Run the pipeline to completion or first fatal failure.
    ///
    /// Findings are emitted through `sink` before the strict/permissive
    /// decision is applied; a permissive run performs every check and
    /// reports every finding, it merely continues past them.
    pub fn run(&self, sink: &dyn DiagnosticSink) -> PipelineResult<PipelineOutcome> {
        let opts = &self.options;

        sink.emit(
            Level::Info,
            &format!("Loading YAML data from: {}", opts.data_path.display()),
        );
        let doc = load_document(&opts.data_path)?;

        sink.emit(Level::Info, "Validating data...");
        let report = DocumentValidator::validate(&doc);
        if !report.is_empty() {
            for finding in report.iter() {
                sink.emit(Level::Error, &format!("Validation: {}", finding.message()));
            }
            if opts.strict {
                sink.emit(Level::Error, "Validation failed (strict mode). Aborting.");
                return Err(PipelineError::ValidationFailed {
                    findings: report.len(),
                });
            }
            sink.emit(
                Level::Warn,
                "Validation produced warnings. Proceeding because strict mode is off.",
            );
        }

        sink.emit(
            Level::Info,
            &format!("Rendering template: {}", opts.template_path.display()),
        );
        let rendered = TemplateRenderer::render_file(&opts.template_path, &doc)?;
        debug!("Rendered {} bytes", rendered.len());

        sink.emit(
            Level::Info,
            &format!("Writing output to: {}", opts.output_path.display()),
        );
        write_output(&opts.output_path, &rendered)?;

        sink.emit(
            Level::Info,
            &format!("Success: config written to {}", opts.output_path.display()),
        );
        Ok(PipelineOutcome {
            report,
            output_path: opts.output_path.clone(),
        })
    }
}

/// Persist the rendered text as UTF-8.
fn write_output(path: &Path, rendered: &str) -> PipelineResult<()> {
    fs::write(path, rendered)?;
    Ok(())
}
