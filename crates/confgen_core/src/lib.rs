//! # confgen_core
//!
//! Generation pipeline orchestration for confgen.
//!
//! Sequences the stages of one generation run — load, validate, render,
//! write — and applies the strict/permissive validation policy. Validation
//! findings are always fully collected and reported; whether they abort the
//! run is the pipeline's decision, made here, not inside the validator.
//!
//! Each run is single-threaded and single-pass: one document, one template,
//! start to finish, with no state carried between runs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use confgen_core::{Pipeline, PipelineOptions, TracingSink};
//!
//! let options = PipelineOptions::new("switch_data.yaml", "cisco_template.j2", "final_config.txt");
//! let outcome = Pipeline::new(options).run(&TracingSink).unwrap();
//! println!("wrote {}", outcome.output_path.display());
//! ```

pub mod error;
pub mod pipeline;
pub mod sink;

pub use error::{FailureKind, PipelineError, PipelineResult};
pub use pipeline::{Pipeline, PipelineOptions, PipelineOutcome};
pub use sink::{DiagnosticSink, Level, TracingSink};
