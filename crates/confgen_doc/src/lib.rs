//! # confgen_doc
//!
//! Data document loading and validation for confgen.
//!
//! This crate owns the first half of the generation pipeline: decoding a
//! YAML data file into an [`InputDocument`] and checking that document
//! against the shape the configuration templates expect.
//!
//! Validation is deliberately permissive and additive: the validator always
//! completes a full pass and returns every finding it discovered, so an
//! operator sees the complete picture before deciding whether to proceed.
//! Only structural problems the loader cannot classify (a non-mapping root,
//! malformed YAML) are hard errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use confgen_doc::{load_document, DocumentValidator};
//!
//! let doc = load_document("switch_data.yaml").unwrap();
//! let report = DocumentValidator::validate(&doc);
//! for finding in report.iter() {
//!     eprintln!("Validation: {}", finding.message());
//! }
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod report;
mod rules;
pub mod validator;

pub use document::InputDocument;
pub use error::{DocError, DocResult};
pub use loader::{load_document, parse_document};
pub use report::{Finding, ValidationReport};
pub use validator::DocumentValidator;
