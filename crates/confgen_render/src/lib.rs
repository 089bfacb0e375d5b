//! # confgen_render
//!
//! Template rendering for confgen.
//!
//! Binds a validated [`confgen_doc::InputDocument`] as the variable context
//! of a Jinja-style template and produces the final configuration text.
//! Rendering is deterministic: the same document and template always yield
//! byte-identical output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use confgen_doc::load_document;
//! use confgen_render::TemplateRenderer;
//!
//! let doc = load_document("switch_data.yaml").unwrap();
//! let renderer = TemplateRenderer::new("templates");
//! let config = renderer.render("cisco_template.j2", &doc).unwrap();
//! println!("{config}");
//! ```

pub mod error;
pub mod renderer;

pub use error::{TemplateError, TemplateResult};
pub use renderer::TemplateRenderer;
