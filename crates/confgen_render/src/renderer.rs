//! Template rendering.

use std::path::{Path, PathBuf};

use minijinja::{path_loader, Environment, ErrorKind};
use tracing::debug;

use confgen_doc::InputDocument;

use crate::error::{TemplateError, TemplateResult};

/// Renderer for configuration templates.
///
/// Templates are located by file name relative to a search root. Block tags
/// do not emit their own leading whitespace or trailing newline (trim +
/// lstrip), so rendered output is byte-for-byte reproducible across runs.
/// Variables the template references but the document does not define
/// render as empty rather than failing.
pub struct TemplateRenderer {
    env: Environment<'static>,
    search_root: PathBuf,
}

impl TemplateRenderer {
    /// Create a renderer that resolves template names under `search_root`.
    pub fn new(search_root: impl AsRef<Path>) -> Self {
        let search_root = search_root.as_ref().to_path_buf();
        let mut env = Environment::new();
        env.set_loader(path_loader(&search_root));
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        Self { env, search_root }
    }

    /// Render a named template with the document's top-level keys exposed
    /// as directly addressable template variables.
    pub fn render(&self, name: &str, doc: &InputDocument) -> TemplateResult<String> {
        debug!("Rendering template '{}' from {:?}", name, self.search_root);

        let template = self.env.get_template(name).map_err(|e| {
            if matches!(e.kind(), ErrorKind::TemplateNotFound) {
                TemplateError::NotFound(name.to_string())
            } else {
                TemplateError::RenderingFailed(describe(&e))
            }
        })?;

        template
            .render(doc)
            .map_err(|e| TemplateError::RenderingFailed(describe(&e)))
    }

    /// Render a template given its full path: the parent directory becomes
    /// the search root and the file name the template name.
    pub fn render_file(template_path: &Path, doc: &InputDocument) -> TemplateResult<String> {
        let search_root = template_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = template_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TemplateError::NotFound(template_path.display().to_string()))?;

        Self::new(search_root).render(name, doc)
    }
}

/// Flatten a minijinja error chain into one diagnostic string.
fn describe(err: &minijinja::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
