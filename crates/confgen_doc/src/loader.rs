//! Data document loading.

use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::document::{value_kind, InputDocument};
use crate::error::{DocError, DocResult};

/// Load and decode a YAML data file.
///
/// The decoded root must be a non-empty mapping; a scalar or sequence root
/// is a hard load-time error, never a validation finding.
pub fn load_document(path: impl AsRef<Path>) -> DocResult<InputDocument> {
    let path = path.as_ref();
    debug!("Loading data document from {:?}", path);

    let content = fs::read_to_string(path)?;
    parse_document(&content)
}

/// Decode YAML text into an [`InputDocument`].
pub fn parse_document(content: &str) -> DocResult<InputDocument> {
    let value: Value = serde_yaml::from_str(content)?;
    match value {
        Value::Null => Err(DocError::Empty),
        Value::Mapping(root) if root.is_empty() => Err(DocError::Empty),
        Value::Mapping(root) => Ok(InputDocument::new(root)),
        other => Err(DocError::RootNotMapping(value_kind(&other))),
    }
}
