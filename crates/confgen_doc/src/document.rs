//! The decoded input document.

use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// A decoded data document: a mapping from string keys to arbitrarily
/// nested YAML values.
///
/// Created once per invocation by the loader and read-only thereafter. The
/// root is guaranteed to be a mapping; the loader rejects anything else
/// before this type is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDocument {
    root: Mapping,
}

impl InputDocument {
    pub(crate) fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Look up a top-level value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Whether a top-level key is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// The top-level entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.root.iter()
    }

    /// The raw root mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }
}

/// Serializes as the bare root mapping, so the document's top-level keys
/// become directly addressable bindings when handed to a template engine.
impl Serialize for InputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

/// Human-readable name for a YAML value's shape, used in diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Renders a scalar for inclusion in a finding message.
pub(crate) fn scalar_display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| value_kind(other).to_string()),
    }
}
