//! Validation findings and the report that collects them.

/// One discovered validation problem.
///
/// All findings currently carry the same severity; whether a finding is
/// fatal is decided by the caller's strict/permissive policy, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    message: String,
}

impl Finding {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered collection of validation findings.
///
/// Insertion order is discovery order: required-key checks first, then
/// per-collection element checks in document order. An empty report means
/// the document is fully valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.findings.push(Finding::new(message));
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    /// The finding messages, in discovery order.
    pub fn messages(&self) -> Vec<&str> {
        self.findings.iter().map(Finding::message).collect()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}
