//! Document validation.

use serde_yaml::Value;
use tracing::debug;

use crate::document::{scalar_display, InputDocument};
use crate::report::ValidationReport;
use crate::rules::{ElementPolicy, FieldCheck, SequenceRule, REQUIRED_KEYS, SEQUENCE_RULES};

/// Validator for data documents.
///
/// Checks the document against the shape the configuration templates
/// expect. Content problems never abort the pass; every check runs and
/// every finding is collected, in discovery order.
pub struct DocumentValidator;

impl DocumentValidator {
    /// Run the full check set over a document.
    pub fn validate(doc: &InputDocument) -> ValidationReport {
        let mut report = ValidationReport::new();

        for key in REQUIRED_KEYS {
            if !doc.contains_key(key) {
                report.push(format!("Missing required top-level key: '{key}'"));
            }
        }

        for rule in SEQUENCE_RULES {
            Self::check_sequence(doc, rule, &mut report);
        }

        debug!("Validation finished with {} finding(s)", report.len());
        report
    }

    fn check_sequence(doc: &InputDocument, rule: &SequenceRule, report: &mut ValidationReport) {
        let Some(value) = doc.get(rule.key) else {
            return;
        };
        let Value::Sequence(items) = value else {
            report.push(format!("Key '{}' must be a list", rule.key));
            return;
        };

        match &rule.elements {
            ElementPolicy::Any => {}
            ElementPolicy::MappingWithKey { key, message } => {
                for item in items {
                    if !item.is_mapping() || item.get(*key).is_none() {
                        report.push(*message);
                    }
                }
            }
            ElementPolicy::PerField { label, checks } => {
                for (index, item) in items.iter().enumerate() {
                    Self::check_element(label, index + 1, item, checks, report);
                }
            }
        }
    }

    fn check_element(
        label: &str,
        position: usize,
        item: &Value,
        checks: &[FieldCheck],
        report: &mut ValidationReport,
    ) {
        if !item.is_mapping() {
            report.push(format!("{label} #{position} must be a mapping/object"));
            return;
        }

        for check in checks {
            match check {
                FieldCheck::Required(key) => {
                    if item.get(*key).is_none() {
                        report.push(format!("{label} #{position} missing '{key}'"));
                    }
                }
                FieldCheck::OneOf { key, allowed } => {
                    let Some(value) = item.get(*key) else {
                        continue;
                    };
                    let valid = value.as_str().is_some_and(|s| allowed.contains(&s));
                    if !valid {
                        let name = item
                            .get("name")
                            .and_then(Value::as_str)
                            .unwrap_or("?");
                        let expected = allowed
                            .iter()
                            .map(|a| format!("'{a}'"))
                            .collect::<Vec<_>>()
                            .join(" or ");
                        report.push(format!(
                            "{label} '{name}' has invalid {key} '{}' (expected {expected})",
                            scalar_display(value)
                        ));
                    }
                }
            }
        }
    }
}
