//! Declarative shape rules for the data document.
//!
//! The validator walks these tables with a generic shape checker, so adding
//! a required field or a new collection is additive data, not a new code
//! path.

/// Top-level keys that must be present in the root mapping, regardless of
/// value type or emptiness.
pub(crate) const REQUIRED_KEYS: &[&str] = &["hostname", "device_type"];

/// A field-level check applied to each mapping element of a sequence.
pub(crate) enum FieldCheck {
    /// The key must be present in the element.
    Required(&'static str),
    /// If the key is present, its value must be one of the allowed tokens.
    OneOf {
        key: &'static str,
        allowed: &'static [&'static str],
    },
}

/// How the elements of a sequence are checked.
pub(crate) enum ElementPolicy {
    /// Only the sequence shape itself is enforced.
    Any,
    /// Every element must be a mapping containing `key`; any violation
    /// yields the single combined `message`, one per offending element.
    MappingWithKey {
        key: &'static str,
        message: &'static str,
    },
    /// Elements are mappings checked field by field. Findings identify the
    /// element by `label` and its 1-based position; a non-mapping element
    /// gets one finding and skips the field checks.
    PerField {
        label: &'static str,
        checks: &'static [FieldCheck],
    },
}

/// A top-level key that, when present, must hold a sequence.
pub(crate) struct SequenceRule {
    pub key: &'static str,
    pub elements: ElementPolicy,
}

pub(crate) const SEQUENCE_RULES: &[SequenceRule] = &[
    SequenceRule {
        key: "interfaces",
        elements: ElementPolicy::PerField {
            label: "Interface",
            checks: &[
                FieldCheck::Required("name"),
                FieldCheck::OneOf {
                    key: "mode",
                    allowed: &["access", "trunk"],
                },
            ],
        },
    },
    SequenceRule {
        key: "vlans",
        elements: ElementPolicy::MappingWithKey {
            key: "id",
            message: "Each VLAN must be a mapping with at least an 'id' key",
        },
    },
    SequenceRule {
        key: "ntp_servers",
        elements: ElementPolicy::Any,
    },
];
