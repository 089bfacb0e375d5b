//! Integration tests for document loading and validation.

use std::fs;

use tempfile::tempdir;

use confgen_doc::{load_document, DocError, DocumentValidator};

/// Load a realistic switch document from disk and validate it end to end.
#[test]
fn test_load_and_validate_full_document() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("switch_data.yaml");
    fs::write(
        &path,
        r#"hostname: SW-CORE-01
device_type: switch
interfaces:
  - name: GigabitEthernet0/1
    mode: access
    vlan: 10
  - name: GigabitEthernet0/2
    mode: trunk
vlans:
  - id: 10
    name: users
  - id: 20
    name: servers
ntp_servers:
  - 192.0.2.1
  - 192.0.2.2
"#,
    )
    .unwrap();

    let doc = load_document(&path).unwrap();
    let report = DocumentValidator::validate(&doc);
    assert!(report.is_empty(), "unexpected findings: {:?}", report.messages());
}

/// A document with an out-of-range interface mode yields exactly one finding
/// citing the interface and the offending value.
#[test]
fn test_invalid_mode_finding_cites_interface() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("switch_data.yaml");
    fs::write(
        &path,
        "hostname: SW1\ndevice_type: switch\ninterfaces:\n  - name: Gi0/1\n    mode: hybrid\n",
    )
    .unwrap();

    let doc = load_document(&path).unwrap();
    let report = DocumentValidator::validate(&doc);
    assert_eq!(
        report.messages(),
        vec!["Interface 'Gi0/1' has invalid mode 'hybrid' (expected 'access' or 'trunk')"]
    );
}

/// Validation always completes the full pass; one failing check does not
/// suppress the others.
#[test]
fn test_full_pass_collects_every_finding() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("switch_data.yaml");
    fs::write(
        &path,
        "device_type: switch\ninterfaces:\n  - mode: hybrid\nvlans:\n  - no_id: true\n",
    )
    .unwrap();

    let doc = load_document(&path).unwrap();
    let report = DocumentValidator::validate(&doc);
    assert_eq!(
        report.messages(),
        vec![
            "Missing required top-level key: 'hostname'",
            "Interface #1 missing 'name'",
            "Interface '?' has invalid mode 'hybrid' (expected 'access' or 'trunk')",
            "Each VLAN must be a mapping with at least an 'id' key",
        ]
    );
}

/// A sequence at the root is rejected at load time, not as a finding.
#[test]
fn test_sequence_root_is_load_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("bad.yaml");
    fs::write(&path, "- hostname: SW1\n").unwrap();

    let result = load_document(&path);
    assert!(matches!(result, Err(DocError::RootNotMapping(_))));
}
