//! Integration tests for the generation pipeline.

use std::fs;
use std::sync::Mutex;

use tempfile::{tempdir, TempDir};

use confgen_core::{
    DiagnosticSink, FailureKind, Level, Pipeline, PipelineOptions, PipelineError,
};

/// Sink that records every diagnostic for later assertions.
#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn all_messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

fn fixture(data: &str, template: &str) -> (TempDir, PipelineOptions) {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("data.yaml"), data).unwrap();
    fs::write(temp.path().join("config.j2"), template).unwrap();
    let options = PipelineOptions::new(
        temp.path().join("data.yaml"),
        temp.path().join("config.j2"),
        temp.path().join("out.txt"),
    );
    (temp, options)
}

fn run(options: PipelineOptions, sink: &RecordingSink) -> Result<(), PipelineError> {
    Pipeline::new(options).run(sink).map(|_| ())
}

#[test]
fn test_valid_document_renders_and_writes() {
    let (temp, options) = fixture(
        "hostname: SW1\ndevice_type: switch\n",
        "hostname {{ hostname }}\n",
    );
    let sink = RecordingSink::default();

    let outcome = Pipeline::new(options).run(&sink).unwrap();
    assert!(outcome.report.is_empty());

    let written = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    assert_eq!(written, "hostname SW1\n");
    assert!(sink.messages(Level::Error).is_empty());
}

/// Strictness law: the same findings are reported either way; only the
/// outcome and the presence of the output file differ.
#[test]
fn test_strictness_law() {
    let data = "device_type: switch\n";
    let template = "hostname {{ hostname }}\n";

    // Permissive: findings logged, run completes, file written.
    let (temp, options) = fixture(data, template);
    let permissive = RecordingSink::default();
    let outcome = Pipeline::new(options).run(&permissive).unwrap();
    assert_eq!(outcome.report.len(), 1);
    assert!(temp.path().join("out.txt").exists());

    // Strict: same findings logged, run aborts, nothing written.
    let (temp, options) = fixture(data, template);
    let strict = RecordingSink::default();
    let err = run(options.strict(true), &strict).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Validation);
    assert!(!temp.path().join("out.txt").exists());

    let expected = vec!["Validation: Missing required top-level key: 'hostname'".to_string()];
    assert_eq!(
        permissive
            .messages(Level::Error),
        expected
    );
    assert!(strict.messages(Level::Error).contains(&expected[0]));
}

#[test]
fn test_permissive_run_renders_missing_variable_as_empty() {
    let (temp, options) = fixture("device_type: switch\n", "hostname {{ hostname }}\n");
    let sink = RecordingSink::default();

    Pipeline::new(options).run(&sink).unwrap();
    let written = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    assert_eq!(written, "hostname \n");
}

/// The template is only resolved after the document has been loaded and
/// validated.
#[test]
fn test_missing_template_after_validation() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("data.yaml"), "hostname: SW1\ndevice_type: switch\n").unwrap();
    let options = PipelineOptions::new(
        temp.path().join("data.yaml"),
        temp.path().join("missing.j2"),
        temp.path().join("out.txt"),
    );
    let sink = RecordingSink::default();

    let err = run(options, &sink).unwrap_err();
    assert_eq!(err.kind(), FailureKind::TemplateNotFound);
    assert!(!temp.path().join("out.txt").exists());
    assert!(sink
        .all_messages()
        .iter()
        .any(|m| m == "Validating data..."));
}

#[test]
fn test_missing_data_file_is_io_failure() {
    let temp = tempdir().unwrap();
    let options = PipelineOptions::new(
        temp.path().join("missing.yaml"),
        temp.path().join("config.j2"),
        temp.path().join("out.txt"),
    );

    let err = run(options, &RecordingSink::default()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
}

#[test]
fn test_malformed_yaml_is_syntax_failure() {
    let (_temp, options) = fixture("hostname: [unclosed\n", "x\n");
    let err = run(options, &RecordingSink::default()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::DocumentSyntax);
}

#[test]
fn test_sequence_root_is_shape_failure() {
    let (_temp, options) = fixture("- hostname: SW1\n", "x\n");
    let err = run(options, &RecordingSink::default()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::DocumentShape);
}

#[test]
fn test_unresolvable_template_construct_is_render_failure() {
    let (temp, options) = fixture(
        "hostname: SW1\ndevice_type: switch\n",
        "{{ hostname | frobnicate }}\n",
    );
    let err = run(options, &RecordingSink::default()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Render);
    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn test_unwritable_output_is_io_failure() {
    let (temp, mut options) = fixture(
        "hostname: SW1\ndevice_type: switch\n",
        "hostname {{ hostname }}\n",
    );
    options.output_path = temp.path().join("no-such-dir").join("out.txt");

    let err = run(options, &RecordingSink::default()).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Io);
}

/// Back-to-back runs are fully independent.
#[test]
fn test_runs_share_no_state() {
    let (temp, options) = fixture(
        "hostname: SW1\ndevice_type: switch\n",
        "hostname {{ hostname }}\n",
    );
    let sink = RecordingSink::default();

    Pipeline::new(options.clone()).run(&sink).unwrap();
    let first = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    Pipeline::new(options).run(&sink).unwrap();
    let second = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    assert_eq!(first, second);
}
