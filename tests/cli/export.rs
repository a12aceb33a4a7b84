//! Tests for manifest export.

use std::fs;
use std::process::Stdio;

use crate::support::*;

#[test]
fn test_export_to_stdout() {
    let t = Test::standard();

    let output = t.export("db-creds");
    assert_success(&output);
    assert_eq!(stdout(&output), DB_CREDS_YAML);
    assert_eq!(
        t.kubectl_calls(),
        vec!["get secret db-creds -o json"]
    );
}

#[test]
fn test_export_strips_cluster_metadata() {
    let t = Test::standard();

    let output = t.export("db-creds");
    assert_success(&output);
    for field in ["uid", "resourceVersion", "creationTimestamp", "annotations", "namespace"] {
        assert_stdout_excludes(&output, field);
    }
}

#[test]
fn test_export_defaults_type_to_opaque() {
    let t = Test::standard();

    let output = t.export("api-key");
    assert_success(&output);
    assert_stdout_contains(&output, "type: Opaque\n");
    assert_stdout_contains(&output, "  TOKEN: c2VjcmV0\n");
}

#[test]
fn test_export_keeps_declared_type() {
    let t = Test::new(FakeKubectl::new().secret(
        "tls",
        Some("kubernetes.io/tls"),
        &[("tls.crt", "Y2VydA=="), ("tls.key", "a2V5")],
    ));

    let output = t.export("tls");
    assert_success(&output);
    assert_stdout_contains(&output, "type: kubernetes.io/tls\n");
    assert_stdout_contains(&output, "  tls.crt: Y2VydA==\n");
}

#[test]
fn test_export_to_file() {
    let t = Test::standard();

    let output = t.export_to("db-creds", "db-creds.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "✓ exported 'db-creds' to db-creds.yaml");

    let written = fs::read_to_string(t.path("db-creds.yaml")).unwrap();
    assert_eq!(written, DB_CREDS_YAML);
}

#[test]
fn test_export_to_full_device_fails_cleanly() {
    let Ok(full) = fs::OpenOptions::new().write(true).open("/dev/full") else {
        return;
    };
    let t = Test::standard();

    let output = t
        .process()
        .args(["db-creds", "--export"])
        .stdin(Stdio::null())
        .stdout(full)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "io error");
    assert_stderr_contains(&output, "No space left on device");
}

#[test]
fn test_export_dash_means_stdout() {
    let t = Test::standard();

    let output = t.export_to("db-creds", "-");
    assert_success(&output);
    assert_eq!(stdout(&output), DB_CREDS_YAML);
    assert!(!t.path("-").exists());
}

#[test]
fn test_export_not_found_writes_no_file() {
    let t = Test::new(FakeKubectl::standard().hollow("ghost"));

    let output = t.export_to("ghost", "ghost.yaml");
    assert_failure(&output);
    assert!(!t.path("ghost.yaml").exists());
}

#[test]
fn test_output_requires_export() {
    let t = Test::standard();

    let output = t
        .cmd()
        .args(["db-creds", "--output", "x.yaml"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(t.kubectl_calls().is_empty());
}
