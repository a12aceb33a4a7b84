//! Tests for failure reporting and CLI flags.

use crate::support::*;

#[test]
fn test_hollow_output_is_not_found() {
    let t = Test::new(FakeKubectl::standard().hollow("ghost"));

    let output = t.view("ghost");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret 'ghost' not found");
    assert_stderr_contains(&output, "SecretNotFound");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_hollow_export_is_not_found() {
    let t = Test::new(FakeKubectl::standard().hollow("ghost"));

    let output = t.export("ghost");
    assert_failure(&output);
    assert_stderr_contains(&output, "secret 'ghost' not found");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_kubectl_stderr_is_shown_and_not_fatal() {
    let t = Test::standard();

    let output = t.view("missing");
    assert_success(&output);
    assert_stderr_contains(&output, "✗ Error from server (NotFound)");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_kubectl_failure_during_listing() {
    let t = Test::new(FakeKubectl::new().failing("error: You must be logged in to the server"));

    let output = t.select("1\n");
    assert_success(&output);
    assert_stderr_contains(&output, "You must be logged in");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_base64_fails() {
    let t = Test::new(FakeKubectl::new().secret("bad", None, &[("KEY", "!!!")]));

    let output = t.view("bad");
    assert_failure(&output);
    assert_stderr_contains(&output, "'KEY' is not valid base64");
}

#[test]
fn test_missing_kubectl_binary() {
    let t = Test::standard();

    let output = t
        .cmd()
        .args(["api-key", "--kubectl", "/nonexistent/kubectl"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "kubectl binary not found");
    assert_stderr_contains(&output, "--kubectl");
}

#[test]
fn test_help() {
    let t = Test::standard();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "--export");
    assert_stdout_contains(&output, "--output");
}

#[test]
fn test_version_flag() {
    let t = Test::standard();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "kubesecret");
}

#[test]
fn test_completions_bash() {
    let t = Test::standard();

    let output = t.cmd().args(["--completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_kubesecret") || out.contains("complete"));
    assert!(t.kubectl_calls().is_empty());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::standard();

    let output = t.cmd().args(["--verbose", "api-key"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_stdout_excludes(&output, "DEBUG");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::standard();

    let output = t.view("api-key");
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("TRACE"));
}
