//! Tests for the decoded table view.

use crate::support::*;

#[test]
fn test_view_shows_decoded_value() {
    let t = Test::standard();

    let output = t.view("api-key");
    assert_success(&output);
    assert_stdout_contains(&output, "api-key");
    assert_stdout_contains(&output, "│ TOKEN │ secret │");
    assert_stdout_excludes(&output, "c2VjcmV0");
}

#[test]
fn test_view_issues_data_query() {
    let t = Test::standard();

    assert_success(&t.view("db-creds"));
    assert_eq!(
        t.kubectl_calls(),
        vec!["get secret db-creds -o jsonpath={.data}"]
    );
}

#[test]
fn test_view_multiple_keys() {
    let t = Test::new(FakeKubectl::new().secret(
        "app",
        None,
        &[("USER", "YWRtaW4="), ("URL", "cG9zdGdyZXM6Ly9kYg==")],
    ));

    let output = t.view("app");
    assert_success(&output);
    assert_stdout_contains(&output, "admin");
    assert_stdout_contains(&output, "postgres://db");
}

#[test]
fn test_view_empty_secret() {
    let t = Test::new(FakeKubectl::new().secret("empty", None, &[]));

    let output = t.view("empty");
    assert_success(&output);
    assert_stdout_contains(&output, "no keys");
}

#[test]
fn test_view_unicode_value() {
    // "こんにちは"
    let t = Test::new(FakeKubectl::new().secret(
        "greeting",
        None,
        &[("HELLO", "44GT44KT44Gr44Gh44Gv")],
    ));

    let output = t.view("greeting");
    assert_success(&output);
    assert_stdout_contains(&output, "こんにちは");
}

#[test]
fn test_view_namespace_and_context_are_forwarded() {
    let t = Test::standard();

    let output = t
        .cmd()
        .args(["api-key", "--namespace", "prod", "--context", "east"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(
        t.kubectl_calls(),
        vec!["get secret api-key -o jsonpath={.data} --namespace prod --context east"]
    );
}

#[test]
fn test_view_namespace_from_env() {
    let t = Test::standard();

    let output = t
        .cmd()
        .env("KUBESECRET_NAMESPACE", "staging")
        .arg("api-key")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.kubectl_calls()[0].ends_with("--namespace staging"));
}
