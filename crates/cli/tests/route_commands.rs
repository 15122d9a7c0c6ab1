use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn drift_nav() -> Command {
    let mut cmd = Command::cargo_bin("drift-nav").expect("binary");
    cmd.env_remove("DRIFT_ROUTER_PROFILE").env("RUST_LOG", "warn");
    cmd
}

fn run_json(args: &[&str]) -> (bool, Value) {
    let output = drift_nav().args(args).output().expect("command run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

#[test]
fn route_refactor_request_returns_fixed_sequence() {
    let (ok, body) = run_json(&["route", "please", "REFACTOR", "the", "billing", "module", "--json"]);
    assert!(ok);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"]["category"], "refactor");
    assert_eq!(body["data"]["matched_keyword"], "refactor");
    assert_eq!(body["data"]["fallback"], false);
    let tools: Vec<&str> = body["data"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["tool"].as_str().unwrap())
        .collect();
    assert_eq!(
        tools,
        ["drift_impact_analysis", "drift_coupling", "drift_test_topology"]
    );
}

#[test]
fn route_unknown_request_falls_back() {
    let (ok, body) = run_json(&["route", "what time is it", "--json"]);
    assert!(ok);
    assert_eq!(body["data"]["category"], Value::Null);
    assert_eq!(body["data"]["fallback"], true);
    assert_eq!(body["data"]["steps"][0]["tool"], "drift_status");
}

#[test]
fn classify_human_output() {
    drift_nav()
        .args(["classify", "run", "a", "security", "audit"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("security-review"));

    drift_nav()
        .args(["classify", "what", "time", "is", "it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn sequence_rejects_unknown_category_with_envelope() {
    let (ok, body) = run_json(&["sequence", "deploy", "--json"]);
    assert!(!ok, "expected non-zero exit for unknown category");
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "unknown_category");
    let hint = body["error"]["hint"].as_str().unwrap_or_default();
    assert!(hint.contains("security-review"), "{hint}");
}

#[test]
fn sequence_accepts_any_case() {
    let (ok, body) = run_json(&["sequence", "Security_Review", "--json"]);
    assert!(ok);
    assert_eq!(body["data"]["category"], "security-review");
    assert_eq!(body["data"]["steps"][2]["tool"], "drift_env");
}

#[test]
fn lookup_found_and_missing() {
    let (ok, body) = run_json(&["lookup", "who calls processPayment?", "--json"]);
    assert!(ok);
    assert_eq!(body["data"]["found"], true);
    assert_eq!(body["data"]["lookup"]["tool"], "drift_callers");
    assert_eq!(body["data"]["lookup"]["exampleArgs"]["function"], "processPayment");

    let (ok, body) = run_json(&["lookup", "what time is it", "--json"]);
    assert!(ok);
    assert_eq!(body["data"]["found"], false);
    assert_eq!(body["next_actions"][0]["tool"], "route");
}

#[test]
fn capabilities_document_shape() {
    let output = drift_nav().arg("capabilities").output().expect("run");
    assert!(output.status.success());
    let doc: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert!(doc["summary"].is_string());
    let guide = &doc["agentNavigationGuide"];
    assert!(guide["decisionTree"].as_array().unwrap().len() >= 16);
    assert!(!guide["surgicalLookups"].as_array().unwrap().is_empty());
    assert!(!guide["commonMistakes"].as_array().unwrap().is_empty());
    assert!(doc["layers"].is_array());
    assert!(!doc["quickStart"]["steps"].as_array().unwrap().is_empty());
}

#[test]
fn profile_rules_take_priority() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("team.toml");
    fs::write(
        &path,
        "[[rules]]\ncategory = \"testing\"\nkeywords = [\"flaky\"]\n",
    )
    .unwrap();

    let output = drift_nav()
        .arg("--profile")
        .arg(&path)
        .args(["classify", "fix the flaky checkout spec", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["data"]["category"], "testing");
    assert_eq!(body["data"]["matched_keyword"], "flaky");
}

#[test]
fn profile_from_env_is_validated() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{ "rules": [], "oops": true }"#).unwrap();

    let output = drift_nav()
        .env("DRIFT_ROUTER_PROFILE", &path)
        .args(["route", "refactor it", "--json"])
        .output()
        .expect("run");
    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["error"]["code"], "profile_invalid");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("oops"), "{message}");
}

#[test]
fn categories_lists_priority_order() {
    let (ok, body) = run_json(&["categories", "--json"]);
    assert!(ok);
    let tags = body["data"]["categories"].as_array().unwrap();
    assert_eq!(tags.len(), 15);
    assert_eq!(tags[0], "refactor");
    assert_eq!(tags[14], "code-generation");
}

#[test]
fn profile_with_unknown_category_is_reported_as_profile_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("team.json");
    fs::write(
        &path,
        r#"{ "rules": [ { "category": "deploy", "keywords": ["x"] } ] }"#,
    )
    .unwrap();

    let output = drift_nav()
        .arg("--profile")
        .arg(&path)
        .args(["route", "refactor it", "--json"])
        .output()
        .expect("run");
    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["error"]["code"], "profile_invalid");
    assert!(body["next_actions"].is_null(), "{body}");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("rules[0].category"), "{message}");
}

#[test]
fn lookup_honors_profile_selection() {
    let tmp = tempdir().unwrap();
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, r#"{ "rules": [], "oops": true }"#).unwrap();

    let output = drift_nav()
        .env("DRIFT_ROUTER_PROFILE", &bad)
        .args(["lookup", "who calls processPayment?", "--json"])
        .output()
        .expect("run");
    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["error"]["code"], "profile_invalid");

    let good = tmp.path().join("ops.toml");
    fs::write(
        &good,
        "[[rules]]\ncategory = \"understanding\"\nkeywords = [\"runbook\"]\n",
    )
    .unwrap();
    let output = drift_nav()
        .arg("--profile")
        .arg(&good)
        .args(["lookup", "open the runbook", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["data"]["found"], false);
    let reason = body["next_actions"][0]["reason"].as_str().unwrap_or_default();
    assert!(reason.contains("understanding"), "{reason}");
}
