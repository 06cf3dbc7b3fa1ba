use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const FLEXDOC: &str = env!("CARGO_BIN_EXE_flexdoc");

fn flexdoc(dir: &Path, args: &[&str]) -> Output {
    Command::new(FLEXDOC)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run flexdoc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn view_without_input_prints_placeholder() {
    let tmp = tempfile::tempdir().unwrap();
    let output = flexdoc(tmp.path(), &["view"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "No OpenAPI specification provided");
}

#[test]
fn view_sample_with_selection_and_toggles() {
    let tmp = tempfile::tempdir().unwrap();
    let output = flexdoc(
        tmp.path(),
        &[
            "view",
            "--sample",
            "--select",
            "post-/products",
            "--toggle",
            "responses",
            "--toggle",
            "group:Products",
        ],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("v Products (5)"));
    assert!(out.contains("  * POST    /products  Create a new product"));
    assert!(out.contains("403  Forbidden - Admin privileges required"));
}

#[test]
fn view_rejects_bad_section() {
    let tmp = tempfile::tempdir().unwrap();
    let output = flexdoc(tmp.path(), &["view", "--sample", "--toggle", "codeExamples"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("invalid --toggle codeExamples"));
}

#[test]
fn config_input_and_options_are_used() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("api.json"),
        r#"{"openapi":"3.0.3","info":{"title":"Json API","version":"2"},
            "paths":{"/ping":{"get":{"summary":"Ping","tags":["Health"]}}}}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join(".flexdoc.yaml"),
        "input: api.json\noptions:\n  doc_expansion: list\n",
    )
    .unwrap();

    let output = flexdoc(tmp.path(), &["view"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Json API  v2"));
    assert!(out.contains("v Health (1)"));
    assert!(out.contains("GET     /ping  Ping"));
}

#[test]
fn sample_flag_wins_over_config_input() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("api.yaml"),
        "openapi: 3.0.0\ninfo: {title: Local API, version: '1'}\npaths: {}\n",
    )
    .unwrap();
    fs::write(tmp.path().join(".flexdoc.yaml"), "input: api.yaml\n").unwrap();

    let out = stdout(&flexdoc(tmp.path(), &["view"]));
    assert!(out.contains("Local API"));
    let out = stdout(&flexdoc(tmp.path(), &["view", "--sample"]));
    assert!(out.contains("E-commerce API"));
    assert!(!out.contains("Local API"));

    let output = flexdoc(tmp.path(), &["view", "--sample", "-i", "api.yaml"]);
    assert!(!output.status.success());
}

#[test]
fn stats_json_for_sample() {
    let tmp = tempfile::tempdir().unwrap();
    let output = flexdoc(tmp.path(), &["stats", "--sample", "--format", "json"]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["endpoints"], 8);
    assert_eq!(stats["servers"], 2);
    assert_eq!(stats["tags"], 3);
    assert_eq!(stats["security_schemes"], 1);
    assert_eq!(stats["methods"]["GET"], 3);
    assert_eq!(stats["groups"][1]["name"], "Products");
    assert_eq!(stats["groups"][1]["endpoints"], 5);
}

#[test]
fn stats_without_document_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let output = flexdoc(tmp.path(), &["stats"]);
    assert!(!output.status.success());
}

#[test]
fn validate_reports_unsupported_version() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("old.yaml");
    fs::write(&path, "swagger: '2.0'\nopenapi: '2.0'\ninfo: {title: Old, version: '1'}\npaths: {}\n").unwrap();
    let output = flexdoc(tmp.path(), &["validate", "-i", "old.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported OpenAPI version"));

    let sample = flexdoc(tmp.path(), &["sample"]);
    fs::write(tmp.path().join("sample.yaml"), &sample.stdout).unwrap();
    let output = flexdoc(tmp.path(), &["validate", "-i", "sample.yaml"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Operations: 8"));
}

#[test]
fn html_written_to_file() {
    let tmp = tempfile::tempdir().unwrap();
    let output = flexdoc(
        tmp.path(),
        &["html", "--sample", "--theme", "light", "-o", "viewer.html"],
    );
    assert!(output.status.success());
    let page = fs::read_to_string(tmp.path().join("viewer.html")).unwrap();
    assert!(page.contains(r#"data-theme="light""#));
    assert!(page.contains("E-commerce API"));
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(flexdoc(tmp.path(), &["init"]).status.success());
    assert!(tmp.path().join(".flexdoc.yaml").exists());
    assert!(!flexdoc(tmp.path(), &["init"]).status.success());
    assert!(flexdoc(tmp.path(), &["init", "--force"]).status.success());
}

#[test]
fn explore_reads_commands_from_stdin() {
    let tmp = tempfile::tempdir().unwrap();
    let mut child = Command::new(FLEXDOC)
        .args(["explore", "--sample"])
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"search login\ntoggle group:Authentication\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Search: login"));
    assert!(out.contains("POST    /auth/login  User login"));
}
