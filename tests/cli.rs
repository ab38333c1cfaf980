use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("yamlcfg").unwrap()
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn translate(input: &Path, output: &Path) -> assert_cmd::assert::Assert {
    cmd().arg(input).arg(output).assert()
}

#[test]
fn success_writes_output_and_message() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "a: \"1\"\nb: \"|a|-2\"\nc: \"@a\"\n");
    let output = ws.path("out.config");

    translate(&input, &output)
        .success()
        .stdout(contains("Translation completed successfully. Output written to"))
        .stderr(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "def a = @\"1\";\ndef b = @\"1-2\";\ndef c = @\"1\";"
    );
}

#[test]
fn missing_input_file() {
    let ws = Workspace::new();
    let output = ws.path("out.config");

    translate(&ws.path("nope.yaml"), &output)
        .code(1)
        .stderr(contains("Error: Input file"))
        .stderr(contains("does not exist."));
    assert!(!output.exists());
}

#[test]
fn malformed_yaml() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "key: [unclosed\n");

    translate(&input, &ws.path("out.config"))
        .code(1)
        .stderr(contains("Error parsing YAML:"));
}

#[test]
fn root_must_be_mapping() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "- a\n- b\n");

    translate(&input, &ws.path("out.config"))
        .code(1)
        .stderr(contains("Root YAML element must be a dictionary."));
}

#[test]
fn invalid_identifier_leaves_no_output() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "\"1bad\": x\n");
    let output = ws.path("out.config");

    translate(&input, &output)
        .code(1)
        .stderr(contains("Syntax error: Invalid key name: 1bad"));
    assert!(!output.exists());
}

#[test]
fn unsupported_type_leaves_no_output() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "name: ok\nenabled: true\n");
    let output = ws.path("out.config");

    translate(&input, &output)
        .code(1)
        .stderr(contains("Value error: Unsupported value type: bool"));
    assert!(!output.exists());
}

#[test]
fn unwritable_output() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "a: 1\n");

    translate(&input, &ws.path("no_such_dir/out.config"))
        .code(1)
        .stderr(contains("Error writing to file:"));
}

#[test]
fn strict_flag_rejects_forward_reference() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "a: \"|b|\"\nb: \"1\"\n");
    let output = ws.path("out.config");

    cmd()
        .arg("--strict")
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stderr(contains("Reference error: Unresolved reference '|b|' in `a`"));
    assert!(!output.exists());

    translate(&input, &output).success();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "def a = @\"|b|\";\ndef b = @\"1\";"
    );
}

#[test]
fn max_resolved_len_caps_substitution() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "a: abcd\nb: \"|a||a|\"\n");
    let output = ws.path("out.config");

    cmd()
        .args(["--max-resolved-len", "4"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("stopped resolving pipe references"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "def a = @\"abcd\";\ndef b = @\"|a||a|\";"
    );
}

#[test]
fn missing_arguments_is_usage_error() {
    cmd().arg("only_input.yaml").assert().code(2);
}

#[test]
fn verbose_logs_to_stderr() {
    let ws = Workspace::new();
    let input = ws.write("in.yaml", "a: 1\n");

    cmd()
        .arg("-v")
        .arg(&input)
        .arg(ws.path("out.config"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(contains("translated 1 definitions"));
}
