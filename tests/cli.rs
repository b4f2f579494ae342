use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn cli_stdin_stdout_basic() {
    let mut cmd = Command::cargo_bin("jsonmend").unwrap();
    cmd.write_stdin("{'a':1, b: 'x'}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a":1,"b":"x"}"#));
}

#[test]
fn cli_file_to_file() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    fs::write(&inp, "{a:1}\n{b:2}\n").unwrap();
    Command::cargo_bin("jsonmend")
        .unwrap()
        .args([inp.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success();
    let s = fs::read_to_string(out).unwrap();
    assert_eq!(s.trim_end(), r#"[{"a":1},{"b":2}]"#);
}

#[test]
fn cli_pretty() {
    let mut cmd = Command::cargo_bin("jsonmend").unwrap();
    cmd.arg("--pretty")
        .write_stdin("{a: [1]}")
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n  \"a\": [\n    1\n  ]\n}"));
}

#[cfg(feature = "logging")]
#[test]
fn cli_logs_go_to_stderr() {
    let mut cmd = Command::cargo_bin("jsonmend").unwrap();
    cmd.arg("--logs")
        .write_stdin("[1, /* note */ 2]")
        .assert()
        .success()
        .stderr(predicate::str::contains("block comment"));
}

#[test]
fn cli_chunked_file() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("in.json");
    fs::write(&inp, r#"{"a": "some longer text", "b": [1, 2]}"#).unwrap();
    Command::cargo_bin("jsonmend")
        .unwrap()
        .args(["--chunked", "--chunk-size", "8", inp.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""b":[1,2]"#));
}

#[test]
fn cli_unknown_option_fails() {
    Command::cargo_bin("jsonmend")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure();
}
