//! End-to-end tests for the `desrever` binary.

use std::io::Write;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn program(source: &str) -> NamedTempFile {
    let mut file = match NamedTempFile::new() {
        Ok(file) => file,
        Err(e) => panic!("cannot create temp file: {e}"),
    };
    if let Err(e) = file.write_all(source.as_bytes()) {
        panic!("cannot write temp file: {e}");
    }
    file
}

fn desrever(args: &[&str]) -> Output {
    match Command::new(env!("CARGO_BIN_EXE_desrever"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
    {
        Ok(output) => output,
        Err(e) => panic!("cannot run desrever: {e}"),
    }
}

fn run(source: &str, extra: &[&str]) -> Output {
    let file = program(source);
    let path = file.path().to_string_lossy().into_owned();
    let mut args = vec!["run", path.as_str()];
    args.extend_from_slice(extra);
    desrever(&args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn runs_program() {
    let output = run(
        "tni x = 2; rof (x) { prit(x * 10); } fi (x == 2) { prit('k'); }",
        &[],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "20\n20\nk\n");
}

#[test]
fn runtime_error_exits_with_diagnostic() {
    let output = run("prit(1);\nprit(1 / 0);\nprit(2);", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n");
    let err = stderr(&output);
    assert!(err.contains("division by zero"), "{err}");
}

#[test]
fn lex_error_runs_nothing() {
    let output = run("prit(1); prit(#);", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("unexpected character '#'"));
}

#[test]
fn dump_env_goes_to_stderr() {
    let output = run("tni b = 1; rahc a = 'z';", &["--dump-env"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "Variables (2):\n  a = z (char)\n  b = 1 (int)\n"
    );
}

#[test]
fn lex_command_lists_tokens() {
    let file = program("prit(eurt);");
    let path = file.path().to_string_lossy().into_owned();
    let output = desrever(&["lex", &path]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("(6 tokens)"), "{out}");
    assert!(out.contains("  True(\"eurt\") @ 5..9"), "{out}");
    assert!(out.contains("  Eof(\"\") @ 11..11"), "{out}");
}

#[test]
fn missing_file_is_reported() {
    let output = desrever(&["run", "definitely/not/here.dsv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn missing_path_argument() {
    let output = desrever(&["run"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing file path"));
}

#[test]
fn unknown_command() {
    let output = desrever(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}

#[test]
fn version_and_help() {
    let version = desrever(&["--version"]);
    assert!(version.status.success());
    assert!(stdout(&version).starts_with("desrever "));

    let help = desrever(&["help"]);
    assert!(help.status.success());
    assert!(stdout(&help).contains("run <file>"));
}
