use std::fs;
use std::process::Command;

fn mep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mep"))
}

#[test]
fn eval_prints_value() {
    let output = mep().args(["eval", "(2) + (17*2-30) * (5)+2 - (8/2)*4"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "8");
}

#[test]
fn eval_with_bindings() {
    let output = mep()
        .args(["eval", "--var", "x=0", "--var", "y=0", "sin(x)+cos(y)"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

#[test]
fn eval_reports_syntax_error() {
    let output = mep().args(["eval", "((2)) * ((3"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing `)`"));
    assert!(stderr.contains("1 | ((2)) * ((3"));
}

#[test]
fn eval_json_report() {
    let output = mep().args(["eval", "--json", "6 + c"]).output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["value"], 7.0);
    assert_eq!(report["rendered"], "(6.00 + c)");
    assert_eq!(report["variables"][0], "c");
}

#[test]
fn strict_mode_rejects_unbound() {
    let output = mep().args(["eval", "--strict", "6 + c"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unbound variables: c"));
}

#[test]
fn render_and_tokens() {
    let output = mep().args(["render", "2^2^2"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "(2.00 ^ (2.00 ^ 2.00))");

    let output = mep().args(["tokens", "-x"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["sign `-`@1:1", "variable `x`@1:2", "end of input@1:3"]);
}

#[test]
fn json_prints_tree() {
    let output = mep().args(["json", "abs(x)"]).output().unwrap();
    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["type"], "Unary");
    assert_eq!(tree["function"], "abs");
    assert_eq!(tree["child"]["text"], "x");
}

#[test]
fn functions_lists_registry() {
    let output = mep().arg("functions").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 10);
    assert!(names.contains(&"log10"));
}

#[test]
fn batch_file_runs_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");
    fs::write(&path, "# cases\n1 -1 + 2 - 2 + 4 - 4 + 6\n\n(67 + 2 * 3 - 67 + 2/1 - 7)\n").unwrap();

    let output = mep().arg("batch").arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("value = 6\n"));
    assert!(stdout.contains("value = 1\n"));
}

#[test]
fn batch_fails_on_bad_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1+1\n(((((4))))\n").unwrap();

    let output = mep().arg("batch").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 2 expressions failed"));
}

#[test]
fn batch_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = mep().arg("batch").arg(dir.path().join("nope.txt")).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
