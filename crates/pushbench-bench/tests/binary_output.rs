//! End-to-end: run the `pushbench` binary and check its stdout shape.

use std::process::Command;

fn run_binary() -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_pushbench"))
        .env_remove("RUST_LOG")
        .output()
        .expect("pushbench binary should launch");
    assert!(output.status.success(), "exit status: {}", output.status);
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

/// Parse `Rust Average over 5 trials <number> ms` and return the number.
fn parse_average(line: &str) -> f64 {
    let rest = line
        .strip_prefix("Rust Average over 5 trials ")
        .unwrap_or_else(|| panic!("unexpected result line: {line:?}"));
    let number = rest
        .strip_suffix(" ms")
        .unwrap_or_else(|| panic!("result line lacks ms suffix: {line:?}"));
    number
        .parse()
        .unwrap_or_else(|e| panic!("duration {number:?} is not a number: {e}"))
}

#[test]
fn prints_exactly_three_lines() {
    let stdout = run_binary();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3, "stdout was {stdout:?}");
    assert_eq!(lines[0], "=====Executing Benchmark Test in Rust=====");
    assert_eq!(lines[1], "Pushing Back 1,000,000 Test strings");

    let average = parse_average(lines[2]);
    assert!(average.is_finite());
    assert!(average >= 0.0);
}

#[test]
fn repeated_runs_share_structure() {
    let first = run_binary();
    let second = run_binary();

    let a: Vec<&str> = first.lines().collect();
    let b: Vec<&str> = second.lines().collect();
    assert_eq!(a.len(), b.len());
    assert_eq!(a[..2], b[..2]);
    parse_average(a[2]);
    parse_average(b[2]);
}
