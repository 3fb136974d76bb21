//! End-to-end tests for the copybench binary.
//!
//! These run the real fixed configuration (100 iterations over one million
//! elements), so each test takes a few seconds in a debug build.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::process::Stdio;

use assert_cmd::Command;
use predicates::prelude::*;

fn copybench() -> Command {
    Command::cargo_bin("copybench").unwrap()
}

/// `<text>: <non-negative float> seconds`
fn is_timing_line(line: &str) -> bool {
    line.rsplit_once(": ")
        .and_then(|(label, rest)| Some((label, rest.strip_suffix(" seconds")?)))
        .is_some_and(|(label, number)| {
            !label.is_empty() && number.parse::<f64>().is_ok_and(|s| s >= 0.0)
        })
}

fn stdout_of(args: &[&str]) -> String {
    let output = copybench().args(args).output().unwrap();
    assert!(output.status.success(), "exit status {:?}", output.status);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn default_run_prints_header_and_six_timings() {
    let stdout = stdout_of(&[]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines.first(),
        Some(&"Running benchmarks with 100 iterations each...")
    );
    assert_eq!(
        lines.get(1),
        Some(&"Each operation handles a sequence of 1000000 integers")
    );
    assert!(lines.get(2).is_some_and(|l| l.starts_with("Build: copybench ")));
    assert_eq!(lines.iter().filter(|l| is_timing_line(l)).count(), 6);
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("Running benchmarks")).count(),
        1
    );
}

#[test]
fn default_run_orders_variants() {
    let stdout = stdout_of(&[]);
    let labels: Vec<&str> = stdout
        .lines()
        .filter(|l| is_timing_line(l))
        .filter_map(|l| l.rsplit_once(": ").map(|(label, _)| label))
        .collect();

    assert_eq!(
        labels,
        vec![
            "Pointer semantics (shallow copy) time",
            "Value semantics (deep copy) time",
            "Simulated 'move' time",
            "Return value time",
            "Slice copy time (shared backing array)",
            "Slice deep copy time (new backing array)",
        ]
    );
}

#[test]
fn moves_prints_three_timings() {
    let stdout = stdout_of(&["moves"]);
    assert_eq!(stdout.lines().filter(|l| is_timing_line(l)).count(), 3);
    assert!(stdout.contains("Move time: "));
}

#[test]
fn json_format_emits_one_object_per_sample() {
    copybench()
        .args(["moves", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"label\":\"Copy time\",\"seconds\":"))
        .stdout(predicate::str::contains("{\"label\":\"Move time\",\"seconds\":"));
}

#[test]
fn workload_size_is_not_configurable() {
    copybench()
        .args(["--size", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--size"));
}

#[test]
fn help_lists_programs() {
    copybench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("semantics"))
        .stdout(predicate::str::contains("moves"))
        .stdout(predicate::str::contains("dispatch"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn broken_stdout_pipe_exits_with_error() {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_copybench"))
        .arg("moves")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Close the read end before the benchmark reports anything
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let error_line = stderr
        .lines()
        .find(|l| l.starts_with("Error: "))
        .unwrap_or_default();

    assert_eq!(output.status.code(), Some(1));
    assert!(error_line.starts_with("Error: moves benchmark failed: I/O error: "));
    assert_eq!(error_line.matches("Broken pipe").count(), 1);
}
