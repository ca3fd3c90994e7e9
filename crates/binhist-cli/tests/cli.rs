//! End-to-end tests against the compiled binary.

use std::process::Command;

fn binhist(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_binhist"))
        .args(args)
        .output()
        .expect("failed to run binhist")
}

#[test]
fn test_fair_coin_default_flags() {
    let output = binhist(&["4"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("0: 1   6.25%   6.25% 100.00%"));
    assert!(lines[2].starts_with("2: 6  37.50%  68.75%  68.75%"));
}

#[test]
fn test_explicit_probability_and_width() {
    let output = binhist(&["10", "-p", "1/3", "-w", "80"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 11);
    for line in stdout.lines() {
        assert!(line.chars().count() <= 80, "row too wide: {line:?}");
    }
}

#[test]
fn test_certain_failure() {
    let output = binhist(&["3", "-p", "0", "-w", "60"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("0: 1 100.00% 100.00% 100.00%"));
    assert!(lines[3].starts_with("3: 1   0.00% 100.00%   0.00%"));
}

#[test]
fn test_out_of_range_probability_fails() {
    let output = binhist(&["4", "-p", "3/2"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("between 0 and 1"), "stderr: {stderr}");
}

#[test]
fn test_unknown_style_fails() {
    let output = binhist(&["4", "-s", "wave"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown bar style"), "stderr: {stderr}");
}

#[test]
fn test_min_filter_drops_tails() {
    let output = binhist(&["4", "-m", "10", "-w", "60"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}
