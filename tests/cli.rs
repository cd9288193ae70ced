//! Runs the built `basel-pi` binary with no arguments.

#![cfg(feature = "std")]

use std::process::Command;

fn run() -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_basel-pi"))
        .env_clear()
        .output()
        .expect("failed to launch basel-pi")
}

#[test]
fn prints_one_line_and_exits_zero() {
    let output = run();
    assert!(output.status.success(), "status: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "3.1415831043264566\n");
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn default_run_logs_nothing() {
    // Only warnings and above reach stderr; a clean run has none.
    let output = run();
    assert!(
        output.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
