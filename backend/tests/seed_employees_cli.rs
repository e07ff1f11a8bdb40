//! Process-level checks for the `seed-employees` binary.

use std::process::Command;

use rstest::rstest;

const SEED_BIN: &str = env!("CARGO_BIN_EXE_seed-employees");

#[rstest]
fn unreachable_database_exits_with_failure_and_logs_to_stderr() {
    let output = Command::new(SEED_BIN)
        .env("SEED_DATABASE_URL", "postgres://seed@127.0.0.1:1/travel_planner")
        .env("SEED_CONNECT_TIMEOUT_SECS", "1")
        .env_remove("DATABASE_URL")
        .env_remove("SEED_ROSTER_PATH")
        .env_remove("SEED_ATOMIC")
        .env_remove("SEED_RUN_MIGRATIONS")
        .env_remove("RUST_LOG")
        .output()
        .expect("seed-employees runs");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stderr.contains("employee seeding failed"),
        "stderr was: {stderr}"
    );
    assert!(stderr.contains("\"level\":\"ERROR\""), "stderr was: {stderr}");
    assert!(!stdout.contains("employee seeding failed"), "stdout was: {stdout}");
}
