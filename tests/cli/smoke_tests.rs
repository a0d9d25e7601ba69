use assert_cmd::Command;
use predicates::prelude::*;

const VERSION_LINE: &str = "This is MrsWatson, version 0.0.1\n";

fn mrswatson() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mrswatson"))
}

#[test]
fn long_version_flag_prints_greeting() {
    mrswatson()
        .arg("--version")
        .assert()
        .success()
        .stdout(VERSION_LINE)
        .stderr(predicate::str::is_empty());
}

#[test]
fn short_version_flag_matches_long_form() {
    mrswatson()
        .arg("-v")
        .assert()
        .success()
        .stdout(VERSION_LINE)
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_arguments_is_a_silent_success() {
    mrswatson()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_flag_fails_with_usage_on_stderr() {
    mrswatson()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn shows_help() {
    mrswatson()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mrswatson"));
}

#[test]
fn repeated_invocations_are_idempotent() {
    for _ in 0..3 {
        mrswatson().arg("--version").assert().success().stdout(VERSION_LINE);
    }
}
