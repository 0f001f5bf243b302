use assert_cmd::Command;
use predicates::prelude::*;

const CONVERGENCE: &str =
    include_str!("../../enforcer-core/tests/fixtures/dependency-convergence.txt");

#[allow(deprecated)]
fn helper_cmd() -> Command {
    Command::cargo_bin("enforcer-helper").unwrap()
}

#[test]
fn test_conflicts_from_stdin() {
    helper_cmd()
        .args(["conflicts"])
        .write_stdin(CONVERGENCE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "com.google.protobuf:protobuf-java -> 4.33.4 (versions: 4.33.2, 4.33.4)",
        ))
        .stdout(predicate::str::contains(
            "io.grpc:grpc-context -> 1.70.0 (versions: 1.27.2, 1.70.0)",
        ))
        .stdout(predicate::str::contains("maven-enforcer-plugin").not())
        .stderr(predicate::str::contains("Parsed"))
        .stderr(predicate::str::contains("4 conflicts"));
}

#[test]
fn test_conflicts_prints_paths() {
    helper_cmd()
        .args(["conflicts", "-"])
        .write_stdin(CONVERGENCE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  path 2: no.coop.giftcard:coop-prepaid-ledger:1.local-SNAPSHOT > com.google.cloud:google-cloud-core:2.64.1 [compile]",
        ));
}

#[test]
fn test_conflicts_empty_input_fails() {
    helper_cmd()
        .args(["conflicts"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty input"));
}

#[test]
fn test_conflicts_without_markers_fails() {
    helper_cmd()
        .args(["conflicts"])
        .write_stdin("BUILD SUCCESS\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No [ERROR] lines found"));
}

#[test]
fn test_conflicts_json_success() {
    helper_cmd()
        .args(["conflicts", "--json"])
        .write_stdin(CONVERGENCE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"success\""))
        .stdout(predicate::str::contains("\"highestVersion\": \"4.33.4\""))
        .stdout(predicate::str::contains("\"artifactId\": \"grpc-context\""));
}

#[test]
fn test_conflicts_json_error_outcome() {
    helper_cmd()
        .args(["conflicts", "--json"])
        .write_stdin("no markers here")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"type\": \"error\""))
        .stdout(predicate::str::contains(
            "\"message\": \"No [ERROR] lines found. Please paste maven enforcer output.\"",
        ));
}

#[test]
fn test_conflicts_missing_file_fails() {
    helper_cmd()
        .args(["conflicts", "does-not-exist.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
