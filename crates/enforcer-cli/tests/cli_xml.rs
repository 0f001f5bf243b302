use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONVERGENCE: &str =
    include_str!("../../enforcer-core/tests/fixtures/dependency-convergence.txt");
const UPPER_BOUND: &str = include_str!("../../enforcer-core/tests/fixtures/upper-bound.txt");

#[allow(deprecated)]
fn helper_cmd() -> Command {
    Command::cargo_bin("enforcer-helper").unwrap()
}

#[test]
fn test_xml_prints_both_fragments() {
    helper_cmd()
        .args(["xml"])
        .write_stdin(CONVERGENCE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<!-- Dependency convergence overrides -->\n    <protobuf_java.version>4.33.4</protobuf_java.version>",
        ))
        .stdout(predicate::str::contains(
            "</slf4j_api.version>\n\n<dependency>\n    <groupId>com.google.protobuf</groupId>",
        ))
        .stdout(predicate::str::contains(
            "<version>${guava.version}</version>",
        ));
}

#[test]
fn test_xml_only_properties() {
    helper_cmd()
        .args(["xml", "--only", "properties"])
        .write_stdin(CONVERGENCE)
        .assert()
        .success()
        .stdout(predicate::str::contains("<guava.version>33.4.8-android</guava.version>"))
        .stdout(predicate::str::contains("<dependency>").not());
}

#[test]
fn test_xml_only_dependency_management() {
    helper_cmd()
        .args(["xml", "--only", "dependency-management"])
        .write_stdin(UPPER_BOUND)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<artifactId>jackson-databind</artifactId>",
        ))
        .stdout(predicate::str::contains("<version>${jackson_databind.version}</version>"))
        .stdout(predicate::str::contains("2.17.1").not());
}

#[test]
fn test_xml_from_file_with_config() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("build.log");
    let config = tmp.path().join("enforcer-helper.toml");
    fs::write(&log, UPPER_BOUND).unwrap();
    fs::write(&config, "indent = 2\nheader = \"Pinned upper bounds\"\n").unwrap();

    helper_cmd()
        .arg("xml")
        .arg(&log)
        .arg("--config")
        .arg(&config)
        .args(["--only", "properties"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!-- Pinned upper bounds -->"))
        .stdout(predicate::str::contains("\n  <slf4j_api.version>1.7.30</slf4j_api.version>"))
        .stdout(predicate::str::contains(
            "\n  <jackson_databind.version>2.17.1</jackson_databind.version>",
        ));
}

#[test]
fn test_xml_indent_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("enforcer-helper.toml");
    fs::write(&config, "indent = 8\n").unwrap();

    helper_cmd()
        .args(["xml", "--indent", "1", "--only", "properties", "--config"])
        .arg(&config)
        .write_stdin(UPPER_BOUND)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n <slf4j_api.version>"));
}

#[test]
fn test_xml_bad_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("enforcer-helper.toml");
    fs::write(&config, "indent = \"wide\"\n").unwrap();

    helper_cmd()
        .args(["xml", "--config"])
        .arg(&config)
        .write_stdin(CONVERGENCE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_xml_prose_only_fails() {
    helper_cmd()
        .args(["xml"])
        .write_stdin("[ERROR] Failed to execute goal org.apache.maven.plugins:maven-enforcer-plugin:3.6.2:enforce (enforce-maven) on project demo:\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No conflicts found in the input"));
}
