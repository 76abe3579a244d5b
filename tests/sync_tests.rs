//! Sync integration tests using the REAL pscode-syntax binary

mod common;

use common::{GRAMMAR, TestProject, pscode_cmd};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_sync_copies_bundle_files() {
    let project = TestProject::new();

    project
        .sync_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Setting up pscode syntax highlighting"))
        .stdout(predicate::str::contains("Copied language-configuration.json"))
        .stdout(predicate::str::contains("Copied syntaxes/pscode.tmLanguage.json"))
        .stdout(predicate::str::contains("Syntax highlighting setup complete"))
        .stdout(predicate::str::contains("3 files synced (3 created"));

    assert_eq!(project.read_file("lang/example.pscode"), common::EXAMPLE);
    assert_eq!(
        project.read_file("lang/language-configuration.json"),
        common::LANGUAGE_CONFIGURATION
    );
    assert_eq!(project.read_file("lang/syntaxes/pscode.tmLanguage.json"), GRAMMAR);
    assert!(!project.file_exists("lang/package.json"));
    assert!(!project.file_exists(".tmp-syntax"));
}

#[test]
fn test_sync_is_idempotent() {
    let project = TestProject::new();

    project.sync_cmd().assert().success();
    let first = project.read_file("lang/syntaxes/pscode.tmLanguage.json");

    project
        .sync_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("0 created, 0 updated, 3 unchanged"));
    assert_eq!(project.read_file("lang/syntaxes/pscode.tmLanguage.json"), first);
    assert!(!project.file_exists(".tmp-syntax"));
}

#[test]
fn test_sync_subcommand_is_equivalent() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("sync")
        .arg("--remote")
        .arg(&project.bundle)
        .assert()
        .success();

    assert!(project.file_exists("lang/syntaxes/pscode.tmLanguage.json"));
}

#[test]
fn test_sync_reports_updated_files() {
    let project = TestProject::new();
    project.sync_cmd().assert().success();

    project.write_bundle_file("example.pscode", "OUTPUT 42\n");
    project
        .sync_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("1 updated"));
    assert_eq!(project.read_file("lang/example.pscode"), "OUTPUT 42\n");
}

#[test]
fn test_sync_recovers_from_stale_staging_directory() {
    let project = TestProject::new();
    project.write_file(".tmp-syntax/leftover/old.json", "{}");

    project
        .sync_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed stale staging directory"));

    assert!(!project.file_exists(".tmp-syntax"));
    assert!(!project.file_exists("lang/leftover"));
}

#[test]
fn test_sync_tolerates_missing_example() {
    let project = TestProject::new();
    project.remove_bundle_file("example.pscode");

    project
        .sync_cmd()
        .assert()
        .success()
        .stderr(predicate::str::contains("example.pscode not found in bundle"))
        .stdout(predicate::str::contains("1 missing"));

    assert!(!project.file_exists("lang/example.pscode"));
    assert!(project.file_exists("lang/language-configuration.json"));
    assert!(project.file_exists("lang/syntaxes/pscode.tmLanguage.json"));
}

#[test]
fn test_sync_keeps_previous_copy_when_file_disappears() {
    let project = TestProject::new();
    project.sync_cmd().assert().success();

    project.remove_bundle_file("language-configuration.json");
    project.sync_cmd().assert().success();

    assert_eq!(
        project.read_file("lang/language-configuration.json"),
        common::LANGUAGE_CONFIGURATION
    );
}

#[test]
fn test_sync_without_syntaxes_directory() {
    let project = TestProject::new();
    fs::remove_dir_all(project.bundle.join("syntaxes")).unwrap();

    project
        .sync_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Copying syntaxes").not())
        .stderr(predicate::str::contains("syntaxes").not());

    assert!(!project.file_exists("lang/syntaxes"));
}

#[test]
fn test_sync_failure_leaves_assets_untouched() {
    let project = TestProject::new();
    project.write_file("lang/example.pscode", "previous");

    project
        .cmd()
        .args(["--remote", "file:///nonexistent/pscode-syntax-highlighter"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to fetch syntax bundle"));

    assert_eq!(project.read_file("lang/example.pscode"), "previous");
    assert!(!project.file_exists("lang/language-configuration.json"));
    assert!(!project.file_exists(".tmp-syntax"));
}

#[test]
fn test_sync_from_git_repository() {
    let project = TestProject::new();
    let url = project.commit_bundle();

    project
        .cmd()
        .args(["--remote", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloning"));

    assert_eq!(project.read_file("lang/syntaxes/pscode.tmLanguage.json"), GRAMMAR);
    assert!(!project.file_exists("lang/.git"));
    assert!(!project.file_exists(".tmp-syntax"));
}

#[test]
fn test_sync_reads_config_file() {
    let project = TestProject::new();
    project.write_file(
        "pscode-syntax.yaml",
        &format!(
            "remote: {}\nasset-dir: public/lang\nfiles:\n  - language-configuration.json\n",
            project.bundle.display()
        ),
    );

    project.cmd().assert().success();

    assert!(project.file_exists("public/lang/language-configuration.json"));
    assert!(project.file_exists("public/lang/syntaxes/pscode.tmLanguage.json"));
    assert!(!project.file_exists("public/lang/example.pscode"));
    assert!(!project.file_exists("lang"));
}

#[test]
fn test_cli_flags_override_config_file() {
    let project = TestProject::new();
    project.write_file("pscode-syntax.yaml", "asset-dir: public/lang\n");

    project
        .sync_cmd()
        .args(["--asset-dir", "assets"])
        .assert()
        .success();

    assert!(project.file_exists("assets/example.pscode"));
    assert!(!project.file_exists("public/lang"));
}

#[test]
fn test_sync_rejects_unknown_config_keys() {
    let project = TestProject::new();
    project.write_file("pscode-syntax.yaml", "branch: main\n");

    project
        .sync_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_sync_with_project_flag() {
    let project = TestProject::new();

    pscode_cmd()
        .current_dir(project.temp.path())
        .arg("--project")
        .arg(&project.path)
        .arg("--remote")
        .arg(&project.bundle)
        .assert()
        .success();

    assert!(project.file_exists("lang/example.pscode"));
    assert!(!project.temp.path().join("lang").exists());
}

#[test]
fn test_sync_remote_from_environment() {
    let project = TestProject::new();

    project
        .cmd()
        .env("PSCODE_SYNTAX_REMOTE", &project.bundle)
        .assert()
        .success();

    assert!(project.file_exists("lang/example.pscode"));
}

#[test]
fn test_sync_rejects_overlapping_directories() {
    let project = TestProject::new();

    project
        .sync_cmd()
        .args(["--staging-dir", "lang/tmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
