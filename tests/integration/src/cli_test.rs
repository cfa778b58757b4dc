//! End-to-end tests driving the blocklist-gen binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn seed_repository(root: &Path) {
    fs::create_dir_all(root.join("Common")).unwrap();
    fs::write(
        root.join("Common/ai-sites.txt"),
        "! // {engine} common list\n\
         zeta-ai.com\n\
         alpha-ai.com\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("SubPages")).unwrap();
    fs::write(
        root.join("SubPages/pages.txt"),
        "! // {engine} subpages\n\
         !domains=[\"blog.\",\"docs.\"]\n\
         generated.net\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("Nuclear")).unwrap();
    fs::write(
        root.join("Nuclear/nuke.txt"),
        "! // {engine} nuclear\nscorched.org\n",
    )
    .unwrap();

    fs::create_dir_all(root.join("Elements")).unwrap();
    fs::write(root.join("Elements/rules.txt"), "google.com##.ai-overview\n").unwrap();
}

fn generate(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("blocklist-gen").unwrap();
    cmd.current_dir(root).arg("generate");
    cmd
}

#[test]
fn generate_produces_all_default_artifacts() {
    let dir = TempDir::new().unwrap();
    seed_repository(dir.path());

    generate(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hosts.txt"));

    let export = dir.path().join("Export");
    for name in [
        "google-list_uBlockOrigin.txt",
        "duckduckgo-list_uBlockOrigin.txt",
        "bing-list_uBlockOrigin.txt",
        "list_uBlockOrigin.txt",
        "Nuclear_list_uBlockOrigin.txt",
        "list_uBlacklist.txt",
        "Nuclear_list_uBlacklist.txt",
        "hosts.txt",
        "hosts-www.txt",
        "list_hosts.txt",
    ] {
        assert!(export.join(name).is_file(), "missing {name}");
    }
}

#[test]
fn domain_directive_expands_into_rendered_output() {
    let dir = TempDir::new().unwrap();
    seed_repository(dir.path());
    generate(dir.path()).assert().success();

    let ublacklist =
        fs::read_to_string(dir.path().join("Export/list_uBlacklist.txt")).unwrap();
    assert!(ublacklist.contains("*://*.blog.generated.net/*\n"));
    assert!(ublacklist.contains("*://*.docs.generated.net/*\n"));
    // The unexpanded line must not leak through.
    assert!(!ublacklist.contains("*://*.generated.net/*\n"));
}

#[test]
fn compiled_artifact_starts_with_title_line() {
    let dir = TempDir::new().unwrap();
    seed_repository(dir.path());
    generate(dir.path()).assert().success();

    let compiled =
        fs::read_to_string(dir.path().join("Export/list_uBlockOrigin.txt")).unwrap();
    assert!(compiled.starts_with("! Title: Huge AI Blocklist (Compiled)\n"));
    // Per-engine contents follow, separated by blank lines.
    assert!(compiled.contains("! // google common list\n"));
    assert!(compiled.contains("! // bing common list\n"));
}

#[test]
fn no_overwrite_skips_existing_outputs() {
    let dir = TempDir::new().unwrap();
    seed_repository(dir.path());
    fs::create_dir_all(dir.path().join("Export")).unwrap();
    fs::write(dir.path().join("Export/hosts.txt"), "keep me\n").unwrap();

    generate(dir.path())
        .arg("--no-overwrite")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert_eq!(
        fs::read_to_string(dir.path().join("Export/hosts.txt")).unwrap(),
        "keep me\n"
    );
}

#[test]
fn output_root_as_file_fails_the_run() {
    let dir = TempDir::new().unwrap();
    seed_repository(dir.path());
    fs::write(dir.path().join("Export"), "a file").unwrap();

    generate(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn format_flags_disable_their_outputs() {
    let dir = TempDir::new().unwrap();
    seed_repository(dir.path());

    generate(dir.path())
        .args(["--no-hosts", "--no-ubo", "--no-nuclear"])
        .assert()
        .success();

    let export = dir.path().join("Export");
    assert!(!export.join("hosts.txt").exists());
    assert!(!export.join("google-list_uBlockOrigin.txt").exists());
    assert!(!export.join("Nuclear_list_uBlacklist.txt").exists());
    assert!(export.join("list_uBlacklist.txt").is_file());
}

#[test]
fn sort_command_writes_sorted_sibling() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    fs::write(&input, "! // Header\nzeta.com\nalpha.com\n! beta note\n").unwrap();

    Command::cargo_bin("blocklist-gen")
        .unwrap()
        .current_dir(dir.path())
        .args(["sort", "list.txt"])
        .assert()
        .success();

    let sorted = fs::read_to_string(dir.path().join("sorted_list.txt")).unwrap();
    assert_eq!(
        sorted,
        "! // Header\nalpha.com\n! beta note\nzeta.com\n"
    );
}

#[test]
fn sort_command_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("blocklist-gen")
        .unwrap()
        .current_dir(dir.path())
        .args(["sort", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid file"));
}
