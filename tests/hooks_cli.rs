//! Integration tests for the `editguard` binary.
//!
//! Each test runs with an empty `HOME` so no user config leaks in.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const CLICKABLE_CARD: &str = "@Composable\nfun PlanetCard(onSelect: () -> Unit) {\n    \
                              Box(Modifier.clickable { onSelect() })\n}\n";

fn run(subcommand: &str, home: &TempDir, stdin: &str) -> assert_cmd::assert::Assert {
    let mut command = cargo_bin_cmd!("editguard");
    command
        .arg(subcommand)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .write_stdin(stdin.to_string());
    command.assert()
}

fn event(path: &str, new_string: &str) -> String {
    serde_json::json!({ "file_path": path, "new_string": new_string }).to_string()
}

#[test]
fn pre_edit_unrelated_path_is_silent() {
    let home = TempDir::new().unwrap();
    run("pre-edit", &home, &event("app/src/main/java/Main.kt", ""))
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn pre_edit_version_catalog_warns_once() {
    let home = TempDir::new().unwrap();
    let output = run("pre-edit", &home, &event("gradle/libs.versions.toml", ""))
        .success()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    assert_eq!(stderr.matches("CATALOG GUARD").count(), 1);
}

#[test]
fn pre_edit_properties_files() {
    let home = TempDir::new().unwrap();
    run("pre-edit", &home, &event("gradle.properties", ""))
        .success()
        .stderr(contains("Do NOT add API keys"));
    run("pre-edit", &home, &event("app/keystore.properties", ""))
        .success()
        .stderr(predicate::str::is_empty());
    run("pre-edit", &home, &event("local.properties", ""))
        .success()
        .stderr(contains("NEVER commit this file"))
        .stderr(contains("Do NOT add API keys").not());
}

#[test]
fn pre_edit_reads_tool_input_envelope() {
    let home = TempDir::new().unwrap();
    let payload = serde_json::json!({
        "hook_event_name": "PreToolUse",
        "tool_name": "Edit",
        "tool_input": { "file_path": "/repo/app/src/main/AndroidManifest.xml" }
    });
    run("pre-edit", &home, &payload.to_string())
        .success()
        .stderr(contains("LEANBACK_LAUNCHER"));
}

#[test]
fn malformed_input_is_silent() {
    let home = TempDir::new().unwrap();
    for subcommand in ["pre-edit", "post-edit"] {
        for stdin in ["", "not json", "{\"file_path\": "] {
            run(subcommand, &home, stdin)
                .code(0)
                .stderr(predicate::str::is_empty());
        }
    }
}

#[test]
fn post_edit_warns_on_unfocusable_composable() {
    let home = TempDir::new().unwrap();
    let output = run("post-edit", &home, &event("ui/PlanetCard.kt", CLICKABLE_CARD))
        .success()
        .stderr(contains("TV-FOCUS WARNING"))
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    let numbered = stderr
        .lines()
        .map(str::trim_start)
        .filter(|l| ["1. ", "2. ", "3. "].iter().any(|n| l.starts_with(n)))
        .count();
    assert_eq!(numbered, 3);
}

#[test]
fn post_edit_focusable_is_silent() {
    let home = TempDir::new().unwrap();
    let text = format!("{CLICKABLE_CARD}val m = Modifier.focusable()\n");
    run("post-edit", &home, &event("ui/PlanetCard.kt", &text))
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn post_edit_ignores_other_sources() {
    let home = TempDir::new().unwrap();
    run("post-edit", &home, &event("ui/PlanetCard.java", CLICKABLE_CARD))
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let home = TempDir::new().unwrap();
    for (subcommand, payload) in [
        ("pre-edit", event("app/proguard-rules.pro", "")),
        ("post-edit", event("ui/PlanetCard.kt", CLICKABLE_CARD)),
    ] {
        let first = run(subcommand, &home, &payload).get_output().stderr.clone();
        let second = run(subcommand, &home, &payload).get_output().stderr.clone();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}

#[test]
fn disabled_handler_via_config() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".editguard");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[pre_edit]\nenabled = false\n").unwrap();

    run("pre-edit", &home, &event("gradle/libs.versions.toml", ""))
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".editguard");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "pre_edit = [").unwrap();

    run("pre-edit", &home, &event("gradle/libs.versions.toml", ""))
        .success()
        .stderr(contains("CATALOG GUARD"));
}

#[test]
fn install_and_uninstall_round_trip() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let settings = project.path().join(".claude").join("settings.json");

    for expected in ["hooks installed", "already installed"] {
        let mut command = cargo_bin_cmd!("editguard");
        command
            .env("HOME", home.path())
            .args(["install", "--project"])
            .arg(project.path());
        command.assert().success().stdout(contains(expected));
    }
    let content = std::fs::read_to_string(&settings).unwrap();
    assert!(content.contains("editguard post-edit"));

    let mut command = cargo_bin_cmd!("editguard");
    command
        .env("HOME", home.path())
        .args(["uninstall", "--project"])
        .arg(project.path());
    command.assert().success().stdout(contains("hooks removed"));
    let content = std::fs::read_to_string(&settings).unwrap();
    assert!(!content.contains("editguard"));
}

#[test]
fn rules_lists_catalog() {
    let home = TempDir::new().unwrap();
    let mut command = cargo_bin_cmd!("editguard");
    command.env("HOME", home.path()).arg("rules");
    command
        .assert()
        .success()
        .stdout(contains("version-catalog"))
        .stdout(contains("@Composable"));
}
