//! Integration tests for fxforge-cli.

mod common;

use std::{fs, path::PathBuf};

use common::Sandbox;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("dirs"));
}

#[test]
fn test_version_flag() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_set_dir_then_create_script() {
    let sandbox = Sandbox::new();
    let scripts = sandbox.output_dir("scripts");

    sandbox
        .cmd()
        .args(["dirs", "set", "script"])
        .arg(&scripts)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "✅ Script Output Directory Updated:",
        ));

    sandbox
        .cmd()
        .args(["new", "script", "myshop", "-d", "Test Shop", "-a", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "✅ Script Resource Created:\n{}",
            scripts.join("myshop").display()
        )));

    let root = scripts.join("myshop");
    for dir in ["client", "server", "shared"] {
        assert!(root.join(dir).is_dir(), "missing {dir}");
    }
    assert_eq!(
        fs::read_to_string(root.join("shared/config.lua")).unwrap(),
        "Config = {}\n"
    );
    let manifest = fs::read_to_string(root.join("fxmanifest.lua")).unwrap();
    assert!(manifest.contains("description 'Test Shop'"));
    assert!(manifest.contains("author 'Alice'"));
}

#[test]
fn test_relative_dir_is_stored_absolute() {
    let sandbox = Sandbox::new();
    let resources = sandbox.output_dir("res");
    let elsewhere = sandbox.output_dir("elsewhere");

    sandbox
        .cmd()
        .args(["dirs", "set", "script", "res"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sandbox.preferences_file()).unwrap()).unwrap();
    let stored = PathBuf::from(saved["scriptDir"].as_str().unwrap());
    assert!(stored.is_absolute(), "{}", stored.display());
    assert_eq!(
        fs::canonicalize(&stored).unwrap(),
        fs::canonicalize(&resources).unwrap()
    );

    sandbox
        .cmd()
        .current_dir(&elsewhere)
        .args(["new", "script", "myshop"])
        .assert()
        .success();

    assert!(resources.join("myshop/fxmanifest.lua").is_file());
    assert!(!elsewhere.join("res").exists());
}

#[test]
fn test_preferences_file_keys() {
    let sandbox = Sandbox::new();
    let maps = sandbox.output_dir("maps");

    sandbox
        .cmd()
        .args(["dirs", "set", "map"])
        .arg(&maps)
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sandbox.preferences_file()).unwrap()).unwrap();
    assert_eq!(saved["mloDir"], maps.display().to_string());
    assert!(saved["scriptDir"].is_null());
}

#[test]
fn test_map_alias_and_overwrite() {
    let sandbox = Sandbox::new();
    let maps = sandbox.output_dir("maps");
    sandbox.cmd().args(["dirs", "set", "mlo"]).arg(&maps).assert().success();

    sandbox
        .cmd()
        .args(["new", "mlo", "pillbox"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("✅ MLO Resource Created:"));

    let asset = maps.join("pillbox/stream/lobby.ydr");
    fs::write(&asset, b"asset").unwrap();

    sandbox
        .cmd()
        .args(["new", "map", "pillbox", "-a", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "✅ MLO Resource Updated (existing manifest overwritten):",
        ));

    assert!(asset.is_file());
    let manifest = fs::read_to_string(maps.join("pillbox/fxmanifest.lua")).unwrap();
    assert!(manifest.contains("author 'Bob'"));
    assert!(manifest.contains("this_is_a_map 'yes'"));
}

#[test]
fn test_author_falls_back_to_config_default() {
    let sandbox = Sandbox::with_config("[defaults]\nauthor = \"Carol\"\n");
    let maps = sandbox.output_dir("maps");
    sandbox.cmd().args(["dirs", "set", "map"]).arg(&maps).assert().success();

    sandbox
        .cmd()
        .args(["new", "map", "garage"])
        .assert()
        .success();

    let manifest = fs::read_to_string(maps.join("garage/fxmanifest.lua")).unwrap();
    assert!(manifest.contains("author 'Carol'"));
    assert!(manifest.contains("description ''"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let sandbox = Sandbox::new();
    let scripts = sandbox.output_dir("scripts");
    sandbox.cmd().args(["dirs", "set", "script"]).arg(&scripts).assert().success();

    sandbox
        .cmd()
        .args(["new", "script", "myshop", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("fxmanifest.lua"))
        .stdout(predicate::str::contains("shared/config.lua"));

    assert!(!scripts.join("myshop").exists());
}

#[test]
fn test_dirs_show() {
    let sandbox = Sandbox::new();
    let maps = sandbox.output_dir("maps");
    sandbox.cmd().args(["dirs", "set", "map"]).arg(&maps).assert().success();

    sandbox
        .cmd()
        .args(["dirs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains(maps.display().to_string()))
        .stdout(predicate::str::contains("settings.json"));
}

#[test]
fn test_dirs_show_json() {
    let sandbox = Sandbox::new();

    let assert = sandbox
        .cmd()
        .args(["--output-format", "json", "dirs", "show"])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert!(doc["scriptDir"].is_null());
    assert!(doc["mloDir"].is_null());
    assert_eq!(
        doc["settingsFile"],
        sandbox.preferences_file().display().to_string()
    );
}

#[test]
fn test_quiet_flag() {
    let sandbox = Sandbox::new();
    let scripts = sandbox.output_dir("scripts");

    sandbox
        .cmd()
        .arg("-q")
        .args(["dirs", "set", "script"])
        .arg(&scripts)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_init_writes_config() {
    let sandbox = Sandbox::new();
    let target = sandbox.path().join("fresh").join("config.toml");

    let mut cmd = common::bin();
    cmd.current_dir(sandbox.path())
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success();
    assert!(target.is_file());

    let mut again = common::bin();
    again
        .current_dir(sandbox.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&target)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_config_get() {
    Sandbox::with_config("[defaults]\ndescription = \"Made with fxforge\"\n")
        .cmd()
        .args(["config", "get", "defaults.description"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Made with fxforge"));
}

#[test]
fn test_shell_completions() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fxforge"));
}
