//! Isolated environment for running the `fxforge` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp directory holding the config file, the preferences file and the
/// resource output directories of one test.
pub struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(toml: &str) -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), toml).unwrap();
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.path().join("data").join("settings.json")
    }

    /// Creates and returns `<sandbox>/<name>`.
    pub fn output_dir(&self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = bin();
        cmd.current_dir(self.path())
            .env("FXFORGE_PREFERENCES__PATH", self.preferences_file())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("FXFORGE_DEFAULTS__AUTHOR")
            .env_remove("FXFORGE_DEFAULTS__DESCRIPTION")
            .arg("--config")
            .arg(self.config_file());
        cmd
    }
}

/// The binary with no environment set up.
pub fn bin() -> Command {
    Command::cargo_bin("fxforge").unwrap()
}
