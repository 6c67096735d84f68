//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FXFORGE_<SECTION>__<KEY>`, e.g.
//!    `FXFORGE_DEFAULTS__AUTHOR` or `FXFORGE_PREFERENCES__PATH`
//! 3. Config file (`--config`, or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fxforge_adapters::JsonFilePreferences;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Manifest values used when `new` is given no flag.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Where the remembered output directories live.
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Overrides the platform data directory.
    pub path: Option<PathBuf>,
}

const APP_QUALIFIER: (&str, &str, &str) = ("com", "fxforge", "fxforge");

fn project_dirs() -> Option<directories::ProjectDirs> {
    let (qualifier, organization, application) = APP_QUALIFIER;
    directories::ProjectDirs::from(qualifier, organization, application)
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "FXFORGE";

    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  The default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) if !path.exists() => {
                bail!("config file not found: {}", path.display())
            }
            Some(path) => path.clone(),
            None => Self::config_path(),
        };
        debug!(path = %path.display(), "Loading configuration");

        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fxforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".fxforge.toml"))
    }

    /// Path of the preferences record.
    ///
    /// `preferences.path` wins; otherwise `settings.json` in the platform
    /// data directory, or in the working directory when there is none.
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences.path.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|d| d.data_dir().join(JsonFilePreferences::FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(JsonFilePreferences::FILE_NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.author, None);
        assert_eq!(cfg.defaults.description, None);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn missing_default_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.preferences, PreferencesConfig::default());
    }

    #[test]
    fn reads_toml_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nauthor = \"Alice\"\n\n[preferences]\npath = \"/srv/fx/settings.json\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("Alice"));
        assert_eq!(cfg.defaults.description, None);
        assert_eq!(
            cfg.preferences_path(),
            PathBuf::from("/srv/fx/settings.json")
        );
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults\nauthor = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_preferences_file_name() {
        let path = AppConfig::default().preferences_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(JsonFilePreferences::FILE_NAME)
        );
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
