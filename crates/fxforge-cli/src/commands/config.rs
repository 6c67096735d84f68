//! `fxforge config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
            output.print(&format!(
                "# preferences file: {}",
                config.preferences_path().display()
            ))?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.author" => Ok(config.defaults.author.clone().unwrap_or_default()),
        "defaults.description" => Ok(config.defaults.description.clone().unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        // Resolved, so the default location is shown too.
        "preferences.path" => Ok(config.preferences_path().display().to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_known_key() {
        let mut cfg = AppConfig::default();
        cfg.defaults.author = Some("Alice".into());
        assert_eq!(get_config_value(&cfg, "defaults.author").unwrap(), "Alice");
        assert_eq!(get_config_value(&cfg, "defaults.description").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn preferences_path_is_resolved() {
        let mut cfg = AppConfig::default();
        cfg.preferences.path = Some(PathBuf::from("/srv/fx/settings.json"));
        assert_eq!(
            get_config_value(&cfg, "preferences.path").unwrap(),
            "/srv/fx/settings.json"
        );
    }
}
