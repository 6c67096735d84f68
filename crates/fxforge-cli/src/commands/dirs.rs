//! `fxforge dirs`: show and change the remembered output directories.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use fxforge_adapters::FixedPicker;
use fxforge_core::{
    application::PreferenceStore,
    domain::{Preferences, ResourceKind},
};

use crate::{
    cli::DirsCommands,
    commands::{open_preferences, report},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const NOT_SET: &str = "(not set)";

pub fn execute(cmd: DirsCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let preferences = open_preferences(&config);

    match cmd {
        DirsCommands::Show => show(&preferences, &output),
        DirsCommands::Set { kind, path } => set(&preferences, kind.into(), path, &output),
        DirsCommands::Pick { kind } => pick(&preferences, kind.into(), &output),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DirsReport {
    #[serde(flatten)]
    preferences: Preferences,
    settings_file: Option<PathBuf>,
}

fn show(preferences: &PreferenceStore, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&DirsReport {
            preferences: preferences.snapshot(),
            settings_file: preferences.location(),
        })?;
        return Ok(());
    }

    output.header("Output directories")?;
    for kind in ResourceKind::ALL {
        output.print(&format!("  {:<7} {}", format!("{}:", kind.label()), describe(preferences, kind)))?;
    }
    if let Some(location) = preferences.location() {
        output.print("")?;
        output.print(&format!("Preferences file: {}", location.display()))?;
    }
    Ok(())
}

fn describe(preferences: &PreferenceStore, kind: ResourceKind) -> String {
    preferences
        .dir_for(kind)
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| NOT_SET.to_owned())
}

/// A folder given on the command line is a pick that cannot be cancelled.
///
/// Relative paths are stored resolved against the working directory, so a
/// later `new` from another directory still finds them.
#[instrument(skip(preferences, output), fields(kind = %kind))]
fn set(
    preferences: &PreferenceStore,
    kind: ResourceKind,
    path: PathBuf,
    output: &OutputManager,
) -> CliResult<()> {
    let path = if path.as_os_str().is_empty() {
        path
    } else {
        std::path::absolute(&path)
            .with_cli_context(|| format!("Cannot resolve '{}'", path.display()))?
    };
    info!(path = %path.display(), "Setting output directory");
    report(preferences.pick_dir(kind, &FixedPicker::choosing(path)), output)
}

#[cfg(feature = "interactive")]
fn pick(preferences: &PreferenceStore, kind: ResourceKind, output: &OutputManager) -> CliResult<()> {
    let picker = crate::picker::PromptPicker::new();
    report(preferences.pick_dir(kind, &picker), output)
}

#[cfg(not(feature = "interactive"))]
fn pick(_preferences: &PreferenceStore, _kind: ResourceKind, _output: &OutputManager) -> CliResult<()> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
