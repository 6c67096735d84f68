//! Command handlers, one module per subcommand.

use serde::Serialize;
use tracing::debug;

use fxforge_adapters::JsonFilePreferences;
use fxforge_core::application::{Outcome, PreferenceStore, StatusMessage};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

pub mod completions;
pub mod config;
pub mod dirs;
pub mod init;
pub mod new;

/// Open the preference store at the configured location.
pub(crate) fn open_preferences(config: &AppConfig) -> PreferenceStore {
    let path = config.preferences_path();
    debug!(path = %path.display(), "Opening preferences");
    PreferenceStore::open(Box::new(JsonFilePreferences::new(path)))
}

/// JSON shape of a status for `--output-format json`.
#[derive(Debug, Serialize)]
pub(crate) struct StatusReport<'a> {
    pub outcome: &'static str,
    pub message: &'a str,
}

impl<'a> From<&'a StatusMessage> for StatusReport<'a> {
    fn from(status: &'a StatusMessage) -> Self {
        let outcome = match status.outcome() {
            Outcome::Created => "created",
            Outcome::Overwritten => "overwritten",
            Outcome::Updated => "updated",
            Outcome::Failed(_) => "failed",
        };
        Self {
            outcome,
            message: status.text(),
        }
    }
}

/// Print a status, or turn a failure into the error that exits non-zero.
pub(crate) fn report(status: StatusMessage, output: &OutputManager) -> CliResult<()> {
    if !status.is_success() {
        return Err(status.into());
    }
    if output.is_json() {
        output.json(&StatusReport::from(&status))?;
    } else {
        output.status(&status)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxforge_core::application::FailureKind;

    #[test]
    fn report_outcome_names() {
        let created = StatusMessage::success(Outcome::Created, "Script Resource Created:\n/x");
        let report = StatusReport::from(&created);
        assert_eq!(report.outcome, "created");
        assert_eq!(report.message, "✅ Script Resource Created:\n/x");

        let failed = StatusMessage::failure(FailureKind::Cancelled, "MLO folder change cancelled.");
        assert_eq!(StatusReport::from(&failed).outcome, "failed");
    }

    #[test]
    fn preferences_follow_config_path() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.preferences.path = Some(temp.path().join("prefs.json"));

        let store = open_preferences(&config);
        assert_eq!(store.location(), Some(temp.path().join("prefs.json")));
    }
}
