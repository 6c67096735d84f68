//! JSON file preference repository.
//!
//! Stores `{ "scriptDir": ..., "mloDir": ... }` as pretty-printed JSON.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fxforge_core::{
    application::{ApplicationError, ports::PreferencesRepository},
    domain::Preferences,
    error::{ForgeError, ForgeResult},
};
use tracing::{debug, warn};

/// Preferences persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    /// Conventional file name inside the per-user data directory.
    pub const FILE_NAME: &'static str = "settings.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/settings.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferencesRepository for JsonFilePreferences {
    fn load(&self) -> Preferences {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No preferences file yet");
                return Preferences::default();
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Preferences file unreadable, using defaults"
                );
                return Preferences::default();
            }
        };

        // The malformed file stays on disk until the next save.
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Preferences file invalid, using defaults"
            );
            Preferences::default()
        })
    }

    fn save(&self, preferences: &Preferences) -> ForgeResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.persistence_error(e))?;
        }

        let json = serde_json::to_string_pretty(preferences).map_err(|e| self.persistence_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.persistence_error(e))?;

        debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

impl JsonFilePreferences {
    fn persistence_error(&self, e: impl std::fmt::Display) -> ForgeError {
        ApplicationError::PersistenceFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        }
        .into()
    }
}
