//! Preference Store - owns the two output directories.
//!
//! Loaded once from a [`PreferencesRepository`], mutated through
//! `set_*`/`pick_dir`, and written back immediately after every change.
//! The value sits behind a mutex so a load-modify-save cycle cannot lose a
//! concurrent update.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{FolderPicker, PreferencesRepository},
        status::{FailureKind, Outcome, StatusMessage},
    },
    domain::{Preferences, ResourceKind},
    error::ForgeResult,
};

/// Explicitly owned preferences state, injected into callers.
pub struct PreferenceStore {
    repository: Box<dyn PreferencesRepository>,
    current: Mutex<Preferences>,
}

impl PreferenceStore {
    /// Load the persisted record through `repository`.
    #[instrument(skip_all)]
    pub fn open(repository: Box<dyn PreferencesRepository>) -> Self {
        let current = repository.load();
        debug!(
            script_dir = ?current.script_dir,
            mlo_dir = ?current.mlo_dir,
            "Preferences loaded"
        );
        Self {
            repository,
            current: Mutex::new(current),
        }
    }

    // Preferences is plain data; a panic mid-update leaves the previous value.
    fn lock(&self) -> MutexGuard<'_, Preferences> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the in-memory record.
    pub fn snapshot(&self) -> Preferences {
        self.lock().clone()
    }

    /// Base directory configured for `kind`, if any.
    pub fn dir_for(&self, kind: ResourceKind) -> Option<PathBuf> {
        self.lock().dir_for(kind).map(Path::to_path_buf)
    }

    /// Where the record is persisted.
    pub fn location(&self) -> Option<PathBuf> {
        self.repository.location()
    }

    /// Write the in-memory record back unchanged.
    pub fn save(&self) -> ForgeResult<()> {
        let current = self.lock();
        self.repository.save(&current)
    }

    /// Set the base directory for `kind` and persist.
    ///
    /// The in-memory value only changes once the save succeeded.
    #[instrument(skip(self, path), fields(kind = %kind))]
    pub fn set_dir(&self, kind: ResourceKind, path: impl Into<PathBuf>) -> ForgeResult<()> {
        let path = path.into();
        let mut current = self.lock();

        let next = current.clone().with_dir(kind, path.clone());
        self.repository.save(&next)?;
        *current = next;

        info!(path = %path.display(), "Output directory updated");
        Ok(())
    }

    pub fn set_script_dir(&self, path: impl Into<PathBuf>) -> ForgeResult<()> {
        self.set_dir(ResourceKind::Script, path)
    }

    pub fn set_mlo_dir(&self, path: impl Into<PathBuf>) -> ForgeResult<()> {
        self.set_dir(ResourceKind::Map, path)
    }

    /// Ask `picker` for a new base directory for `kind`.
    ///
    /// Cancelling leaves the preferences untouched.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn pick_dir(&self, kind: ResourceKind, picker: &dyn FolderPicker) -> StatusMessage {
        let label = kind.label();
        let title = format!("Select {label} Resource Directory");

        let folder = match picker.pick_folder(&title) {
            Ok(Some(folder)) if !folder.as_os_str().is_empty() => folder,
            Ok(_) => {
                debug!("Folder pick cancelled");
                return StatusMessage::failure(
                    FailureKind::Cancelled,
                    format!("{label} folder change cancelled."),
                );
            }
            Err(e) => {
                warn!(error = %e, "Folder picker failed");
                return StatusMessage::failure(
                    FailureKind::Picker,
                    format!("Could not pick {label} folder: {e}"),
                );
            }
        };

        match self.set_dir(kind, folder.clone()) {
            Ok(()) => StatusMessage::success(
                Outcome::Updated,
                format!("{label} Output Directory Updated:\n{}", folder.display()),
            ),
            Err(e) => {
                warn!(error = %e, "Saving preferences failed");
                StatusMessage::failure(
                    FailureKind::Preferences,
                    format!("Could not save {label} output directory: {e}"),
                )
            }
        }
    }
}
