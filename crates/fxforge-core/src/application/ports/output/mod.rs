//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fxforge-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::Preferences;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fxforge_adapters::filesystem::LocalFilesystem` (production)
/// - `fxforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the persisted preferences record.
///
/// Implemented by:
/// - `fxforge_adapters::preferences::JsonFilePreferences` (production)
/// - `fxforge_adapters::preferences::InMemoryPreferences` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait PreferencesRepository: Send + Sync {
    /// Read the persisted record.
    ///
    /// Never fails: a missing or malformed record yields
    /// `Preferences::default()`.
    fn load(&self) -> Preferences;

    /// Replace the persisted record.
    fn save(&self, preferences: &Preferences) -> ForgeResult<()>;

    /// Where the record lives, when it lives on disk.
    fn location(&self) -> Option<PathBuf>;
}

/// Port for asking the user to choose a directory.
///
/// `Ok(None)` means the user cancelled.
#[cfg_attr(test, mockall::automock)]
pub trait FolderPicker {
    fn pick_folder(&self, title: &str) -> ForgeResult<Option<PathBuf>>;
}
