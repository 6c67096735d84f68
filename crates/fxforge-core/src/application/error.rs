//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Preferences could not be written.
    #[error("Could not save preferences to {path}: {reason}")]
    PersistenceFailed { path: PathBuf, reason: String },

    /// The folder picker could not be shown or read.
    #[error("Folder picker failed: {reason}")]
    PickerFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::PersistenceFailed { path, .. } => vec![
                format!("Preferences file: {}", path.display()),
                "Check that its parent directory is writable".into(),
            ],
            Self::PickerFailed { .. } => vec![
                "Set the directory directly instead: fxforge dirs set <KIND> <PATH>".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::PersistenceFailed { .. } => ErrorCategory::Configuration,
            Self::PickerFailed { .. } => ErrorCategory::Internal,
        }
    }
}
