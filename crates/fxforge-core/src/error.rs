//! The error every public fxforge-core operation can return.
//!
//! Services usually fold these into a [`StatusMessage`]; `ForgeError` is
//! what crosses the boundary when a caller wants the structured cause
//! (a dry-run plan, for instance).
//!
//! [`StatusMessage`]: crate::application::StatusMessage

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForgeError {
    /// The request or the planned layout is invalid.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A port (filesystem, preferences, picker) failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl ForgeError {
    /// Hints for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification used by front ends to pick exit codes and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller can fix it by changing the request or a directory.
    Validation,
    /// Preferences could not be stored.
    Configuration,
    Internal,
}

pub type ForgeResult<T> = Result<T, ForgeError>;
