// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ResourceKind;

/// Root domain error type.
///
/// The `Display` text of the validation variants is shown to users verbatim
/// inside failure status messages, so it is phrased as a sentence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Resource name required.")]
    EmptyName,

    #[error("{} output path is not set (use the 📁 icon).", .kind.label())]
    OutputDirNotSet { kind: ResourceKind },

    #[error("unknown resource kind: {0}")]
    UnknownKind(String),

    // ========================================================================
    // Layout invariants
    // ========================================================================
    #[error("Duplicate path in resource layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in resource layout: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Give the resource a name, e.g. `fxforge new script myshop`".into(),
                "The name becomes both the folder name and the manifest name".into(),
            ],
            Self::OutputDirNotSet { kind } => vec![
                format!("No output directory configured for {} resources", kind.label()),
                format!("Try: fxforge dirs set {kind} <PATH>"),
                format!("Or pick one interactively: fxforge dirs pick {kind}"),
            ],
            Self::UnknownKind(_) => vec![
                "Supported kinds:".into(),
                "  • script - client/server/shared script resource".into(),
                "  • map    - map (MLO) resource with a stream folder".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::OutputDirNotSet { .. } | Self::UnknownKind(_) => {
                ErrorCategory::Validation
            }
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
