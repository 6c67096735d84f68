//! Application layer for fxforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, PreferenceStore)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Status**: The user-facing outcome of each call
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod status;

// Re-export main services
pub use services::{PreferenceStore, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, FolderPicker, PreferencesRepository};

pub use error::ApplicationError;
pub use status::{FailureKind, Outcome, StatusMessage};
