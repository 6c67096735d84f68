//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fxforge-adapters` (and the
//! interactive picker in `fxforge-cli`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `PreferencesRepository`: Persisted output directories
//!   - `FolderPicker`: Asking the user for a directory
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI calls the services directly)

pub mod output;

pub use output::{Filesystem, FolderPicker, PreferencesRepository};

#[cfg(test)]
pub use output::{MockFilesystem, MockFolderPicker, MockPreferencesRepository};
