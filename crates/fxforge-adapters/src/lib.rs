//! Infrastructure adapters for fxforge.
//!
//! This crate implements the ports defined in `fxforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod picker;
pub mod preferences;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use picker::FixedPicker;
pub use preferences::{InMemoryPreferences, JsonFilePreferences};
