// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for fxforge.
//!
//! This module contains pure business logic: resource kinds, requests, the
//! preferences record, manifest text, and layout planning. All I/O is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or dialog calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod manifest;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    preferences::Preferences,
    request::ResourceRequest,
    resource_layout::{DirectoryToCreate, FileToWrite, FsEntry, ResourceLayout},
};

pub use error::{DomainError, ErrorCategory};

pub use manifest::plan_layout;
pub use value_objects::ResourceKind;

pub use validation::DomainValidator;
