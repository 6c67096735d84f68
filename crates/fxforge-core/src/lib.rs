//! fxforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the fxforge
//! resource scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           fxforge-cli (CLI)             │
//! │     (Presentation, prints statuses)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, PreferenceStore)    │
//! │    Validate, write, report a status     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, PreferencesRepository,     │
//! │  FolderPicker)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     fxforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, JsonFilePreferences)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ResourceKind, ResourceRequest,        │
//! │   Preferences, manifests, layouts)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fxforge_core::{
//!     application::{PreferenceStore, ScaffoldService},
//!     domain::{ResourceKind, ResourceRequest},
//! };
//!
//! // 1. Open the preference store (with an injected repository)
//! let prefs = PreferenceStore::open(repository);
//!
//! // 2. Describe the resource
//! let request = ResourceRequest::new(ResourceKind::Script, "myshop")
//!     .with_description("Test Shop")
//!     .with_author("Alice");
//!
//! // 3. Scaffold it (with an injected filesystem)
//! let service = ScaffoldService::new(filesystem);
//! println!("{}", service.create(&request, &prefs));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FailureKind, Outcome, PreferenceStore, ScaffoldService, StatusMessage,
        ports::{Filesystem, FolderPicker, PreferencesRepository},
    };
    pub use crate::domain::{Preferences, ResourceKind, ResourceLayout, ResourceRequest};
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
