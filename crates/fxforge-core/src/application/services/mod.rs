//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a resource" or "pick a folder".

pub mod preference_store;
pub mod scaffold_service;

pub use preference_store::PreferenceStore;
pub use scaffold_service::ScaffoldService;
