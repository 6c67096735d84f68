pub mod preferences;
pub mod request;
pub mod resource_layout;

pub use crate::domain::DomainError;
pub use preferences::Preferences;
pub use request::ResourceRequest;
pub use resource_layout::ResourceLayout;
