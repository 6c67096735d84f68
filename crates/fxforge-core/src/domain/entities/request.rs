use crate::domain::{error::DomainError, value_objects::ResourceKind};

/// A single scaffolding request.
///
/// Transient: it lives for one invocation and is never persisted. Only
/// `name` is validated; `description` and `author` are free text and may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    kind: ResourceKind,
    name: String,
    description: String,
    author: String,
}

impl ResourceRequest {
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: String::new(),
            author: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Folder name and declared manifest name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }
}
