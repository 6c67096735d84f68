use crate::domain::{
    entities::{ResourceLayout, ResourceRequest},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ResourceRequest) -> Result<(), DomainError> {
        request.validate()
    }

    pub fn validate_layout(layout: &ResourceLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
