//! # Example Request DTOs
//!
//! Payloads for the create, replace and patch endpoints. `text` is accepted
//! as an alias of `name` on input; responses always say `name`.
//! Store-owned fields (`id`, `createdAt`) are ignored if a client sends them.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Rejects names that are empty once surrounding whitespace is trimmed.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("name is required".into()));
    }
    Ok(())
}

/// Body of `POST /` and `PUT /{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRequest {
    #[serde(alias = "text")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    pub is_complete: Option<bool>,
}

/// Body of `PATCH /{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct RenameRequest {
    #[serde(alias = "text")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}
