use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_padded_email"))]
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret123")]
    pub password: String,
}

impl RegisterRequest {
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret123")]
    pub password: String,
}

impl LoginRequest {
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Surrounding whitespace is dropped on normalization, so it is ignored here too.
fn validate_padded_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email format".into()))
    }
}
