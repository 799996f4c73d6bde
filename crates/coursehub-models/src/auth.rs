//! Inbound authentication DTOs.
//!
//! Fields are optional at the serde level so that every missing field is
//! reported at once, each under its own key, instead of failing on the first
//! one.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::choices::Role;
use crate::users::{
    NewUser, validate_email_address, validate_name, validate_not_blank, validate_role,
    validate_username,
};
use crate::value_types::Email;

/// Registration request.
///
/// `role` defaults to `student`; `first_name` and `last_name` default to an
/// empty string.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_passwords_match", skip_on_field_errors = false))]
pub struct RegisterRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_username")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_email_address")
    )]
    #[schema(example = "student@example.com")]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_not_blank")
    )]
    pub password: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_not_blank")
    )]
    pub confirm_password: Option<String>,
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "student")]
    pub role: Option<String>,
    #[validate(custom(function = "validate_name"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "validate_name"))]
    pub last_name: Option<String>,
}

fn validate_passwords_match(request: &RegisterRequest) -> Result<(), ValidationError> {
    if let (Some(password), Some(confirm)) = (&request.password, &request.confirm_password)
        && password != confirm
    {
        return Err(ValidationError::new("password_mismatch")
            .with_message(Cow::Borrowed("Passwords don't match")));
    }
    Ok(())
}

impl RegisterRequest {
    /// Normalise a validated request into account-creation data.
    ///
    /// `confirm_password` is dropped here.
    pub fn into_new_user(self) -> NewUser {
        let email = self.email.unwrap_or_default();

        NewUser {
            username: self.username.unwrap_or_default().trim().to_string(),
            email: Email::new(&email).unwrap_or_else(|_| Email::new_unchecked(email)),
            password: self.password.unwrap_or_default(),
            role: self
                .role
                .as_deref()
                .and_then(|r| r.parse().ok())
                .unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default().trim().to_string(),
            last_name: self.last_name.unwrap_or_default().trim().to_string(),
        }
    }
}

/// What a successful registration returns: the request minus its
/// write-only password fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub username: String,
    pub email: Email,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

impl From<&NewUser> for RegistrationResponse {
    fn from(user: &NewUser) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Login request with username and password.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_not_blank")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "password123")]
    pub password: Option<String>,
}
