//! User records and the profile write path.
//!
//! - [`User`] - Persisted account record
//! - [`NewUser`] - Normalised registration data, ready for account creation
//! - [`UpdateProfileDto`] - Partial update of the profile view

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use coursehub_core::serde::deserialize_nullable;
use serde::Deserialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::choices::Role;
use crate::ids::UserId;
use crate::value_types::{Email, PhoneNumber};

/// Longest username (and first/last name) accepted on write.
pub const USERNAME_MAX_LENGTH: usize = 150;

/// A user account as stored.
///
/// `password` holds a bcrypt hash; `first_name`, `last_name`, `is_active`
/// and `date_joined` are never part of a user representation.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub points: i32,
    pub level: i32,
    pub bio: Option<String>,
    /// Storage name of the uploaded avatar image.
    pub avatar: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

/// Registration data after validation, with `confirm_password` stripped.
///
/// The password is still in clear text; hashing happens when the account is
/// created.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: Email,
    pub password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// DTO for updating the profile view of a user.
///
/// Every field is optional; absent fields are left unchanged. `id`,
/// `points` and `level` are read-only and are dropped if supplied.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,
    #[validate(custom(function = "validate_email_address"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[validate(custom(function = "validate_optional_phone"))]
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UpdateProfileDto {
    /// Apply the supplied fields to `user`, returning the updated record.
    ///
    /// Must only be called on a DTO that passed validation.
    pub fn apply_to(self, user: &User) -> User {
        let mut updated = user.clone();

        if let Some(username) = self.username {
            updated.username = username.trim().to_string();
        }
        if let Some(email) = self.email {
            updated.email = Email::new(&email).unwrap_or_else(|_| Email::new_unchecked(email));
        }
        if let Some(role) = self.role.as_deref().and_then(|r| r.parse().ok()) {
            updated.role = role;
        }
        if let Some(bio) = self.bio {
            updated.bio = blank_to_none(bio);
        }
        if let Some(avatar) = self.avatar {
            updated.avatar = blank_to_none(avatar);
        }
        if let Some(date_of_birth) = self.date_of_birth {
            updated.date_of_birth = date_of_birth;
        }
        if let Some(phone) = self.phone {
            updated.phone = blank_to_none(phone);
        }
        if let Some(address) = self.address {
            updated.address = blank_to_none(address);
        }

        updated
    }
}

fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", "This field may not be blank."));
    }
    Ok(())
}

/// Letters, digits and `@ . + - _`, at most 150 characters.
pub(crate) fn validate_username(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    validate_not_blank(value)?;

    if value.chars().count() > USERNAME_MAX_LENGTH {
        return Err(invalid(
            "max_length",
            format!(
                "Ensure this field has no more than {} characters.",
                USERNAME_MAX_LENGTH
            ),
        ));
    }

    let valid = value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if !valid {
        return Err(invalid(
            "invalid_username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }

    Ok(())
}

pub(crate) fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > USERNAME_MAX_LENGTH {
        return Err(invalid(
            "max_length",
            format!(
                "Ensure this field has no more than {} characters.",
                USERNAME_MAX_LENGTH
            ),
        ));
    }
    Ok(())
}

pub(crate) fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    Email::new(value)
        .map(|_| ())
        .map_err(|_| invalid("email", "Enter a valid email address."))
}

pub(crate) fn validate_role(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Role>()
        .map(|_| ())
        .map_err(|e| invalid("invalid_choice", e.to_string()))
}

fn validate_optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    PhoneNumber::new(value)
        .map(|_| ())
        .map_err(|e| invalid("phone", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> User {
        User {
            id: UserId::new(1),
            username: "ada".to_string(),
            email: Email::new_unchecked("ada@example.com"),
            password: "hash".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Student,
            points: 120,
            level: 3,
            bio: None,
            avatar: None,
            date_of_birth: None,
            phone: None,
            address: None,
            is_active: true,
            date_joined: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_username_rules() {
        assert!(validate_username("ada.lovelace+1@x").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username("ada lovelace").is_err());
        assert!(validate_username("ada!").is_err());
        assert!(validate_username(&"a".repeat(151)).is_err());
        assert!(validate_username(&"a".repeat(150)).is_ok());
    }

    #[test]
    fn test_role_rule_message() {
        let err = validate_role("professor").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("\"professor\" is not a valid choice.")
        );
        assert!(validate_role("instructor").is_ok());
    }

    #[test]
    fn test_update_profile_dto_validation() {
        let dto = UpdateProfileDto {
            username: Some("ada_l".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("+44 20 7946 0958".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateProfileDto {
            email: Some("nope".to_string()),
            phone: Some("abc".to_string()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_blank_phone_is_allowed() {
        let dto = UpdateProfileDto {
            phone: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_apply_to_changes_only_supplied_fields() {
        let original = user();
        let dto = UpdateProfileDto {
            bio: Some("  Mathematician ".to_string()),
            role: Some("instructor".to_string()),
            date_of_birth: Some(Some(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap())),
            ..Default::default()
        };

        let updated = dto.apply_to(&original);
        assert_eq!(updated.bio.as_deref(), Some("Mathematician"));
        assert_eq!(updated.role, Role::Instructor);
        assert_eq!(updated.date_of_birth, NaiveDate::from_ymd_opt(1815, 12, 10));
        assert_eq!(updated.username, original.username);
        assert_eq!(updated.points, original.points);
        assert_eq!(updated.level, original.level);
    }

    #[test]
    fn test_apply_to_clears_blank_values() {
        let mut original = user();
        original.phone = Some("5551234567".to_string());
        original.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 1);

        let dto = UpdateProfileDto {
            phone: Some(" ".to_string()),
            date_of_birth: Some(None),
            ..Default::default()
        };

        let updated = dto.apply_to(&original);
        assert_eq!(updated.phone, None);
        assert_eq!(updated.date_of_birth, None);
    }

    #[test]
    fn test_new_user_debug_redacts_password() {
        let new_user = NewUser {
            username: "ada".to_string(),
            email: Email::new_unchecked("ada@example.com"),
            password: "s3cret".to_string(),
            role: Role::Student,
            first_name: String::new(),
            last_name: String::new(),
        };
        let debug = format!("{:?}", new_user);
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
    }
}
