//! Validation of the inbound write paths.
//!
//! Each validator takes the raw JSON input, reports every problem it finds
//! at once as a field-keyed [`ValidationError`], and otherwise returns the
//! normalised data for the caller to persist.

use coursehub_core::{NON_FIELD_ERRORS, ValidatedInput, ValidationError};
use coursehub_db::RecordStore;
use coursehub_models::{LoginRequest, NewUser, RegisterRequest, UpdateProfileDto, User};
use serde_json::Value;
use tracing::{debug, instrument};
use validator::Validate;

use crate::authenticator::{Authenticator, Principal};

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn collect_errors<T: Validate>(dto: &T) -> ValidationError {
    match dto.validate() {
        Ok(()) => ValidationError::new(),
        Err(errors) => errors.into(),
    }
}

/// Adds the uniqueness error unless the username already failed its format
/// checks. `owner` is the user allowed to hold the name.
fn check_username_available(
    errors: &mut ValidationError,
    store: &dyn RecordStore,
    username: Option<&str>,
    owner: Option<&User>,
) {
    let Some(username) = username.map(str::trim) else {
        return;
    };
    if !errors.messages("username").is_empty() {
        return;
    }

    let taken = store
        .user_by_username(username)
        .is_some_and(|existing| owner.is_none_or(|owner| owner.id != existing.id));
    if taken {
        errors.add("username", USERNAME_TAKEN);
    }
}

/// Validate a registration request.
///
/// Returns the new account data with `confirm_password` stripped; the
/// password is not hashed yet.
#[instrument(skip_all)]
pub fn validate_registration(
    input: Value,
    store: &dyn RecordStore,
) -> Result<NewUser, ValidationError> {
    let request: RegisterRequest = serde_json::from_value(input)?;

    let mut errors = collect_errors(&request);
    check_username_available(&mut errors, store, request.username.as_deref(), None);

    if !errors.is_empty() {
        debug!(fields = %errors, "Registration rejected");
        return Err(errors);
    }

    Ok(request.into_new_user())
}

/// Validate login credentials and authenticate them.
///
/// Unknown usernames, wrong passwords and inactive accounts all produce the
/// same error.
#[instrument(skip_all)]
pub fn validate_login(
    input: Value,
    authenticator: &dyn Authenticator,
) -> Result<Principal, ValidationError> {
    let ValidatedInput(request) = ValidatedInput::<LoginRequest>::from_value(input)?;

    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    match authenticator.authenticate(&username, &password) {
        Some(principal) if principal.is_active => Ok(principal),
        _ => {
            debug!("Login rejected");
            Err(ValidationError::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS))
        }
    }
}

/// Validate a partial profile update of `existing`.
///
/// `id`, `points` and `level` are read-only and ignored if present. Returns
/// the updated record.
#[instrument(skip_all, fields(user_id = %existing.id))]
pub fn validate_profile_update(
    input: Value,
    existing: &User,
    store: &dyn RecordStore,
) -> Result<User, ValidationError> {
    let dto: UpdateProfileDto = serde_json::from_value(input)?;

    let mut errors = collect_errors(&dto);
    check_username_available(&mut errors, store, dto.username.as_deref(), Some(existing));

    if !errors.is_empty() {
        debug!(fields = %errors, "Profile update rejected");
        return Err(errors);
    }

    Ok(dto.apply_to(existing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use coursehub_db::MemoryStore;
    use coursehub_models::{Email, Role, ids::UserId};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user(id: i64, username: &str) -> User {
        User {
            id: UserId::new(id),
            username: username.to_string(),
            email: Email::new_unchecked(format!("{}@example.com", username)),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Student,
            points: 40,
            level: 2,
            bio: None,
            avatar: None,
            date_of_birth: None,
            phone: None,
            address: None,
            is_active: true,
            date_joined: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    struct Fixed(Option<Principal>);

    impl Authenticator for Fixed {
        fn authenticate(&self, _: &str, _: &str) -> Option<Principal> {
            self.0.clone()
        }
    }

    #[test]
    fn test_registration_reports_taken_username() {
        let mut store = MemoryStore::new();
        store.insert(user(1, "ada"));

        let err = validate_registration(
            json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "pw",
                "confirm_password": "pw",
            }),
            &store,
        )
        .unwrap_err();

        assert_eq!(err.messages("username"), [USERNAME_TAKEN.to_string()]);
    }

    #[test]
    fn test_registration_collects_every_error() {
        let store = MemoryStore::new();
        let err = validate_registration(
            json!({"email": "nope", "password": "a", "confirm_password": "b"}),
            &store,
        )
        .unwrap_err();

        let fields: Vec<&str> = err.fields().collect();
        assert_eq!(fields, vec!["email", NON_FIELD_ERRORS, "username"]);
        assert_eq!(
            err.messages(NON_FIELD_ERRORS),
            ["Passwords don't match".to_string()]
        );
    }

    #[test]
    fn test_login_inactive_principal_rejected() {
        let principal = Principal {
            user_id: UserId::new(1),
            username: "ada".to_string(),
            role: Role::Student,
            is_active: false,
        };
        let err = validate_login(
            json!({"username": "ada", "password": "pw"}),
            &Fixed(Some(principal)),
        )
        .unwrap_err();

        assert_eq!(
            err.messages(NON_FIELD_ERRORS),
            [INVALID_CREDENTIALS.to_string()]
        );
    }

    #[test]
    fn test_login_missing_fields_are_keyed() {
        let err = validate_login(json!({}), &Fixed(None)).unwrap_err();
        assert!(!err.messages("username").is_empty());
        assert!(!err.messages("password").is_empty());
    }

    #[test]
    fn test_profile_update_may_keep_own_username() {
        let mut store = MemoryStore::new();
        let ada = user(1, "ada");
        store.insert(ada.clone());
        store.insert(user(2, "grace"));

        let updated =
            validate_profile_update(json!({"username": "ada", "bio": "Hi"}), &ada, &store).unwrap();
        assert_eq!(updated.bio.as_deref(), Some("Hi"));

        let err = validate_profile_update(json!({"username": "grace"}), &ada, &store).unwrap_err();
        assert_eq!(err.messages("username"), [USERNAME_TAKEN.to_string()]);
    }

    #[test]
    fn test_profile_update_ignores_read_only_fields() {
        let store = MemoryStore::new();
        let ada = user(1, "ada");

        let updated = validate_profile_update(
            json!({"id": 99, "points": 1000, "level": 50, "address": "London"}),
            &ada,
            &store,
        )
        .unwrap();

        assert_eq!(updated.id, ada.id);
        assert_eq!(updated.points, 40);
        assert_eq!(updated.level, 2);
        assert_eq!(updated.address.as_deref(), Some("London"));
    }
}
