mod common;

use common::*;
use coursehub_auth::{
    INVALID_CREDENTIALS, StoreAuthenticator, USERNAME_TAKEN, hash_password_with_cost,
    validate_login, validate_profile_update, validate_registration,
};
use coursehub_core::NON_FIELD_ERRORS;
use coursehub_db::MemoryStore;
use coursehub_models::{RegistrationResponse, Role, UserId};
use coursehub_observability::try_init_test_logging;
use pretty_assertions::assert_eq;
use serde_json::json;

const TEST_COST: u32 = 4;

fn store_with_credentials(username: &str, password: &str, is_active: bool) -> MemoryStore {
    let mut store = seeded_store();
    let mut account = user(UserId::new(50), username, Role::Student);
    account.password = hash_password_with_cost(password, TEST_COST).unwrap();
    account.is_active = is_active;
    store.insert(account);
    store
}

#[test]
fn test_registration_success_strips_confirm_password() {
    try_init_test_logging();
    let store = seeded_store();

    let new_user = validate_registration(
        json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "correct horse",
            "confirm_password": "correct horse",
        }),
        &store,
    )
    .unwrap();

    assert_eq!(new_user.role, Role::Student);
    assert_eq!(new_user.first_name, "");
    assert_eq!(new_user.last_name, "");

    let body = serde_json::to_value(RegistrationResponse::from(&new_user)).unwrap();
    assert_eq!(
        keys(&body),
        vec!["username", "email", "role", "first_name", "last_name"]
    );
    assert!(body.get("confirm_password").is_none());
    assert!(body.get("password").is_none());
    assert_eq!(body["role"], "student");
}

#[test]
fn test_registration_keeps_supplied_role_and_names() {
    let store = seeded_store();

    let new_user = validate_registration(
        json!({
            "username": "grace",
            "email": "grace@example.com",
            "password": "pw",
            "confirm_password": "pw",
            "role": "instructor",
            "first_name": "Grace",
            "last_name": "Hopper",
        }),
        &store,
    )
    .unwrap();

    assert_eq!(new_user.role, Role::Instructor);
    assert_eq!(new_user.first_name, "Grace");
    assert_eq!(new_user.last_name, "Hopper");
}

#[test]
fn test_registration_password_mismatch() {
    let store = seeded_store();

    let err = validate_registration(
        json!({
            "username": "ada",
            "email": "ada@example.com",
            "password": "one",
            "confirm_password": "two",
        }),
        &store,
    )
    .unwrap_err();

    assert_eq!(
        err.messages(NON_FIELD_ERRORS),
        ["Passwords don't match".to_string()]
    );
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({"non_field_errors": ["Passwords don't match"]})
    );
}

#[test]
fn test_registration_missing_fields() {
    let store = seeded_store();

    let err = validate_registration(json!({}), &store).unwrap_err();

    for field in ["username", "email", "password", "confirm_password"] {
        assert_eq!(
            err.messages(field),
            ["This field is required.".to_string()],
            "{}",
            field
        );
    }
}

#[test]
fn test_registration_rejects_bad_values() {
    let store = seeded_store();

    let err = validate_registration(
        json!({
            "username": "has space",
            "email": "not-an-email",
            "password": "pw",
            "confirm_password": "pw",
            "role": "superuser",
        }),
        &store,
    )
    .unwrap_err();

    assert!(!err.messages("username").is_empty());
    assert_eq!(
        err.messages("email"),
        ["Enter a valid email address.".to_string()]
    );
    assert_eq!(
        err.messages("role"),
        ["\"superuser\" is not a valid choice.".to_string()]
    );
}

#[test]
fn test_registration_username_taken() {
    let store = seeded_store();

    let err = validate_registration(
        json!({
            "username": "student",
            "email": "other@example.com",
            "password": "pw",
            "confirm_password": "pw",
        }),
        &store,
    )
    .unwrap_err();

    assert_eq!(err.messages("username"), [USERNAME_TAKEN.to_string()]);
}

#[test]
fn test_login_success() {
    try_init_test_logging();
    let store = store_with_credentials("ada", "s3cret", true);
    let authenticator = StoreAuthenticator::with_cost(&store, TEST_COST);

    let principal =
        validate_login(json!({"username": "ada", "password": "s3cret"}), &authenticator).unwrap();

    assert_eq!(principal.user_id, UserId::new(50));
    assert_eq!(principal.username, "ada");
}

#[test]
fn test_login_failures_are_indistinguishable() {
    let store = store_with_credentials("ada", "s3cret", true);
    let authenticator = StoreAuthenticator::with_cost(&store, TEST_COST);

    let wrong_password =
        validate_login(json!({"username": "ada", "password": "guess"}), &authenticator)
            .unwrap_err();
    let unknown_user =
        validate_login(json!({"username": "nobody", "password": "s3cret"}), &authenticator)
            .unwrap_err();

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(
        serde_json::to_value(&wrong_password).unwrap(),
        json!({"non_field_errors": [INVALID_CREDENTIALS]})
    );
}

#[test]
fn test_login_inactive_user() {
    let store = store_with_credentials("ada", "s3cret", false);
    let authenticator = StoreAuthenticator::with_cost(&store, TEST_COST);

    let err = validate_login(json!({"username": "ada", "password": "s3cret"}), &authenticator)
        .unwrap_err();

    assert_eq!(
        err.messages(NON_FIELD_ERRORS),
        [INVALID_CREDENTIALS.to_string()]
    );
}

#[test]
fn test_profile_update() {
    let store = seeded_store();
    let existing = user(STUDENT, "student", Role::Student);

    let updated = validate_profile_update(
        json!({
            "bio": "Learning Rust",
            "date_of_birth": "1999-04-01",
            "points": 9999,
            "level": 99,
            "id": 12,
        }),
        &existing,
        &store,
    )
    .unwrap();

    assert_eq!(updated.bio.as_deref(), Some("Learning Rust"));
    assert_eq!(
        updated.date_of_birth.map(|d| d.to_string()).as_deref(),
        Some("1999-04-01")
    );
    assert_eq!(updated.points, existing.points);
    assert_eq!(updated.level, existing.level);
    assert_eq!(updated.id, STUDENT);
}

#[test]
fn test_profile_update_rejects_taken_username_and_bad_phone() {
    let store = seeded_store();
    let existing = user(STUDENT, "student", Role::Student);

    let err = validate_profile_update(
        json!({"username": "instructor", "phone": "call me"}),
        &existing,
        &store,
    )
    .unwrap_err();

    assert_eq!(err.messages("username"), [USERNAME_TAKEN.to_string()]);
    assert!(!err.messages("phone").is_empty());
}
