//! # CourseHub Auth
//!
//! The inbound write paths of the representation layer.
//!
//! - [`validators`]: Registration, login and profile-update validation
//! - [`authenticator`]: The credential-checking collaborator
//! - [`password`]: bcrypt hashing helpers
//!
//! # Example
//!
//! ```ignore
//! use coursehub_auth::{StoreAuthenticator, validate_login, validate_registration};
//!
//! let new_user = validate_registration(body, &store)?;
//!
//! let authenticator = StoreAuthenticator::new(&store);
//! let principal = validate_login(credentials, &authenticator)?;
//! println!("Signed in as {}", principal.username);
//! ```

pub mod authenticator;
pub mod password;
pub mod validators;

pub use authenticator::{Authenticator, Principal, StoreAuthenticator};
pub use password::{hash_password, hash_password_with_cost, verify_password};
pub use validators::{
    INVALID_CREDENTIALS, USERNAME_TAKEN, validate_login, validate_profile_update,
    validate_registration,
};
