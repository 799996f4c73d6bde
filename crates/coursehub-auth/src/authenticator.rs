//! Credential checking.

use std::sync::OnceLock;

use bcrypt::DEFAULT_COST;
use coursehub_db::RecordStore;
use coursehub_models::{Role, User, ids::UserId};
use tracing::{debug, warn};

use crate::password::{hash_password_with_cost, verify_password};

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// Checks a username/password pair.
///
/// Implementations must take about the same time whether or not the
/// username exists.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Option<Principal>;
}

/// Verifies bcrypt hashes of users held in a [`RecordStore`].
pub struct StoreAuthenticator<'a> {
    store: &'a dyn RecordStore,
    cost: u32,
    dummy_hash: OnceLock<Option<String>>,
}

impl<'a> StoreAuthenticator<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self::with_cost(store, DEFAULT_COST)
    }

    /// `cost` should match the cost stored hashes were made with, so that
    /// unknown usernames are checked as slowly as known ones.
    pub fn with_cost(store: &'a dyn RecordStore, cost: u32) -> Self {
        Self {
            store,
            cost,
            dummy_hash: OnceLock::new(),
        }
    }

    fn burn_dummy_verification(&self, password: &str) {
        let dummy = self.dummy_hash.get_or_init(|| {
            hash_password_with_cost("coursehub-dummy-password", self.cost)
                .inspect_err(|e| warn!(error = %e, "Failed to prepare dummy password hash"))
                .ok()
        });
        if let Some(dummy) = dummy {
            let _ = verify_password(password, dummy);
        }
    }
}

impl Authenticator for StoreAuthenticator<'_> {
    fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        let Some(user) = self.store.user_by_username(username) else {
            self.burn_dummy_verification(password);
            debug!("Authentication failed");
            return None;
        };

        match verify_password(password, &user.password) {
            Ok(true) => Some(Principal::from(&user)),
            Ok(false) => {
                debug!("Authentication failed");
                None
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Stored password hash is malformed");
                None
            }
        }
    }
}
