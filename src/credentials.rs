//! Username/password verification against the identity store.
//! Used by: handlers::sessions, state.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::identity::{Identity, IdentityStore};
use crate::password::PasswordHasher;

pub struct CredentialVerifier {
    store: Arc<dyn IdentityStore>,
    hasher: Arc<dyn PasswordHasher>,
    // Compared against when the username is unknown so both failures cost one hash.
    decoy_hash: String,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        let decoy_hash = hasher.hash("decoy-password");
        Self { store, hasher, decoy_hash }
    }

    /// Unknown user and wrong password fail with the same error.
    pub fn verify(&self, username: &str, password: &str) -> Result<Identity> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::InvalidCredentials);
        }

        match self.store.find_by_username(username) {
            Some(identity) if self.hasher.verify(password, &identity.password_hash) => Ok(identity),
            Some(_) => Err(Error::InvalidCredentials),
            None => {
                let _ = self.hasher.verify(password, &self.decoy_hash);
                Err(Error::InvalidCredentials)
            }
        }
    }
}
