//! Read-only in-memory identity store.
//! Used by: state.

use std::collections::HashMap;

use crate::identity::{Identity, IdentityStore};
use crate::password::PasswordHasher;

pub const DEFAULT_USER_ID: i64 = 1;
pub const DEFAULT_USERNAME: &str = "rodrigo";
const DEFAULT_PASSWORD: &str = "123456";

#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    by_username: HashMap<Box<str>, Identity>,
}

impl MemoryIdentityStore {
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        let by_username = identities
            .into_iter()
            .map(|identity| (identity.username.clone().into_boxed_str(), identity))
            .collect();
        Self { by_username }
    }

    /// Store holding the single built-in account, hashed with `hasher`.
    pub fn with_default_user(hasher: &dyn PasswordHasher) -> Self {
        Self::new([Identity {
            id: DEFAULT_USER_ID,
            username: DEFAULT_USERNAME.into(),
            password_hash: hasher.hash(DEFAULT_PASSWORD),
        }])
    }

    pub fn len(&self) -> usize {
        self.by_username.len()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn find_by_username(&self, username: &str) -> Option<Identity> {
        self.by_username.get(username).cloned()
    }
}
