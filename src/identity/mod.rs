//! Identity records and the lookup capability the credential verifier depends on.
//! Used by: credentials, state.

pub mod memory;

/// A known user. Only the password hash is kept.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

pub trait IdentityStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<Identity>;
}
