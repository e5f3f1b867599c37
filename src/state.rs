//! Shared application state.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::credentials::CredentialVerifier;
use crate::identity::memory::MemoryIdentityStore;
use crate::identity::IdentityStore;
use crate::password::{PasswordHasher, Sha256Hasher};
use crate::telemetry::Metrics;
use crate::token::sign::TokenIssuer;
use crate::token::verify::TokenVerifier;

pub struct AppStateInner {
    pub credentials: CredentialVerifier,
    pub token_issuer: TokenIssuer,
    pub token_verifier: TokenVerifier,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

struct StateBuilder {
    store: Arc<dyn IdentityStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl StateBuilder {
    fn build(self, config: &AuthConfig) -> AppState {
        Arc::new(AppStateInner {
            credentials: CredentialVerifier::new(self.store, self.hasher),
            token_issuer: TokenIssuer::new(config),
            token_verifier: TokenVerifier::new(config),
            metrics: Metrics::new(),
        })
    }
}

pub fn build_state(config: &AuthConfig) -> AppState {
    let hasher = Arc::new(Sha256Hasher);
    let store = MemoryIdentityStore::with_default_user(hasher.as_ref());
    tracing::info!(identities = store.len(), "identity store ready");
    build_state_with(config, Arc::new(store), hasher)
}

/// State with a caller-supplied identity backend.
pub fn build_state_with(
    config: &AuthConfig,
    store: Arc<dyn IdentityStore>,
    hasher: Arc<dyn PasswordHasher>,
) -> AppState {
    StateBuilder { store, hasher }.build(config)
}

#[cfg(test)]
pub const TEST_SECRET: &str = "test-secret";

#[cfg(test)]
pub fn test_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET, chrono::Duration::days(1)).expect("valid test config")
}

#[cfg(test)]
pub fn build_test_state() -> AppState {
    build_state(&test_config())
}
