//! HS256 session token verification.
//! Used by: guard, state.

use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::token::claims::Claims;
use crate::token::ALGORITHM;

pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.set_required_spec_claims(&["exp", "sub"]);
        // expiry is checked against our own clock in verify_at
        validation.validate_exp = false;
        validation.leeway = 0;
        Self {
            key: DecodingKey::from_secret(config.secret()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Checks signature, algorithm, required claims, and expiry as of `now`.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            tracing::warn!(reason = %e, "token rejected");
            Error::InvalidToken
        })?;

        let claims = data.claims;
        if claims.is_expired_at(now) {
            tracing::warn!(sub = %claims.sub, exp = claims.exp, "token rejected: expired");
            return Err(Error::InvalidToken);
        }
        Ok(claims)
    }
}
