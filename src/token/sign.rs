//! HS256 session token issuance.
//! Used by: handlers::sessions, state.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::token::claims::Claims;
use crate::token::ALGORITHM;

pub struct TokenIssuer {
    key: EncodingKey,
    ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.secret()),
            ttl_seconds: config.expires_in().num_seconds(),
        }
    }

    /// Signs a token for an identity that has already been verified.
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    pub fn issue_at(&self, identity: &Identity, now: i64) -> Result<String> {
        let claims = Claims::new(identity.id, now, self.ttl_seconds);
        encode(&Header::new(ALGORITHM), &claims, &self.key).map_err(|e| Error::Signing(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn identity() -> Identity {
        Identity { id: 1, username: "rodrigo".into(), password_hash: String::new() }
    }

    fn issuer() -> TokenIssuer {
        let config = AuthConfig::new("test-secret", Duration::days(1)).unwrap();
        TokenIssuer::new(&config)
    }

    #[test]
    fn token_has_three_segments() -> Result<()> {
        let token = issuer().issue(&identity())?;
        assert_eq!(token.split('.').count(), 3);
        Ok(())
    }

    #[test]
    fn header_names_hs256() -> Result<()> {
        let token = issuer().issue(&identity())?;
        let header = jsonwebtoken::decode_header(&token).map_err(|e| Error::Internal(e.to_string()))?;
        assert_eq!(header.alg, ALGORITHM);
        Ok(())
    }

    #[test]
    fn repeated_issues_differ() -> Result<()> {
        let issuer = issuer();
        let first = issuer.issue_at(&identity(), 1_000)?;
        let second = issuer.issue_at(&identity(), 1_000)?;
        assert_ne!(first, second);
        Ok(())
    }
}
