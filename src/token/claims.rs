//! JWT claims carried by session tokens.
//! Used by: token::sign, token::verify, guard.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Times are unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl Claims {
    pub fn new(user_id: i64, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_seconds),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// A token stops being valid at the instant of `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    pub fn user_id(&self) -> Result<i64> {
        self.sub.parse().map_err(|_| Error::InvalidToken)
    }
}
