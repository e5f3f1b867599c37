//! Session token claims, issuance, and verification.
//! Used by: handlers, guard, state.

pub mod claims;
pub mod sign;
pub mod verify;

use jsonwebtoken::Algorithm;

/// Every token is HMAC-SHA256 over the configured secret.
pub const ALGORITHM: Algorithm = Algorithm::HS256;
