//! One-way password hashing with constant-time comparison.
//! Used by: credentials, identity::memory, state.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SALT_LEN: usize = 16;

/// Hash-and-compare capability used by the credential verifier.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;

    /// Returns `false` for a wrong password and for a malformed stored hash.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Salted SHA-256, stored as `<salt>$<digest>` in unpadded base64url.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    fn digest(salt: &[u8], password: &str) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        hasher.finalize().to_vec()
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = Self::digest(&salt, password);
        format!("{}${}", URL_SAFE_NO_PAD.encode(salt), URL_SAFE_NO_PAD.encode(digest))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((salt_b64, digest_b64)) = stored.split_once('$') else {
            return false;
        };
        let (Ok(salt), Ok(expected)) =
            (URL_SAFE_NO_PAD.decode(salt_b64), URL_SAFE_NO_PAD.decode(digest_b64))
        else {
            return false;
        };
        let actual = Self::digest(&salt, password);
        // ct_eq on slices of different length returns false without comparing bytes
        actual.as_slice().ct_eq(expected.as_slice()).into()
    }
}
