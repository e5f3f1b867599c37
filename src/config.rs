//! Signing secret and token lifetime, loaded once at startup.
//! Used by: main, state, token.

use chrono::Duration;

use crate::error::{Error, Result};

pub const SECRET_VAR: &str = "AUTH_JWT_SECRET";
pub const EXPIRES_IN_VAR: &str = "AUTH_JWT_EXPIRES_IN";
const DEFAULT_EXPIRES_IN: &str = "1d";

/// Immutable auth configuration shared by the issuer and the guard.
///
/// Custom `Debug` redacts the secret so the config can be logged.
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    expires_in: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, expires_in: Duration) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::Config(format!("{SECRET_VAR} must not be empty")));
        }
        if expires_in <= Duration::zero() {
            return Err(Error::Config("token lifetime must be positive".into()));
        }
        Ok(Self { secret, expires_in })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(SECRET_VAR)
            .ok_or_else(|| Error::Config(format!("{SECRET_VAR} is not set")))?;
        let raw_expiry = lookup(EXPIRES_IN_VAR).unwrap_or_else(|| DEFAULT_EXPIRES_IN.into());
        let expires_in = parse_expiry(&raw_expiry)?;
        Self::new(secret, expires_in)
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }
}

/// Parses lifetimes like `"1d"`, `"15m"`, `"2 hours"` or a bare count of seconds.
pub fn parse_expiry(raw: &str) -> Result<Duration> {
    let raw = raw.trim();
    let split = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);

    let amount: i64 = digits
        .parse()
        .map_err(|_| Error::Config(format!("invalid token lifetime: {raw:?}")))?;

    let unit_secs = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600,
        "d" | "day" | "days" => 86_400,
        "w" | "week" | "weeks" => 604_800,
        _ => return Err(Error::Config(format!("unknown unit in token lifetime: {raw:?}"))),
    };

    let secs = amount
        .checked_mul(unit_secs)
        .filter(|s| *s > 0)
        .ok_or_else(|| Error::Config(format!("token lifetime out of range: {raw:?}")))?;

    Duration::try_seconds(secs)
        .ok_or_else(|| Error::Config(format!("token lifetime out of range: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    mod expiry {
        use super::*;

        #[test]
        fn units() -> Result<()> {
            assert_eq!(parse_expiry("1d")?, Duration::seconds(86_400));
            assert_eq!(parse_expiry("15m")?, Duration::seconds(900));
            assert_eq!(parse_expiry("2h")?, Duration::seconds(7_200));
            assert_eq!(parse_expiry("1w")?, Duration::seconds(604_800));
            assert_eq!(parse_expiry("45s")?, Duration::seconds(45));
            Ok(())
        }

        #[test]
        fn bare_number_is_seconds() -> Result<()> {
            assert_eq!(parse_expiry("3600")?, Duration::seconds(3_600));
            Ok(())
        }

        #[test]
        fn long_unit_names() -> Result<()> {
            assert_eq!(parse_expiry("2 hours")?, Duration::seconds(7_200));
            assert_eq!(parse_expiry("1 Day")?, Duration::seconds(86_400));
            Ok(())
        }

        #[test]
        fn zero_rejected() {
            assert!(matches!(parse_expiry("0s"), Err(Error::Config(_))));
        }

        #[test]
        fn empty_rejected() {
            assert!(parse_expiry("").is_err());
        }

        #[test]
        fn unknown_unit_rejected() {
            assert!(parse_expiry("1y").is_err());
        }

        #[test]
        fn non_numeric_rejected() {
            assert!(parse_expiry("abc").is_err());
            assert!(parse_expiry("-5m").is_err());
        }

        #[test]
        fn overflow_rejected() {
            assert!(parse_expiry("99999999999999999w").is_err());
        }
    }

    #[test]
    fn defaults_to_one_day() -> Result<()> {
        let config = AuthConfig::from_lookup(lookup(&[(SECRET_VAR, "s3cret")]))?;
        assert_eq!(config.expires_in(), Duration::days(1));
        assert_eq!(config.secret(), b"s3cret");
        Ok(())
    }

    #[test]
    fn reads_configured_expiry() -> Result<()> {
        let config =
            AuthConfig::from_lookup(lookup(&[(SECRET_VAR, "s3cret"), (EXPIRES_IN_VAR, "10m")]))?;
        assert_eq!(config.expires_in(), Duration::minutes(10));
        Ok(())
    }

    #[test]
    fn missing_secret_is_config_error() {
        let result = AuthConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_secret_is_config_error() {
        let result = AuthConfig::from_lookup(lookup(&[(SECRET_VAR, "")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn bad_expiry_is_config_error() {
        let result =
            AuthConfig::from_lookup(lookup(&[(SECRET_VAR, "s3cret"), (EXPIRES_IN_VAR, "soon")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn debug_redacts_secret() -> Result<()> {
        let config = AuthConfig::new("top-secret-value", Duration::hours(1))?;
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("top-secret-value"));
        assert!(rendered.contains("[REDACTED]"));
        Ok(())
    }
}
