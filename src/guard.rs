//! Bearer-token guard for protected routes.
//!
//! Runs before every protected handler: the `Authorization` header must be
//! `Bearer <jwt>`, the token must carry a valid HS256 signature under the
//! configured secret, and it must not be past its `exp`. On success the
//! subject is attached to the request as an [`AuthenticatedUser`]; on any
//! failure the handler is never invoked.
//! Used by: server, handlers::products.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{Error, Result};
use crate::state::AppState;

const BEARER: &str = "Bearer";

/// Subject of a verified session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts.extensions.get::<AuthenticatedUser>().copied().ok_or(Error::MissingToken)
    }
}

/// Splits `"<scheme> <token>"` and returns the token when the scheme is Bearer.
pub fn bearer_token(value: &str) -> Result<&str> {
    let mut words = value.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case(BEARER) => Ok(token),
        (Some(scheme), Some(_), None) => {
            tracing::warn!(scheme = %scheme, "token rejected: unsupported authorization scheme");
            Err(Error::InvalidToken)
        }
        _ => {
            tracing::warn!("token rejected: malformed authorization header");
            Err(Error::InvalidToken)
        }
    }
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthenticatedUser> {
    let header = headers.get(AUTHORIZATION).ok_or_else(|| {
        tracing::warn!("token rejected: missing authorization header");
        Error::MissingToken
    })?;
    let value = header.to_str().map_err(|_| {
        tracing::warn!("token rejected: non-ascii authorization header");
        Error::InvalidToken
    })?;

    let claims = state.token_verifier.verify(bearer_token(value)?)?;
    let id = claims.user_id().map_err(|e| {
        tracing::warn!(sub = %claims.sub, "token rejected: subject is not a user id");
        e
    })?;
    Ok(AuthenticatedUser { id })
}

pub async fn ensure_authenticated(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = match authenticate(&state, request.headers()) {
        Ok(user) => user,
        Err(e) => {
            state.metrics.record_reject();
            return Err(e);
        }
    };

    state.metrics.record_accept();
    tracing::debug!(user_id = user.id, "request authenticated");
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
