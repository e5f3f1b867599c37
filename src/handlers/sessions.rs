//! Session creation: exchanges credentials for a signed token.
//! Used by: server.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// Missing fields deserialize as empty and fail credential checks like any mismatch.
#[derive(Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
}

pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>> {
    let Json(req) = payload?;

    let identity = state
        .credentials
        .verify(&req.username, &req.password)
        .map_err(|e| {
            state.metrics.record_login_failure();
            tracing::warn!(username = %req.username, "login failed");
            e
        })?;

    let token = state.token_issuer.issue(&identity)?;
    state.metrics.record_session();
    tracing::info!(user_id = identity.id, "session created");
    Ok(Json(SessionResponse { token }))
}
