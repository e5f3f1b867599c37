//! Axum router and server setup.
//! Used by: main.

use std::any::Any;

use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::error::Error;
use crate::guard;
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/products", post(handlers::products::create))
        .route_layer(from_fn_with_state(state.clone(), guard::ensure_authenticated));

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/metrics", get(handlers::metrics::metrics))
        .route("/sessions", post(handlers::sessions::create))
        .route("/products", get(handlers::products::index))
        .merge(protected)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// A panicking handler becomes a generic 500 with the usual error body.
pub(crate) fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    Error::Internal("handler panicked".into()).into_response()
}

pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await
}
