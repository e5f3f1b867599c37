//! Product endpoints; creation sits behind the token guard.
//! Used by: server.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::guard::AuthenticatedUser;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductCreated {
    pub message: String,
    pub user_id: i64,
}

pub async fn index() -> Json<ProductList> {
    Json(ProductList { message: "List of products".into() })
}

pub async fn create(user: AuthenticatedUser) -> Json<ProductCreated> {
    tracing::info!(user_id = user.id, "product created");
    Json(ProductCreated { message: "Product created".into(), user_id: user.id })
}
