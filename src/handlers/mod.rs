pub mod products;

use axum::{http::StatusCode, http::Uri, Json};
use serde_json::json;

use crate::error::AppError;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "product-list-service" })),
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
