use axum::{http::StatusCode, Json};
use tracing::debug;

use crate::{catalog, models::ProductListResponse};

// ── GET /api/productlist ──────────────────────────────────────────────────────

pub async fn list_products() -> (StatusCode, Json<ProductListResponse>) {
    let response = ProductListResponse::new(catalog::products());

    debug!(count = response.total_count, "Listed products");

    (StatusCode::OK, Json(response))
}
