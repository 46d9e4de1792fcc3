use anyhow::Context;
use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::info;

mod catalog;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;

use crate::config::Config;
use crate::middleware::request_id_layer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_list_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    match config.cache_control() {
        Some(directive) => info!(cache_control = %directive, "Response caching enabled"),
        None => info!("Response caching headers disabled"),
    }

    let app = build_router(&config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Product list: GET http://{}/api/productlist", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(config: &Config) -> anyhow::Result<Router> {
    let mut products = Router::new().route(
        "/api/productlist",
        get(handlers::products::list_products),
    );

    if let Some(directive) = config.cache_control() {
        let value = HeaderValue::from_str(&directive).context("invalid Cache-Control value")?;
        products = products.layer(SetResponseHeaderLayer::if_not_present(CACHE_CONTROL, value));
    }

    Ok(Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .merge(products)
        .fallback(handlers::not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_layer)))
}
