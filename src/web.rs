use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{api, planner::Planner};

/// Form submissions are tiny
const MAX_BODY_BYTES: usize = 16 * 1024;

pub fn app(planner: Planner) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(planner))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
}

pub async fn run(planner: Planner, port: u16) -> Result<()> {
    if !planner.has_credential() {
        tracing::warn!("No API key configured; itinerary requests will be refused");
    }

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app(planner))
        .await
        .context("Web server stopped unexpectedly")
}
