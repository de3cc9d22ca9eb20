//! Main HTTP server: routing and startup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;
use wildlens_vision::VisionProvider;

use crate::analyze_api;

/// Maximum accepted upload size. Phone camera JPEGs run well past axum's
/// 2 MB default.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub provider: Arc<VisionProvider>,
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_api::analyze_image))
        .route("/api/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "wildlens",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
