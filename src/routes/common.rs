//! Common routes: status, health, version.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    message: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn status() -> Json<StatusBody> {
    Json(StatusBody { message: "Stable" })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /status, GET /health, GET /version. No state.
pub fn common_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status))
        .route("/health", get(health))
        .route("/version", get(version))
}
