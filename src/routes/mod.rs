//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::resource_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{http::Uri, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Full application: common and resource routes with tracing and a body limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(resource_routes())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}
