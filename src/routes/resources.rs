//! CRUD routes for users and events.

use crate::handlers::{events, users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::read).patch(users::update).delete(users::delete))
        .route("/events", get(events::list).post(events::create))
        .route("/events/:id", get(events::read).patch(events::update).delete(events::delete))
}
