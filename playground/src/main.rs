//! Serves the user and event resources over HTTP.
//!
//! Run from repo root: `cargo run -p playground`

use resource_orm::{app, init_tracing, AppConfig, AppState, Executor, PoolExecutor, ServiceMap};
use std::sync::Arc;
use tokio::net::TcpListener;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL,
        passwordHash TEXT NOT NULL,
        createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updatedAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ownerUserId INTEGER NOT NULL REFERENCES users(id),
        label TEXT NOT NULL,
        coverPhotoPath TEXT,
        createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updatedAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    let executor = Arc::new(PoolExecutor::connect(&config.database_url, config.max_connections).await?);
    if config.database_url.starts_with("sqlite:") {
        for statement in SCHEMA {
            executor.execute(statement, &[]).await?;
        }
    }

    let state = AppState::new(ServiceMap::build(executor));
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("playground listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
