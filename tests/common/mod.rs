#![allow(dead_code)]

use resource_orm::{Executor, PoolExecutor, ServiceMap};
use sqlx::any::AnyPoolOptions;
use std::sync::Arc;

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL,
        passwordHash TEXT NOT NULL,
        createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updatedAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ownerUserId INTEGER NOT NULL,
        label TEXT NOT NULL,
        coverPhotoPath TEXT,
        createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updatedAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
];

/// In-memory SQLite with the users/events schema. One connection keeps the database alive.
pub async fn sqlite_executor() -> Arc<PoolExecutor> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    let executor = Arc::new(PoolExecutor::new(pool));
    for statement in SCHEMA {
        executor.execute(statement, &[]).await.expect("schema");
    }
    executor
}

pub async fn services() -> ServiceMap {
    ServiceMap::build(sqlite_executor().await)
}
