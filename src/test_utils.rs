//! Shared fixtures for unit tests: a recording executor double and an in-memory SQLite executor.

use crate::error::OrmError;
use crate::executor::{Executor, PoolExecutor};
use crate::sql::{SqlRow, SqlValue};
use async_trait::async_trait;
use sqlx::any::AnyPoolOptions;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Records every statement and answers queries from a queue of canned row sets.
pub struct RecordingExecutor {
    calls: Mutex<Vec<(String, Vec<SqlValue>)>>,
    responses: Mutex<VecDeque<Vec<SqlRow>>>,
    affected: u64,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        RecordingExecutor {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            affected: 1,
        }
    }

    /// Queue the rows returned by the next query.
    pub fn respond(self, rows: Vec<SqlRow>) -> Self {
        self.responses.lock().unwrap().push_back(rows);
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<SqlValue>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, params: &[SqlValue]) {
        self.calls.lock().unwrap().push((sql.to_string(), params.to_vec()));
    }

    fn next_rows(&self) -> Vec<SqlRow> {
        self.responses.lock().unwrap().pop_front().unwrap_or_default()
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, OrmError> {
        self.record(sql, params);
        Ok(self.affected)
    }

    async fn query_one(&self, sql: &str, params: &[SqlValue]) -> Result<Option<SqlRow>, OrmError> {
        self.record(sql, params);
        Ok(self.next_rows().into_iter().next())
    }

    async fn query_many(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<SqlRow>, OrmError> {
        self.record(sql, params);
        Ok(self.next_rows())
    }
}

pub fn user_row(id: i64, email: &str) -> SqlRow {
    SqlRow::new(
        ["id", "email", "passwordHash", "createdAt", "updatedAt"].map(String::from).to_vec(),
        vec![
            SqlValue::Int(id),
            SqlValue::from(email),
            SqlValue::from("hash"),
            SqlValue::from("2024-01-01 00:00:00"),
            SqlValue::from("2024-01-01 00:00:00"),
        ],
    )
}

pub fn event_row(id: i64, owner_user_id: i64, label: &str, cover: Option<&str>) -> SqlRow {
    SqlRow::new(
        ["id", "ownerUserId", "label", "coverPhotoPath", "createdAt", "updatedAt"]
            .map(String::from)
            .to_vec(),
        vec![
            SqlValue::Int(id),
            SqlValue::Int(owner_user_id),
            SqlValue::from(label),
            SqlValue::from(cover),
            SqlValue::from("2024-01-01 00:00:00"),
            SqlValue::from("2024-01-01 00:00:00"),
        ],
    )
}

/// Single-connection in-memory SQLite pool; the database lives as long as that connection.
pub async fn memory_executor() -> PoolExecutor {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    PoolExecutor::new(pool)
}
