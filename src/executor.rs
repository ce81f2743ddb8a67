//! Executor boundary: runs parameterized SQL and hands back driver-neutral rows.

use crate::error::OrmError;
use crate::sql::{format_debug_sql, SqlRow, SqlValue};
use async_trait::async_trait;
use sqlx::any::{AnyArguments, AnyPoolOptions, AnyRow};
use sqlx::query::Query;
use sqlx::{Any, AnyPool, Column, Row};

/// The three operations the resource engine needs from a database. Placeholders are `?`, bound in order.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run a statement and return the affected-row count.
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, OrmError>;

    /// First row of the result, if any.
    async fn query_one(&self, sql: &str, params: &[SqlValue]) -> Result<Option<SqlRow>, OrmError>;

    async fn query_many(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<SqlRow>, OrmError>;
}

/// Executor over a `sqlx` Any pool. Works with any driver that accepts `?` placeholders (SQLite, MySQL).
///
/// The Any driver has no date/time types: timestamp columns must be text-typed (`TEXT`, or
/// `VARCHAR` on MySQL) and are read back as `SqlValue::Text`. A MySQL `DATETIME`/`TIMESTAMP`
/// column fails the fetch with `OrmError::Db`.
#[derive(Clone)]
pub struct PoolExecutor {
    pool: AnyPool,
}

impl PoolExecutor {
    pub fn new(pool: AnyPool) -> Self {
        PoolExecutor { pool }
    }

    /// Install the compiled-in drivers and open a pool for `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, OrmError> {
        sqlx::any::install_default_drivers();
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(PoolExecutor { pool })
    }

    fn log_failure(sql: &str, params: &[SqlValue], e: &sqlx::Error) {
        tracing::warn!(query = %format_debug_sql(sql, params), error = %e, "query failed");
    }
}

#[async_trait]
impl Executor for PoolExecutor {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<u64, OrmError> {
        tracing::debug!(sql = %sql, params = ?params, "execute");
        let result = bind_all(sql, params).execute(&self.pool).await.map_err(|e| {
            Self::log_failure(sql, params, &e);
            e
        })?;
        Ok(result.rows_affected())
    }

    async fn query_one(&self, sql: &str, params: &[SqlValue]) -> Result<Option<SqlRow>, OrmError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let row = bind_all(sql, params).fetch_optional(&self.pool).await.map_err(|e| {
            Self::log_failure(sql, params, &e);
            e
        })?;
        Ok(row.as_ref().map(row_to_sql_row))
    }

    async fn query_many(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<SqlRow>, OrmError> {
        tracing::debug!(sql = %sql, params = ?params, "query");
        let rows = bind_all(sql, params).fetch_all(&self.pool).await.map_err(|e| {
            Self::log_failure(sql, params, &e);
            e
        })?;
        Ok(rows.iter().map(row_to_sql_row).collect())
    }
}

fn bind_all<'q>(sql: &'q str, params: &[SqlValue]) -> Query<'q, Any, AnyArguments<'q>> {
    let mut query = sqlx::query(sql);
    for p in params {
        query = match p {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(b) => query.bind(*b),
            SqlValue::Int(n) => query.bind(*n),
            SqlValue::Float(n) => query.bind(*n),
            SqlValue::Text(s) => query.bind(s.clone()),
            SqlValue::Bytes(b) => query.bind(b.clone()),
        };
    }
    query
}

fn row_to_sql_row(row: &AnyRow) -> SqlRow {
    let columns = row.columns().iter().map(|c| c.name().to_string()).collect();
    let values = (0..row.len()).map(|i| cell_to_value(row, i)).collect();
    SqlRow::new(columns, values)
}

/// Try each supported type in turn; a NULL cell decodes as `None` for all of them.
fn cell_to_value(row: &AnyRow, index: usize) -> SqlValue {
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(index) {
        return SqlValue::Int(n);
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(index) {
        return SqlValue::Float(n);
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(index) {
        return SqlValue::Bool(b);
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(index) {
        return SqlValue::Text(s);
    }
    if let Ok(Some(b)) = row.try_get::<Option<Vec<u8>>, _>(index) {
        return SqlValue::Bytes(b);
    }
    SqlValue::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::memory_executor;

    #[tokio::test]
    async fn round_trips_values_through_sqlite() {
        let executor = memory_executor().await;
        executor
            .execute(
                "CREATE TABLE things (id INTEGER PRIMARY KEY, name TEXT, score REAL, note TEXT)",
                &[],
            )
            .await
            .unwrap();
        let affected = executor
            .execute(
                "INSERT INTO things (name, score, note) VALUES (?, ?, ?)",
                &[SqlValue::from("a"), SqlValue::Float(1.5), SqlValue::Null],
            )
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let row = executor
            .query_one("SELECT id, name, score, note FROM things WHERE id=?", &[SqlValue::Int(1)])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.columns, vec!["id", "name", "score", "note"]);
        assert_eq!(
            row.values,
            vec![SqlValue::Int(1), SqlValue::from("a"), SqlValue::Float(1.5), SqlValue::Null]
        );

        let none = executor
            .query_one("SELECT id FROM things WHERE id=?", &[SqlValue::Int(99)])
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn text_timestamps_read_back_as_text() {
        let executor = memory_executor().await;
        executor
            .execute(
                "CREATE TABLE stamps (id INTEGER PRIMARY KEY, createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP)",
                &[],
            )
            .await
            .unwrap();
        executor.execute("INSERT INTO stamps (id) VALUES (?)", &[SqlValue::Int(1)]).await.unwrap();
        let row = executor
            .query_one("SELECT createdAt FROM stamps WHERE id=?", &[SqlValue::Int(1)])
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(&row.values[0], SqlValue::Text(s) if s.len() == "YYYY-MM-DD HH:MM:SS".len()), "{:?}", row);
    }

    #[tokio::test]
    async fn driver_errors_pass_through() {
        let executor = memory_executor().await;
        let err = executor.query_many("SELECT * FROM missing", &[]).await.unwrap_err();
        assert!(matches!(err, OrmError::Db(_)));
    }
}
