//! Bind result rows positionally onto model fields.
//!
//! Rows must be projected with the model's introspected column list, so value `i` belongs to the
//! `i`-th persistable field. A row whose width differs from the model's column count is rejected
//! before any field is read.

use crate::error::OrmError;
use crate::executor::Executor;
use crate::model::{columns_for, Field, Model};
use crate::sql::{SqlRow, SqlValue};

/// Conversion from a driver-neutral cell into a model field type.
pub trait FromSqlValue: Sized {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue>;
}

impl FromSqlValue for i64 {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Int(n) => Ok(n),
            SqlValue::Bool(b) => Ok(i64::from(b)),
            other => Err(other),
        }
    }
}

impl FromSqlValue for i32 {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Int(n) => i32::try_from(n).map_err(|_| SqlValue::Int(n)),
            other => Err(other),
        }
    }
}

impl FromSqlValue for bool {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Bool(b) => Ok(b),
            SqlValue::Int(0) => Ok(false),
            SqlValue::Int(1) => Ok(true),
            other => Err(other),
        }
    }
}

impl FromSqlValue for f64 {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Float(n) => Ok(n),
            SqlValue::Int(n) => Ok(n as f64),
            other => Err(other),
        }
    }
}

impl FromSqlValue for String {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Text(s) => Ok(s),
            SqlValue::Bytes(b) => String::from_utf8(b).map_err(|e| SqlValue::Bytes(e.into_bytes())),
            other => Err(other),
        }
    }
}

impl FromSqlValue for Vec<u8> {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Bytes(b) => Ok(b),
            SqlValue::Text(s) => Ok(s.into_bytes()),
            other => Err(other),
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    fn from_sql_value(value: SqlValue) -> Result<Self, SqlValue> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}

/// Cursor over one row, handing out values in persistable-field order.
pub struct RowReader<'a> {
    fields: Vec<&'a Field>,
    values: std::vec::IntoIter<SqlValue>,
    position: usize,
}

impl<'a> RowReader<'a> {
    pub fn new(fields: &'a [Field], row: SqlRow) -> Self {
        RowReader {
            fields: fields.iter().filter(|f| f.is_persistable()).collect(),
            values: row.values.into_iter(),
            position: 0,
        }
    }

    /// Read the next persistable field.
    pub fn next<T: FromSqlValue>(&mut self) -> Result<T, OrmError> {
        let column = self
            .fields
            .get(self.position)
            .map(|f| f.column_name())
            .ok_or_else(|| OrmError::Scan(format!("row read past field {}", self.position)))?;
        let value = self
            .values
            .next()
            .ok_or_else(|| OrmError::Scan(format!("row has no value for column '{}'", column)))?;
        self.position += 1;
        T::from_sql_value(value).map_err(|v| {
            OrmError::Scan(format!(
                "column '{}': cannot convert {} value to {}",
                column,
                v.kind(),
                std::any::type_name::<T>()
            ))
        })
    }
}

/// Materialize one row into `M`.
pub fn scan_row<M: Model>(row: SqlRow) -> Result<M, OrmError> {
    let expected = columns_for::<M>()?.len();
    if row.len() != expected {
        return Err(OrmError::Scan(format!(
            "row has {} values, {} expects {}",
            row.len(),
            std::any::type_name::<M>(),
            expected
        )));
    }
    let mut reader = RowReader::new(M::fields(), row);
    M::from_row(&mut reader)
}

/// Run a query expected to match one row. Zero rows is `NotFound`.
pub async fn scan_one<M: Model>(
    executor: &dyn Executor,
    table: &str,
    sql: &str,
    params: &[SqlValue],
) -> Result<M, OrmError> {
    let row = executor
        .query_one(sql, params)
        .await?
        .ok_or_else(|| OrmError::NotFound { table: table.to_string() })?;
    scan_row(row)
}

/// Run a query and materialize every row. Zero rows is an empty vec.
pub async fn scan_many<M: Model>(
    executor: &dyn Executor,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<M>, OrmError> {
    let rows = executor.query_many(sql, params).await?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(scan_row(row)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;
    use crate::test_utils::{event_row, RecordingExecutor};

    #[test]
    fn scans_event_in_field_order() {
        let event: Event = scan_row(event_row(5, 1, "L", Some("a.png"))).unwrap();
        assert_eq!(event.id, 5);
        assert_eq!(event.owner_user_id, 1);
        assert_eq!(event.label, "L");
        assert_eq!(event.cover_photo_path.as_deref(), Some("a.png"));
        assert!(event.cover_photo_url.is_none());
        assert!(event.owner.is_none());
    }

    #[test]
    fn rejects_rows_of_the_wrong_width() {
        let mut row = event_row(5, 1, "L", None);
        row.values.pop();
        assert!(matches!(scan_row::<Event>(row), Err(OrmError::Scan(_))));
    }

    #[test]
    fn reports_the_offending_column() {
        let mut row = event_row(5, 1, "L", None);
        row.values[1] = SqlValue::Text("one".into());
        let err = scan_row::<Event>(row).unwrap_err();
        assert!(err.to_string().contains("ownerUserId"), "{}", err);
    }

    #[test]
    fn option_accepts_null_and_bool_accepts_integers() {
        assert_eq!(Option::<String>::from_sql_value(SqlValue::Null), Ok(None));
        assert_eq!(bool::from_sql_value(SqlValue::Int(1)), Ok(true));
        assert!(bool::from_sql_value(SqlValue::Int(2)).is_err());
    }

    #[tokio::test]
    async fn single_scan_on_no_rows_is_not_found() {
        let executor = RecordingExecutor::new();
        let err = scan_one::<Event>(&executor, "events", "SELECT 1", &[]).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn many_scan_on_no_rows_is_empty() {
        let executor = RecordingExecutor::new();
        let events = scan_many::<Event>(&executor, "SELECT 1", &[]).await.unwrap();
        assert!(events.is_empty());
    }
}
