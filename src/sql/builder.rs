//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from declared layouts and descriptors.
//! Identifiers come from declared field names only; every value is a `?` parameter.

use super::descriptor::{FieldValue, Fields};
use super::SqlValue;
use crate::error::OrmError;

/// Joiner for top-level where fragments. Kept as a comma, not a conjunction; a descriptor that
/// constrains more than one field yields SQL most engines reject.
pub const WHERE_FRAGMENT_SEPARATOR: &str = ", ";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new(sql: String, params: Vec<SqlValue>) -> Self {
        QueryBuf { sql, params }
    }
}

/// INSERT columns and values from a create descriptor: skip ignored, relation and absent fields.
pub fn build_insert<D: Fields + ?Sized>(data: &D) -> Result<(Vec<String>, Vec<SqlValue>), OrmError> {
    let mut columns = Vec::new();
    let mut params = Vec::new();
    for entry in data.fields() {
        if !entry.field.is_persistable() {
            continue;
        }
        if let FieldValue::Value(v) = entry.value {
            columns.push(entry.field.column_name());
            params.push(v);
        }
    }
    if params.is_empty() {
        return Err(OrmError::InvalidInput("no values provided for insert statement".into()));
    }
    Ok((columns, params))
}

/// SET clause from an update descriptor: `col=?` per present persistable field, joined with ", ".
pub fn build_update<D: Fields + ?Sized>(data: &D) -> (String, Vec<SqlValue>) {
    let mut sets = Vec::new();
    let mut params = Vec::new();
    for entry in data.fields() {
        if !entry.field.is_persistable() {
            continue;
        }
        if let FieldValue::Value(v) = entry.value {
            sets.push(format!("{}=?", entry.field.column_name()));
            params.push(v);
        }
    }
    (sets.join(", "), params)
}

/// WHERE body from a where descriptor: predicates render against their column, scalars become `col=?`.
pub fn build_where<D: Fields + ?Sized>(filter: &D) -> (String, Vec<SqlValue>) {
    let mut fragments = Vec::new();
    let mut params = Vec::new();
    for entry in filter.fields() {
        if !entry.field.is_persistable() {
            continue;
        }
        let column = entry.field.column_name();
        match entry.value {
            FieldValue::Filter(p) => {
                let (sql, filter_params) = p.render(&column);
                if !sql.is_empty() {
                    fragments.push(sql);
                    params.extend(filter_params);
                }
            }
            FieldValue::Value(v) => {
                fragments.push(format!("{}=?", column));
                params.push(v);
            }
            FieldValue::Absent => {}
        }
    }
    (fragments.join(WHERE_FRAGMENT_SEPARATOR), params)
}

/// SELECT one row by id. The projection is the model's column list, in order.
pub fn select_by_id(table: &str, columns: &[String], id: i64) -> QueryBuf {
    QueryBuf::new(
        format!("SELECT {} FROM {} WHERE id=? LIMIT 1", columns.join(", "), table),
        vec![SqlValue::Int(id)],
    )
}

/// SELECT with an optional where body.
pub fn select_where(table: &str, columns: &[String], where_clause: &str, params: Vec<SqlValue>) -> QueryBuf {
    let where_clause = if where_clause.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_clause)
    };
    QueryBuf::new(
        format!("SELECT {} FROM {}{}", columns.join(", "), table, where_clause),
        params,
    )
}

pub fn insert(table: &str, columns: &[String], params: Vec<SqlValue>) -> QueryBuf {
    let placeholders = vec!["?"; params.len()].join(", ");
    QueryBuf::new(
        format!("INSERT INTO {} ({}) VALUES ({})", table, columns.join(","), placeholders),
        params,
    )
}

/// UPDATE by id; the id is bound after the SET parameters.
pub fn update(table: &str, set_clause: &str, mut params: Vec<SqlValue>, id: i64) -> QueryBuf {
    params.push(SqlValue::Int(id));
    QueryBuf::new(format!("UPDATE {} SET {} WHERE id=?", table, set_clause), params)
}

pub fn delete(table: &str, id: i64) -> QueryBuf {
    QueryBuf::new(format!("DELETE FROM {} WHERE id=?", table), vec![SqlValue::Int(id)])
}
