//! Comparison predicates usable as where-descriptor fields.
//!
//! Each filter is a struct of optional slots. Exactly one slot is expected to be set; when several
//! are, the first in evaluation order wins: equals, type-specific comparisons, is_not, is_null,
//! and, or. An empty filter renders to an empty fragment with no parameters.

mod bool_filter;
mod int_filter;
mod string_filter;

pub use bool_filter::BoolFilter;
pub use int_filter::IntFilter;
pub use string_filter::StringFilter;

use crate::sql::SqlValue;

/// Renders a condition on one column to a SQL fragment plus its ordered `?` parameters.
pub trait Predicate: Send + Sync {
    fn render(&self, column_key: &str) -> (String, Vec<SqlValue>);
}

/// `"<col> <op> ?"` with a single bound value.
fn compare(column_key: &str, op: &str, value: SqlValue) -> (String, Vec<SqlValue>) {
    (format!("{} {} ?", column_key, op), vec![value])
}

fn null_check(column_key: &str, is_null: bool) -> (String, Vec<SqlValue>) {
    if is_null {
        (format!("{} IS NULL", column_key), Vec::new())
    } else {
        (format!("{} IS NOT NULL", column_key), Vec::new())
    }
}

/// Render children, drop empty fragments, join and parenthesize. No surviving fragment renders empty.
fn composite<P: Predicate>(children: &[P], column_key: &str, joiner: &str) -> (String, Vec<SqlValue>) {
    let mut fragments = Vec::with_capacity(children.len());
    let mut params = Vec::new();
    for child in children {
        let (sql, child_params) = child.render(column_key);
        if !sql.is_empty() {
            fragments.push(sql);
        }
        params.extend(child_params);
    }
    if fragments.is_empty() {
        return (String::new(), params);
    }
    (format!("({})", fragments.join(joiner)), params)
}

#[cfg(test)]
pub(crate) fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}
