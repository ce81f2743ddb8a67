use super::{compare, composite, null_check, Predicate};
use crate::sql::SqlValue;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntFilter {
    pub equals: Option<i64>,
    pub less_than: Option<i64>,
    pub less_than_or_equal_to: Option<i64>,
    pub greater_than: Option<i64>,
    pub greater_than_or_equal_to: Option<i64>,
    pub is_not: Option<i64>,
    pub is_null: Option<bool>,
    pub or: Option<Vec<IntFilter>>,
    pub and: Option<Vec<IntFilter>>,
}

impl IntFilter {
    pub fn equals(value: i64) -> Self {
        IntFilter { equals: Some(value), ..Default::default() }
    }

    pub fn less_than(value: i64) -> Self {
        IntFilter { less_than: Some(value), ..Default::default() }
    }

    pub fn less_than_or_equal_to(value: i64) -> Self {
        IntFilter { less_than_or_equal_to: Some(value), ..Default::default() }
    }

    pub fn greater_than(value: i64) -> Self {
        IntFilter { greater_than: Some(value), ..Default::default() }
    }

    pub fn greater_than_or_equal_to(value: i64) -> Self {
        IntFilter { greater_than_or_equal_to: Some(value), ..Default::default() }
    }

    pub fn is_not(value: i64) -> Self {
        IntFilter { is_not: Some(value), ..Default::default() }
    }

    pub fn is_null(value: bool) -> Self {
        IntFilter { is_null: Some(value), ..Default::default() }
    }

    pub fn and(filters: Vec<IntFilter>) -> Self {
        IntFilter { and: Some(filters), ..Default::default() }
    }

    pub fn or(filters: Vec<IntFilter>) -> Self {
        IntFilter { or: Some(filters), ..Default::default() }
    }
}

impl Predicate for IntFilter {
    fn render(&self, column_key: &str) -> (String, Vec<SqlValue>) {
        if let Some(v) = self.equals {
            compare(column_key, "=", v.into())
        } else if let Some(v) = self.less_than {
            compare(column_key, "<", v.into())
        } else if let Some(v) = self.less_than_or_equal_to {
            compare(column_key, "<=", v.into())
        } else if let Some(v) = self.greater_than {
            compare(column_key, ">", v.into())
        } else if let Some(v) = self.greater_than_or_equal_to {
            compare(column_key, ">=", v.into())
        } else if let Some(v) = self.is_not {
            compare(column_key, "!=", v.into())
        } else if let Some(v) = self.is_null {
            null_check(column_key, v)
        } else if let Some(filters) = &self.and {
            composite(filters, column_key, " AND ")
        } else if let Some(filters) = &self.or {
            composite(filters, column_key, " OR ")
        } else {
            (String::new(), Vec::new())
        }
    }
}
