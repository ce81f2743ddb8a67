use super::{compare, composite, null_check, Predicate};
use crate::sql::SqlValue;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoolFilter {
    pub equals: Option<bool>,
    pub is_not: Option<bool>,
    pub is_null: Option<bool>,
    pub or: Option<Vec<BoolFilter>>,
    pub and: Option<Vec<BoolFilter>>,
}

impl BoolFilter {
    pub fn equals(value: bool) -> Self {
        BoolFilter { equals: Some(value), ..Default::default() }
    }

    pub fn is_not(value: bool) -> Self {
        BoolFilter { is_not: Some(value), ..Default::default() }
    }

    pub fn is_null(value: bool) -> Self {
        BoolFilter { is_null: Some(value), ..Default::default() }
    }

    pub fn and(filters: Vec<BoolFilter>) -> Self {
        BoolFilter { and: Some(filters), ..Default::default() }
    }

    pub fn or(filters: Vec<BoolFilter>) -> Self {
        BoolFilter { or: Some(filters), ..Default::default() }
    }
}

impl Predicate for BoolFilter {
    fn render(&self, column_key: &str) -> (String, Vec<SqlValue>) {
        if let Some(v) = self.equals {
            compare(column_key, "=", v.into())
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
