//! Descriptor walk: each create/update/where value lists its declared fields with their current values.

use super::builder::{build_insert, build_update, build_where};
use super::SqlValue;
use crate::error::OrmError;
use crate::filters::Predicate;
use crate::model::Field;

/// The value a descriptor holds in one declared field.
pub enum FieldValue<'a> {
    /// Present scalar, bound as a parameter.
    Value(SqlValue),
    /// Unset optional; imposes nothing and writes nothing.
    Absent,
    /// Predicate rendered against the field's column (where descriptors).
    Filter(&'a dyn Predicate),
}

pub struct FieldEntry<'a> {
    pub field: Field,
    pub value: FieldValue<'a>,
}

impl<'a> FieldEntry<'a> {
    pub fn value(name: &'static str, value: impl Into<SqlValue>) -> Self {
        FieldEntry {
            field: Field::column(name),
            value: FieldValue::Value(value.into()),
        }
    }

    pub fn optional<T: Into<SqlValue>>(name: &'static str, value: Option<T>) -> Self {
        FieldEntry {
            field: Field::column(name),
            value: value.map_or(FieldValue::Absent, |v| FieldValue::Value(v.into())),
        }
    }

    pub fn filter<P: Predicate>(name: &'static str, filter: Option<&'a P>) -> Self {
        FieldEntry {
            field: Field::column(name),
            value: filter.map_or(FieldValue::Absent, |p| FieldValue::Filter(p)),
        }
    }

    pub fn ignored(name: &'static str) -> Self {
        FieldEntry {
            field: Field::ignored(name),
            value: FieldValue::Absent,
        }
    }

    pub fn relation(name: &'static str) -> Self {
        FieldEntry {
            field: Field::relation(name),
            value: FieldValue::Absent,
        }
    }
}

/// Declared fields of a descriptor, in declaration order.
pub trait Fields {
    fn fields(&self) -> Vec<FieldEntry<'_>>;
}

pub trait CreateDescriptor: Fields + Send + Sync {
    /// INSERT columns and parameters. Override for a hand-specialized rendering.
    fn insert_sql(&self) -> Result<(Vec<String>, Vec<SqlValue>), OrmError> {
        build_insert(self)
    }
}

pub trait UpdateDescriptor: Fields + Send + Sync {
    /// SET clause (`col=?, col=?`) and parameters. Empty when nothing is set.
    fn set_sql(&self) -> (String, Vec<SqlValue>) {
        build_update(self)
    }
}

pub trait WhereDescriptor: Fields + Send + Sync {
    /// WHERE clause body and parameters. Empty when nothing constrains.
    fn where_sql(&self) -> (String, Vec<SqlValue>) {
        build_where(self)
    }
}
