//! Declared field layouts and the memoized column list derived from them.

use crate::case::to_lower_camel_case;
use crate::error::OrmError;
use crate::scan::RowReader;
use std::any::{type_name, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// How a declared field takes part in persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar value stored in its own column.
    Column,
    /// Never persisted nor introspected (derived or computed values).
    Ignored,
    /// Nested record or sequence filled by relation attachment; never a column.
    Relation,
}

/// One declared field: PascalCase name plus its persistence kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn column(name: &'static str) -> Self {
        Field { name, kind: FieldKind::Column }
    }

    pub const fn ignored(name: &'static str) -> Self {
        Field { name, kind: FieldKind::Ignored }
    }

    pub const fn relation(name: &'static str) -> Self {
        Field { name, kind: FieldKind::Relation }
    }

    pub fn is_persistable(&self) -> bool {
        self.kind == FieldKind::Column
    }

    pub fn column_name(&self) -> String {
        to_lower_camel_case(self.name)
    }
}

/// A persisted entity. `fields` is the declared layout in declaration order; `from_row` reads the
/// persistable fields back from a row in that same order.
pub trait Model: Sized + Send + Sync + 'static {
    fn fields() -> &'static [Field];

    fn from_row(row: &mut RowReader<'_>) -> Result<Self, OrmError>;
}

type ColumnCache = RwLock<HashMap<TypeId, Arc<[String]>>>;

fn column_cache() -> &'static ColumnCache {
    static CACHE: OnceLock<ColumnCache> = OnceLock::new();
    CACHE.get_or_init(Default::default)
}

/// Ordered persistable column names for `M`. Computed once per model type; failures are not cached.
pub fn columns_for<M: Model>() -> Result<Arc<[String]>, OrmError> {
    let key = TypeId::of::<M>();
    if let Some(cols) = column_cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(cols.clone());
    }

    let derived: Arc<[String]> = derive_columns(type_name::<M>(), M::fields())?.into();
    let mut cache = column_cache().write().unwrap_or_else(PoisonError::into_inner);
    Ok(cache.entry(key).or_insert(derived).clone())
}

/// Walk a layout: skip ignored and relation fields, lower-camel the rest.
pub fn derive_columns(model: &str, fields: &[Field]) -> Result<Vec<String>, OrmError> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for field in fields.iter().filter(|f| f.is_persistable()) {
        if field.name.is_empty() {
            return Err(OrmError::Shape(format!("{} declares a field with an empty name", model)));
        }
        let column = field.column_name();
        if !seen.insert(column.clone()) {
            return Err(OrmError::Shape(format!("{} maps two fields to column '{}'", model, column)));
        }
        columns.push(column);
    }
    if columns.is_empty() {
        return Err(OrmError::Shape(format!("{} has no persistable fields", model)));
    }
    Ok(columns)
}
