//! Generic CRUD over one table, with per-model override hooks.

use crate::error::OrmError;
use crate::executor::Executor;
use crate::model::{columns_for, Model};
use crate::scan::{scan_many, scan_one};
use crate::sql::{self, CreateDescriptor, UpdateDescriptor, WhereDescriptor};
use async_trait::async_trait;
use std::sync::Arc;

/// Bundles the types one resource service is instantiated over.
pub trait Resource: Send + Sync + 'static {
    type Model: Model;
    type Create: CreateDescriptor;
    type Update: UpdateDescriptor;
    type Where: WhereDescriptor;
    /// Relation switches consulted by relation attachment.
    type Include: Send + Sync;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Running,
    /// Column introspection failed at setup; every operation short-circuits.
    Failed,
}

/// Replaces the default single-record fetch, including relation attachment.
#[async_trait]
pub trait GetOneOverride<R: Resource>: Send + Sync {
    async fn get_one_by_id(&self, id: i64, include: Option<&R::Include>) -> Result<R::Model, OrmError>;
}

/// Replaces the default multi-record fetch, including relation attachment.
#[async_trait]
pub trait GetManyOverride<R: Resource>: Send + Sync {
    async fn get_many(&self, filter: &R::Where, include: Option<&R::Include>) -> Result<Vec<R::Model>, OrmError>;
}

/// Fills relation fields on a fetched record.
#[async_trait]
pub trait AttachRelations<R: Resource>: Send + Sync {
    async fn attach_relations(&self, record: &mut R::Model, include: &R::Include) -> Result<(), OrmError>;
}

pub struct ResourceService<R: Resource> {
    table: String,
    executor: Arc<dyn Executor>,
    columns: Arc<[String]>,
    status: ServiceStatus,
    get_one_override: Option<Arc<dyn GetOneOverride<R>>>,
    get_many_override: Option<Arc<dyn GetManyOverride<R>>>,
    attach_relations_override: Option<Arc<dyn AttachRelations<R>>>,
}

impl<R: Resource> ResourceService<R> {
    /// Introspect the model's columns once. A failure leaves the service in `Failed`.
    pub fn setup(executor: Arc<dyn Executor>, table: impl Into<String>) -> Self {
        let table = table.into();
        let (columns, status) = match columns_for::<R::Model>() {
            Ok(cols) => (cols, ServiceStatus::Running),
            Err(e) => {
                tracing::error!(table = %table, error = %e, "failed to set up service, could not derive columns from model");
                (Arc::from(Vec::new()), ServiceStatus::Failed)
            }
        };
        ResourceService {
            table,
            executor,
            columns,
            status,
            get_one_override: None,
            get_many_override: None,
            attach_relations_override: None,
        }
    }

    pub fn with_get_one_override(mut self, hook: Arc<dyn GetOneOverride<R>>) -> Self {
        self.get_one_override = Some(hook);
        self
    }

    pub fn with_get_many_override(mut self, hook: Arc<dyn GetManyOverride<R>>) -> Self {
        self.get_many_override = Some(hook);
        self
    }

    pub fn with_attach_relations(mut self, hook: Arc<dyn AttachRelations<R>>) -> Self {
        self.attach_relations_override = Some(hook);
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    fn ensure_running(&self) -> Result<(), OrmError> {
        match self.status {
            ServiceStatus::Running => Ok(()),
            ServiceStatus::Failed => Err(OrmError::Setup { table: self.table.clone() }),
        }
    }

    /// Insert one row. Returns the affected-row count.
    pub async fn create(&self, data: &R::Create) -> Result<u64, OrmError> {
        self.ensure_running()?;
        let (columns, params) = data.insert_sql()?;
        if params.is_empty() {
            return Err(OrmError::InvalidInput("no values provided for insert statement".into()));
        }
        let q = sql::insert(&self.table, &columns, params);
        self.executor.execute(&q.sql, &q.params).await
    }

    /// Fetch one row by id, then attach relations when `include` is given.
    pub async fn get_one_by_id(&self, id: i64, include: Option<&R::Include>) -> Result<R::Model, OrmError> {
        if let Some(hook) = &self.get_one_override {
            return hook.get_one_by_id(id, include).await;
        }
        self.ensure_running()?;
        let q = sql::select_by_id(&self.table, &self.columns, id);
        let mut record: R::Model = scan_one(self.executor.as_ref(), &self.table, &q.sql, &q.params).await?;
        if let Some(include) = include {
            self.attach_relations(&mut record, include).await?;
        }
        Ok(record)
    }

    /// Fetch every row matching `filter`; relations are attached to each returned record.
    pub async fn get_many(&self, filter: &R::Where, include: Option<&R::Include>) -> Result<Vec<R::Model>, OrmError> {
        if let Some(hook) = &self.get_many_override {
            return hook.get_many(filter, include).await;
        }
        self.ensure_running()?;
        let (where_clause, params) = filter.where_sql();
        let q = sql::select_where(&self.table, &self.columns, &where_clause, params);
        let mut records: Vec<R::Model> = scan_many(self.executor.as_ref(), &q.sql, &q.params).await?;
        if let Some(include) = include {
            for record in records.iter_mut() {
                self.attach_relations(record, include).await?;
            }
        }
        Ok(records)
    }

    /// Update one row by id. Returns the affected-row count.
    pub async fn update_one(&self, id: i64, data: &R::Update) -> Result<u64, OrmError> {
        self.ensure_running()?;
        let (set_clause, params) = data.set_sql();
        if set_clause.is_empty() || params.is_empty() {
            return Err(OrmError::InvalidInput("no values provided for update statement".into()));
        }
        let q = sql::update(&self.table, &set_clause, params, id);
        self.executor.execute(&q.sql, &q.params).await
    }

    /// Delete one row by id. Returns the affected-row count.
    pub async fn delete_one_by_id(&self, id: i64) -> Result<u64, OrmError> {
        self.ensure_running()?;
        let q = sql::delete(&self.table, id);
        self.executor.execute(&q.sql, &q.params).await
    }

    /// No-op unless a relation hook is registered.
    pub async fn attach_relations(&self, record: &mut R::Model, include: &R::Include) -> Result<(), OrmError> {
        match &self.attach_relations_override {
            Some(hook) => hook.attach_relations(record, include).await,
            None => Ok(()),
        }
    }
}
