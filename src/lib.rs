//! Resource ORM: descriptor-driven CRUD services over a parameterized SQL executor.

pub mod case;
pub mod config;
pub mod error;
pub mod executor;
pub mod filters;
pub mod handlers;
pub mod model;
pub mod models;
pub mod response;
pub mod routes;
pub mod scan;
pub mod service;
pub mod sql;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use config::{init_tracing, AppConfig};
pub use error::{AppError, ConfigError, OrmError};
pub use executor::{Executor, PoolExecutor};
pub use filters::{BoolFilter, IntFilter, Predicate, StringFilter};
pub use model::{columns_for, Field, FieldKind, Model};
pub use models::{Event, User};
pub use routes::{app, common_routes, resource_routes};
pub use service::{
    CreateEvent, CreateUser, EventService, IncludeWithEvent, IncludeWithUser, ResourceService, ServiceMap,
    ServiceStatus, UpdateEvent, UpdateUser, UserService, WhereEvent, WhereUser,
};
pub use sql::{SqlRow, SqlValue};
pub use state::AppState;
