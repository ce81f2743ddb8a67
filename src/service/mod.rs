//! Resource services: the generic engine plus the user and event specializations.

pub mod events;
mod registry;
pub mod resource;
pub mod users;

pub use events::{CreateEvent, EventService, Events, IncludeWithEvent, UpdateEvent, WhereEvent};
pub use registry::ServiceMap;
pub use resource::{AttachRelations, GetManyOverride, GetOneOverride, Resource, ResourceService, ServiceStatus};
pub use users::{CreateUser, IncludeWithUser, UpdateUser, UserService, Users, WhereUser};
