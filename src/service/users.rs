//! User service: descriptors plus the relation hook that loads a user's events.

use super::events::{EventService, WhereEvent};
use super::resource::{AttachRelations, Resource, ResourceService};
use crate::error::OrmError;
use crate::executor::Executor;
use crate::filters::{IntFilter, StringFilter};
use crate::models::User;
use crate::sql::{CreateDescriptor, FieldEntry, Fields, UpdateDescriptor, WhereDescriptor};
use async_trait::async_trait;
use serde::Deserialize;
use std::ops::Deref;
use std::sync::{Arc, OnceLock, Weak};

pub const USERS_TABLE: &str = "users";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

impl Fields for CreateUser {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::value("Email", self.email.as_str()),
            FieldEntry::value("PasswordHash", self.password_hash.as_str()),
        ]
    }
}

impl CreateDescriptor for CreateUser {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl Fields for UpdateUser {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::optional("Email", self.email.as_deref()),
            FieldEntry::optional("PasswordHash", self.password_hash.as_deref()),
        ]
    }
}

impl UpdateDescriptor for UpdateUser {}

#[derive(Clone, Debug, Default)]
pub struct WhereUser {
    pub email: Option<StringFilter>,
}

impl Fields for WhereUser {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![FieldEntry::filter("Email", self.email.as_ref())]
    }
}

impl WhereDescriptor for WhereUser {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncludeWithUser {
    pub events: bool,
}

pub struct Users;

impl Resource for Users {
    type Model = User;
    type Create = CreateUser;
    type Update = UpdateUser;
    type Where = WhereUser;
    type Include = IncludeWithUser;
}

/// Loads `User.events`. The event service is wired after construction and held weakly.
#[derive(Default)]
struct UserRelations {
    events: OnceLock<Weak<EventService>>,
}

impl UserRelations {
    fn event_service(&self) -> Result<Arc<EventService>, OrmError> {
        self.events
            .get()
            .and_then(Weak::upgrade)
            .ok_or_else(|| OrmError::Setup { table: USERS_TABLE.to_string() })
    }
}

#[async_trait]
impl AttachRelations<Users> for UserRelations {
    async fn attach_relations(&self, user: &mut User, include: &IncludeWithUser) -> Result<(), OrmError> {
        if include.events {
            let events = self.event_service()?;
            let filter = WhereEvent {
                owner_user_id: Some(IntFilter::equals(user.id)),
                ..Default::default()
            };
            user.events = Some(events.get_many(&filter, None).await?);
        }
        Ok(())
    }
}

pub struct UserService {
    resource: ResourceService<Users>,
    relations: Arc<UserRelations>,
}

impl UserService {
    /// `events` may be `None` when the event service does not exist yet; wire it later with
    /// [`UserService::set_event_service`].
    pub fn new(executor: Arc<dyn Executor>, events: Option<&Arc<EventService>>) -> Self {
        let relations = Arc::new(UserRelations::default());
        let resource = ResourceService::<Users>::setup(executor, USERS_TABLE).with_attach_relations(relations.clone());
        let service = UserService { resource, relations };
        if let Some(events) = events {
            service.set_event_service(events);
        }
        service
    }

    /// Post-construction wiring. Only the first call takes effect.
    pub fn set_event_service(&self, events: &Arc<EventService>) {
        if self.relations.events.set(Arc::downgrade(events)).is_err() {
            tracing::warn!("event service already wired into user service");
        }
    }
}

impl Deref for UserService {
    type Target = ResourceService<Users>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
