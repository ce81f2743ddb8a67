//! Event service: descriptors plus the relation hook that loads an event's owner.

use super::resource::{AttachRelations, Resource, ResourceService};
use super::users::UserService;
use crate::error::OrmError;
use crate::executor::Executor;
use crate::filters::{IntFilter, StringFilter};
use crate::models::Event;
use crate::sql::{CreateDescriptor, FieldEntry, Fields, SqlValue, UpdateDescriptor, WhereDescriptor};
use async_trait::async_trait;
use serde::Deserialize;
use std::ops::Deref;
use std::sync::Arc;

pub const EVENTS_TABLE: &str = "events";

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub owner_user_id: i64,
    pub label: String,
    pub cover_photo_path: Option<String>,
}

impl Fields for CreateEvent {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::value("OwnerUserId", self.owner_user_id),
            FieldEntry::value("Label", self.label.as_str()),
            FieldEntry::optional("CoverPhotoPath", self.cover_photo_path.as_deref()),
        ]
    }
}

impl CreateDescriptor for CreateEvent {
    /// Specialized walk: the fixed columns first, the cover photo only when set.
    fn insert_sql(&self) -> Result<(Vec<String>, Vec<SqlValue>), OrmError> {
        let mut columns = vec!["ownerUserId".to_string(), "label".to_string()];
        let mut params = vec![SqlValue::Int(self.owner_user_id), SqlValue::from(self.label.as_str())];
        if let Some(path) = &self.cover_photo_path {
            columns.push("coverPhotoPath".to_string());
            params.push(SqlValue::from(path.as_str()));
        }
        Ok((columns, params))
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub label: Option<String>,
    pub cover_photo_path: Option<String>,
}

impl Fields for UpdateEvent {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::optional("Label", self.label.as_deref()),
            FieldEntry::optional("CoverPhotoPath", self.cover_photo_path.as_deref()),
        ]
    }
}

impl UpdateDescriptor for UpdateEvent {}

#[derive(Clone, Debug, Default)]
pub struct WhereEvent {
    pub owner_user_id: Option<IntFilter>,
    pub label: Option<StringFilter>,
}

impl Fields for WhereEvent {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::filter("OwnerUserId", self.owner_user_id.as_ref()),
            FieldEntry::filter("Label", self.label.as_ref()),
        ]
    }
}

impl WhereDescriptor for WhereEvent {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncludeWithEvent {
    pub user: bool,
}

pub struct Events;

impl Resource for Events {
    type Model = Event;
    type Create = CreateEvent;
    type Update = UpdateEvent;
    type Where = WhereEvent;
    type Include = IncludeWithEvent;
}

/// Loads `Event.owner` through the user service.
struct EventRelations {
    users: Arc<UserService>,
}

#[async_trait]
impl AttachRelations<Events> for EventRelations {
    async fn attach_relations(&self, event: &mut Event, include: &IncludeWithEvent) -> Result<(), OrmError> {
        if include.user {
            let owner = self.users.get_one_by_id(event.owner_user_id, None).await?;
            event.owner = Some(Box::new(owner));
        }
        Ok(())
    }
}

pub struct EventService {
    resource: ResourceService<Events>,
}

impl EventService {
    pub fn new(executor: Arc<dyn Executor>, users: Arc<UserService>) -> Self {
        let relations = Arc::new(EventRelations { users });
        EventService {
            resource: ResourceService::<Events>::setup(executor, EVENTS_TABLE).with_attach_relations(relations),
        }
    }
}

impl Deref for EventService {
    type Target = ResourceService<Events>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::build_insert;

    #[test]
    fn specialized_insert_matches_generic_walk() {
        let with_cover = CreateEvent {
            owner_user_id: 1,
            label: "L".into(),
            cover_photo_path: Some("c.png".into()),
        };
        let without_cover = CreateEvent {
            cover_photo_path: None,
            ..with_cover.clone()
        };
        for data in [with_cover, without_cover] {
            assert_eq!(data.insert_sql().unwrap(), build_insert(&data).unwrap());
        }
    }
}
