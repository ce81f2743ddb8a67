//! Builds the user and event services and wires their mutual relation hooks.

use super::events::EventService;
use super::users::UserService;
use crate::executor::Executor;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceMap {
    pub users: Arc<UserService>,
    pub events: Arc<EventService>,
}

impl ServiceMap {
    /// Users first without an event reference, then events over the users service, then the
    /// late reference is patched into users.
    pub fn build(executor: Arc<dyn Executor>) -> Self {
        let users = Arc::new(UserService::new(executor.clone(), None));
        let events = Arc::new(EventService::new(executor, users.clone()));
        users.set_event_service(&events);
        tracing::debug!(users = users.table(), events = events.table(), "services wired");
        ServiceMap { users, events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrmError;
    use crate::executor::Executor;
    use crate::service::events::IncludeWithEvent;
    use crate::service::resource::ServiceStatus;
    use crate::service::users::IncludeWithUser;
    use crate::test_utils::{event_row, user_row, RecordingExecutor};

    #[test]
    fn both_services_come_up_running() {
        let services = ServiceMap::build(Arc::new(RecordingExecutor::new()));
        assert_eq!(services.users.status(), ServiceStatus::Running);
        assert_eq!(services.events.status(), ServiceStatus::Running);
        assert_eq!(services.users.table(), "users");
        assert_eq!(services.events.table(), "events");
    }

    #[tokio::test]
    async fn user_include_events_queries_by_owner() {
        let executor = Arc::new(
            RecordingExecutor::new()
                .respond(vec![user_row(1, "a@x.com")])
                .respond(vec![event_row(5, 1, "L", None)]),
        );
        let services = ServiceMap::build(executor.clone());
        let user = services
            .users
            .get_one_by_id(1, Some(&IncludeWithUser { events: true }))
            .await
            .unwrap();
        let events = user.events.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 5);

        let calls = executor.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].0.ends_with("FROM events WHERE ownerUserId = ?"), "{}", calls[1].0);
        assert_eq!(calls[1].1, vec![crate::sql::SqlValue::Int(1)]);
    }

    #[tokio::test]
    async fn event_include_user_resolves_owner() {
        let executor = Arc::new(
            RecordingExecutor::new()
                .respond(vec![event_row(5, 1, "L", None)])
                .respond(vec![user_row(1, "a@x.com")]),
        );
        let services = ServiceMap::build(executor);
        let event = services
            .events
            .get_one_by_id(5, Some(&IncludeWithEvent { user: true }))
            .await
            .unwrap();
        assert_eq!(event.owner.map(|u| u.email), Some("a@x.com".to_string()));
    }

    #[tokio::test]
    async fn missing_owner_aborts_the_fetch() {
        let executor = Arc::new(RecordingExecutor::new().respond(vec![event_row(5, 42, "L", None)]));
        let services = ServiceMap::build(executor);
        let err = services
            .events
            .get_one_by_id(5, Some(&IncludeWithEvent { user: true }))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn unwired_user_service_fails_relation_with_setup_error() {
        let executor: Arc<dyn Executor> = Arc::new(RecordingExecutor::new().respond(vec![user_row(1, "a@x.com")]));
        let users = UserService::new(executor, None);
        let err = users
            .get_one_by_id(1, Some(&IncludeWithUser { events: true }))
            .await
            .unwrap_err();
        assert!(matches!(err, OrmError::Setup { .. }));
    }

    #[tokio::test]
    async fn users_do_not_keep_the_event_service_alive() {
        let executor = Arc::new(RecordingExecutor::new().respond(vec![user_row(1, "a@x.com")]));
        let services = ServiceMap::build(executor);
        let users = services.users.clone();
        drop(services);
        assert_eq!(Arc::strong_count(&users), 1);
        let err = users
            .get_one_by_id(1, Some(&IncludeWithUser { events: true }))
            .await
            .unwrap_err();
        assert!(matches!(err, OrmError::Setup { .. }));
    }
}
