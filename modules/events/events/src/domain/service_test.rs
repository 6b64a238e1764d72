use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eventhub_db::{DBProvider, DBRunner, DbConfig, DbHandle};
use eventhub_errors::Envelope;
use events_sdk::{CreateEventRequest, EventsApi, UpdateEventRequest};
use http::StatusCode;
use sea_orm::ActiveValue;
use time::macros::datetime;
use uuid::Uuid;

use super::repo::{EventRepository, EventWithPackages};
use super::service::{EventService, ensure_creator};
use crate::config::EventsConfig;
use crate::infra::storage::entity::{event, package};

// In-memory stand-in for the store; the runner it receives is never touched.
#[derive(Default)]
struct MockRepository {
    events: Mutex<Vec<event::Model>>,
    packages: Vec<package::Model>,
    fail_writes: bool,
}

impl MockRepository {
    fn with_events(events: Vec<event::Model>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    fn snapshot(&self) -> Vec<event::Model> {
        self.events.lock().unwrap().clone()
    }

    fn write_failure<T>(&self, action: &str) -> Option<Envelope<T>> {
        self.fail_writes.then(|| {
            Envelope::failure_with(
                format!("Failed to {action} entity: store offline"),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        })
    }
}

#[async_trait]
impl EventRepository for MockRepository {
    async fn add<C: DBRunner>(
        &self,
        _runner: &C,
        event: event::ActiveModel,
    ) -> Envelope<event::Model> {
        if let Some(failure) = self.write_failure("add") {
            return failure;
        }
        let take = |v: ActiveValue<String>| v.unwrap();
        let model = event::Model {
            id: Uuid::new_v4(),
            creator_id: take(event.creator_id),
            event_name: take(event.event_name),
            category: take(event.category),
            image_url: event.image_url.unwrap(),
            event_date: event.event_date.unwrap(),
            location: take(event.location),
            description: take(event.description),
        };
        self.events.lock().unwrap().push(model.clone());
        Envelope::success(model)
    }

    async fn update<C: DBRunner>(&self, _runner: &C, event: event::Model) -> Envelope<event::Model> {
        if let Some(failure) = self.write_failure("update") {
            return failure;
        }
        let mut events = self.events.lock().unwrap();
        let slot = events.iter_mut().find(|e| e.id == event.id).unwrap();
        *slot = event.clone();
        Envelope::success(event)
    }

    async fn delete<C: DBRunner>(&self, _runner: &C, event: event::Model) -> Envelope<event::Model> {
        if let Some(failure) = self.write_failure("delete") {
            return failure;
        }
        self.events.lock().unwrap().retain(|e| e.id != event.id);
        Envelope::success(event)
    }

    async fn get_all<C: DBRunner>(&self, _runner: &C) -> Envelope<Vec<event::Model>> {
        Envelope::success(self.snapshot())
    }

    async fn get_all_by_creator<C: DBRunner>(
        &self,
        _runner: &C,
        creator_id: &str,
    ) -> Envelope<Vec<event::Model>> {
        Envelope::success(
            self.snapshot()
                .into_iter()
                .filter(|e| e.creator_id == creator_id)
                .collect(),
        )
    }

    async fn get_by_id<C: DBRunner>(&self, _runner: &C, id: Uuid) -> Option<event::Model> {
        self.snapshot().into_iter().find(|e| e.id == id)
    }

    async fn get_all_with_packages<C: DBRunner>(&self, _runner: &C) -> Vec<EventWithPackages> {
        self.snapshot()
            .into_iter()
            .map(|e| (e, self.packages.clone()))
            .collect()
    }

    async fn get_one_with_packages<C: DBRunner>(
        &self,
        _runner: &C,
        id: Uuid,
    ) -> Option<EventWithPackages> {
        self.snapshot()
            .into_iter()
            .find(|e| e.id == id)
            .map(|e| (e, self.packages.clone()))
    }
}

fn stored(creator: &str) -> event::Model {
    event::Model {
        id: Uuid::new_v4(),
        creator_id: creator.to_owned(),
        event_name: "Launch".to_owned(),
        category: "tech".to_owned(),
        image_url: None,
        event_date: datetime!(2026-03-01 18:00 UTC),
        location: "Hall A".to_owned(),
        description: "Release party".to_owned(),
    }
}

fn vip() -> package::Model {
    package::Model {
        id: Uuid::new_v4(),
        package_name: "VIP".to_owned(),
        seating_arrangement: None,
        placement: None,
        price: None,
        currency: None,
    }
}

fn create_request() -> CreateEventRequest {
    CreateEventRequest {
        event_name: "Launch".to_owned(),
        category: "tech".to_owned(),
        image_url: None,
        event_date: datetime!(2026-03-01 18:00 UTC),
        location: "Hall A".to_owned(),
        description: "Release party".to_owned(),
    }
}

fn update_request() -> UpdateEventRequest {
    UpdateEventRequest {
        event_name: "Relaunch".to_owned(),
        category: "music".to_owned(),
        image_url: None,
        event_date: datetime!(2026-04-01 20:00 UTC),
        location: "Hall B".to_owned(),
        description: "Second round".to_owned(),
    }
}

// The mock never queries, so an unmigrated pool is enough to hand out runners.
async fn service(
    repo: Arc<MockRepository>,
    config: EventsConfig,
) -> EventService<MockRepository> {
    let cfg = DbConfig {
        dsn: "sqlite::memory:".to_owned(),
        max_conns: Some(1),
        ..DbConfig::default()
    };
    let db = DbHandle::connect(&cfg).await.unwrap().into_db();
    EventService::new(DBProvider::new(db), repo, config)
}

#[test]
fn ensure_creator_accepts_only_the_creator() {
    let event = stored("u1");
    assert!(ensure_creator(&event, "u1").is_ok());
    assert!(matches!(
        ensure_creator(&event, "u2"),
        Err(super::error::DomainError::Forbidden { .. })
    ));
}

#[tokio::test]
async fn create_stamps_acting_user_and_returns_created() {
    let repo = Arc::new(MockRepository::default());
    let svc = service(repo.clone(), EventsConfig::default()).await;

    let res = svc.create_event(create_request(), "u1").await;

    assert!(res.is_success());
    assert_eq!(res.status(), StatusCode::CREATED);
    let events = repo.snapshot();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].creator_id, "u1");
}

#[tokio::test]
async fn create_passes_store_failure_through() {
    let repo = Arc::new(MockRepository {
        fail_writes: true,
        ..MockRepository::default()
    });
    let svc = service(repo.clone(), EventsConfig::default()).await;

    let res = svc.create_event(create_request(), "u1").await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.error(), Some("Failed to add entity: store offline"));
    assert!(repo.snapshot().is_empty());
}

#[tokio::test]
async fn get_missing_event_is_not_found() {
    let svc = service(Arc::new(MockRepository::default()), EventsConfig::default()).await;

    let res = svc.get_event_by_id(Uuid::new_v4()).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.error(), Some("Event not found"));
    assert!(res.result().is_none());
}

#[tokio::test]
async fn update_by_creator_overwrites_fields() {
    let original = stored("u1");
    let repo = Arc::new(MockRepository::with_events(vec![original.clone()]));
    let svc = service(repo.clone(), EventsConfig::default()).await;

    let res = svc.update_event(original.id, update_request(), "u1").await;

    assert!(res.is_success());
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let after = &repo.snapshot()[0];
    assert_eq!(after.id, original.id);
    assert_eq!(after.creator_id, "u1");
    assert_eq!(after.event_name, "Relaunch");
    assert_eq!(after.location, "Hall B");
}

#[tokio::test]
async fn update_by_other_user_is_forbidden_and_leaves_row() {
    let original = stored("u1");
    let repo = Arc::new(MockRepository::with_events(vec![original.clone()]));
    let svc = service(repo.clone(), EventsConfig::default()).await;

    let res = svc.update_event(original.id, update_request(), "u2").await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(res.error(), Some("Unauthorized"));
    assert_eq!(repo.snapshot(), vec![original]);
}

#[tokio::test]
async fn delete_checks_existence_before_ownership() {
    let original = stored("u1");
    let repo = Arc::new(MockRepository::with_events(vec![original.clone()]));
    let svc = service(repo.clone(), EventsConfig::default()).await;

    let missing = svc.delete_event(Uuid::new_v4(), "u2").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let denied = svc.delete_event(original.id, "u2").await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    assert_eq!(repo.snapshot().len(), 1);

    let deleted = svc.delete_event(original.id, "u1").await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(repo.snapshot().is_empty());
}

#[tokio::test]
async fn delete_store_failure_is_reported() {
    let original = stored("u1");
    let repo = Arc::new(MockRepository {
        events: Mutex::new(vec![original.clone()]),
        fail_writes: true,
        ..MockRepository::default()
    });
    let svc = service(repo.clone(), EventsConfig::default()).await;

    let res = svc.delete_event(original.id, "u1").await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.error(), Some("Failed to delete entity: store offline"));
    assert_eq!(repo.snapshot().len(), 1);
}

#[tokio::test]
async fn list_attaches_packages_only_when_configured() {
    let repo = Arc::new(MockRepository {
        events: Mutex::new(vec![stored("u1")]),
        packages: vec![vip()],
        fail_writes: false,
    });

    let plain = service(repo.clone(), EventsConfig::default()).await;
    let res = plain.list_events().await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.result().unwrap()[0].packages.is_empty());

    let eager = service(
        repo,
        EventsConfig {
            list_includes_packages: true,
        },
    )
    .await;
    let res = eager.list_events().await;
    assert_eq!(res.result().unwrap()[0].packages.len(), 1);
}

#[tokio::test]
async fn list_by_creator_filters() {
    let repo = Arc::new(MockRepository::with_events(vec![
        stored("u1"),
        stored("u2"),
        stored("u1"),
    ]));
    let svc = service(repo, EventsConfig::default()).await;

    let res = svc.list_events_by_creator("u1").await;

    let events = res.result().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.creator_id == "u1"));
}
