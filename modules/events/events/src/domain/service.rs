use std::sync::Arc;

use async_trait::async_trait;
use eventhub_db::{DBProvider, DBRunner};
use eventhub_errors::Envelope;
use events_sdk::{
    CreateEventRequest, Event, EventResult, EventsApi, EventsError, UpdateEventRequest,
};
use http::StatusCode;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::error::DomainError;
use super::factory;
use super::repo::EventRepository;
use crate::config::EventsConfig;
use crate::infra::storage::entity::event;

/// Database entrypoint used by the service; infrastructure errors surface as [`DomainError`].
pub type EventsDb = DBProvider<DomainError>;

/// Only the creator of an event may change it.
///
/// # Errors
/// Returns [`DomainError::Forbidden`] when `acting_user_id` is not the creator.
pub fn ensure_creator(event: &event::Model, acting_user_id: &str) -> Result<(), DomainError> {
    if event.creator_id == acting_user_id {
        return Ok(());
    }
    warn!(
        event_id = %event.id,
        acting_user = acting_user_id,
        "modification denied: caller is not the creator"
    );
    Err(DomainError::forbidden(event.id, acting_user_id))
}

/// Event business logic on top of an [`EventRepository`].
pub struct EventService<R: EventRepository> {
    db: EventsDb,
    repo: Arc<R>,
    config: EventsConfig,
}

impl<R: EventRepository> EventService<R> {
    #[must_use]
    pub fn new(db: EventsDb, repo: Arc<R>, config: EventsConfig) -> Self {
        Self { db, repo, config }
    }

    /// Persist a new event owned by `acting_user_id`.
    ///
    /// # Errors
    /// Returns [`DomainError::Store`] when the insert fails.
    #[instrument(skip(self, request), fields(acting_user = acting_user_id))]
    pub async fn create(
        &self,
        request: CreateEventRequest,
        acting_user_id: &str,
    ) -> Result<Event, DomainError> {
        let conn = self.db.conn()?;
        let created = self
            .repo
            .add(&conn, factory::from_request(request, acting_user_id))
            .await
            .into_result()
            .map_err(|f| DomainError::store(f, "Failed to create event"))?;

        info!(event_id = %created.id, "event created");
        Ok(factory::to_dto(created, Vec::new()))
    }

    /// # Errors
    /// Returns [`DomainError::Store`] when the listing fails. The eager variant
    /// reports store failures as an empty list.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let conn = self.db.conn()?;
        let events: Vec<Event> = if self.config.list_includes_packages {
            self.repo
                .get_all_with_packages(&conn)
                .await
                .into_iter()
                .map(|(event, packages)| factory::to_dto(event, packages))
                .collect()
        } else {
            self.repo
                .get_all(&conn)
                .await
                .into_result()
                .map_err(|f| DomainError::store(f, "Failed to fetch events"))?
                .into_iter()
                .map(|event| factory::to_dto(event, Vec::new()))
                .collect()
        };

        debug!(count = events.len(), "events listed");
        Ok(events)
    }

    /// One event with its packages.
    ///
    /// # Errors
    /// Returns [`DomainError::NotFound`] when no such event can be loaded.
    #[instrument(skip(self), fields(event_id = %id))]
    pub async fn get(&self, id: Uuid) -> Result<Event, DomainError> {
        let conn = self.db.conn()?;
        let (event, packages) = self
            .repo
            .get_one_with_packages(&conn, id)
            .await
            .ok_or_else(|| DomainError::not_found(id))?;

        debug!(packages = packages.len(), "event loaded");
        Ok(factory::to_dto(event, packages))
    }

    /// # Errors
    /// Returns [`DomainError::Store`] when the filtered listing fails.
    #[instrument(skip(self))]
    pub async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Event>, DomainError> {
        let conn = self.db.conn()?;
        let events: Vec<Event> = self
            .repo
            .get_all_by_creator(&conn, creator_id)
            .await
            .into_result()
            .map_err(|f| DomainError::store(f, "Failed to fetch events"))?
            .into_iter()
            .map(|event| factory::to_dto(event, Vec::new()))
            .collect();

        debug!(count = events.len(), "creator events listed");
        Ok(events)
    }

    /// Overwrite the mutable fields of an event owned by `acting_user_id`.
    ///
    /// # Errors
    /// [`DomainError::NotFound`], [`DomainError::Forbidden`], or
    /// [`DomainError::Store`] when the write fails.
    #[instrument(skip(self, request), fields(event_id = %id, acting_user = acting_user_id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateEventRequest,
        acting_user_id: &str,
    ) -> Result<(), DomainError> {
        let conn = self.db.conn()?;
        let mut event = self.load_owned(&conn, id, acting_user_id).await?;
        factory::apply_update(&mut event, request);

        self.repo
            .update(&conn, event)
            .await
            .into_result()
            .map_err(|f| DomainError::store(f, "Failed to update event"))?;

        info!("event updated");
        Ok(())
    }

    /// # Errors
    /// Same as [`EventService::update`].
    #[instrument(skip(self), fields(event_id = %id, acting_user = acting_user_id))]
    pub async fn delete(&self, id: Uuid, acting_user_id: &str) -> Result<(), DomainError> {
        let conn = self.db.conn()?;
        let event = self.load_owned(&conn, id, acting_user_id).await?;

        self.repo
            .delete(&conn, event)
            .await
            .into_result()
            .map_err(|f| DomainError::store(f, "Failed to delete event"))?;

        info!("event deleted");
        Ok(())
    }

    /// Existence first, then ownership; nothing is mutated here.
    async fn load_owned<C: DBRunner>(
        &self,
        runner: &C,
        id: Uuid,
        acting_user_id: &str,
    ) -> Result<event::Model, DomainError> {
        let event = self
            .repo
            .get_by_id(runner, id)
            .await
            .ok_or_else(|| DomainError::not_found(id))?;
        ensure_creator(&event, acting_user_id)?;
        Ok(event)
    }
}

fn respond<T>(result: Result<T, DomainError>, status: StatusCode) -> EventResult<T> {
    Envelope::from_result(result.map_err(EventsError::from), status)
}

#[async_trait]
impl<R: EventRepository + 'static> EventsApi for EventService<R> {
    async fn create_event(
        &self,
        request: CreateEventRequest,
        acting_user_id: &str,
    ) -> EventResult {
        respond(
            self.create(request, acting_user_id).await.map(|_| ()),
            StatusCode::CREATED,
        )
    }

    async fn list_events(&self) -> EventResult<Vec<Event>> {
        respond(self.list().await, StatusCode::OK)
    }

    async fn get_event_by_id(&self, id: Uuid) -> EventResult<Event> {
        respond(self.get(id).await, StatusCode::OK)
    }

    async fn list_events_by_creator(&self, creator_id: &str) -> EventResult<Vec<Event>> {
        respond(self.list_by_creator(creator_id).await, StatusCode::OK)
    }

    async fn update_event(
        &self,
        id: Uuid,
        request: UpdateEventRequest,
        acting_user_id: &str,
    ) -> EventResult {
        respond(
            self.update(id, request, acting_user_id).await,
            StatusCode::NO_CONTENT,
        )
    }

    async fn delete_event(&self, id: Uuid, acting_user_id: &str) -> EventResult {
        respond(
            self.delete(id, acting_user_id).await,
            StatusCode::NO_CONTENT,
        )
    }
}
