//! `EventsApi` trait definition.
//!
//! Every operation returns an [`EventResult`]: the boundary layer only has to
//! turn its status code and payload into a transport response.

use async_trait::async_trait;
use eventhub_errors::Envelope;
use uuid::Uuid;

use crate::models::{CreateEventRequest, Event, UpdateEventRequest};

/// Envelope returned by every events operation.
pub type EventResult<T = ()> = Envelope<T>;

/// Public API of the events module.
///
/// `acting_user_id` is the already authenticated caller; only the creator of
/// an event may update or delete it.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Create an event owned by `acting_user_id`. `201` on success.
    async fn create_event(
        &self,
        request: CreateEventRequest,
        acting_user_id: &str,
    ) -> EventResult;

    /// All events. Packages are attached only when the service is configured to.
    async fn list_events(&self) -> EventResult<Vec<Event>>;

    /// One event with its packages. `404` if absent.
    async fn get_event_by_id(&self, id: Uuid) -> EventResult<Event>;

    /// Events created by `creator_id`.
    async fn list_events_by_creator(&self, creator_id: &str) -> EventResult<Vec<Event>>;

    /// Replace the mutable fields of an event. `204`, `404` or `403`.
    async fn update_event(
        &self,
        id: Uuid,
        request: UpdateEventRequest,
        acting_user_id: &str,
    ) -> EventResult;

    /// Delete an event. `204`, `404` or `403`.
    async fn delete_event(&self, id: Uuid, acting_user_id: &str) -> EventResult;
}
