use async_trait::async_trait;
use eventhub_db::DBRunner;
use eventhub_errors::Envelope;
use uuid::Uuid;

use crate::infra::storage::entity::{event, package};

/// An event row with the packages linked to it.
pub type EventWithPackages = (event::Model, Vec<package::Model>);

/// Persistence operations for the event aggregate.
///
/// Writes and list reads report store failures through the envelope; single
/// lookups and the eager-load listing report them as absence.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn add<C: DBRunner>(
        &self,
        runner: &C,
        event: event::ActiveModel,
    ) -> Envelope<event::Model>;

    /// Full-row replace of an event previously loaded from the store.
    async fn update<C: DBRunner>(
        &self,
        runner: &C,
        event: event::Model,
    ) -> Envelope<event::Model>;

    async fn delete<C: DBRunner>(
        &self,
        runner: &C,
        event: event::Model,
    ) -> Envelope<event::Model>;

    async fn get_all<C: DBRunner>(&self, runner: &C) -> Envelope<Vec<event::Model>>;

    async fn get_all_by_creator<C: DBRunner>(
        &self,
        runner: &C,
        creator_id: &str,
    ) -> Envelope<Vec<event::Model>>;

    async fn get_by_id<C: DBRunner>(&self, runner: &C, id: Uuid) -> Option<event::Model>;

    async fn get_all_with_packages<C: DBRunner>(&self, runner: &C) -> Vec<EventWithPackages>;

    async fn get_one_with_packages<C: DBRunner>(
        &self,
        runner: &C,
        id: Uuid,
    ) -> Option<EventWithPackages>;
}
