use async_trait::async_trait;
use eventhub_db::repo::BaseRepository;
use eventhub_db::DBRunner;
use eventhub_errors::Envelope;
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use crate::domain::repo::{EventRepository, EventWithPackages};

use super::entity::{event, package};

fn by_id(id: Uuid) -> Condition {
    Condition::all().add(event::Column::Id.eq(id))
}

/// `SeaORM` implementation of [`EventRepository`] on top of [`BaseRepository`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OrmEventRepository {
    base: BaseRepository<event::Entity>,
}

impl OrmEventRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for OrmEventRepository {
    async fn add<C: DBRunner>(
        &self,
        runner: &C,
        event: event::ActiveModel,
    ) -> Envelope<event::Model> {
        self.base.add(runner, event).await
    }

    async fn update<C: DBRunner>(&self, runner: &C, event: event::Model) -> Envelope<event::Model> {
        self.base.update(runner, event).await
    }

    async fn delete<C: DBRunner>(&self, runner: &C, event: event::Model) -> Envelope<event::Model> {
        self.base.delete(runner, event).await
    }

    async fn get_all<C: DBRunner>(&self, runner: &C) -> Envelope<Vec<event::Model>> {
        self.base.get_all(runner).await
    }

    async fn get_all_by_creator<C: DBRunner>(
        &self,
        runner: &C,
        creator_id: &str,
    ) -> Envelope<Vec<event::Model>> {
        self.base
            .get_all_by_predicate(
                runner,
                Condition::all().add(event::Column::CreatorId.eq(creator_id)),
            )
            .await
    }

    async fn get_by_id<C: DBRunner>(&self, runner: &C, id: Uuid) -> Option<event::Model> {
        self.base.get_one(runner, by_id(id)).await
    }

    async fn get_all_with_packages<C: DBRunner>(&self, runner: &C) -> Vec<EventWithPackages> {
        self.base.get_all_with_related(runner, package::Entity).await
    }

    async fn get_one_with_packages<C: DBRunner>(
        &self,
        runner: &C,
        id: Uuid,
    ) -> Option<EventWithPackages> {
        self.base
            .get_one_with_related(runner, package::Entity, by_id(id))
            .await
    }
}
