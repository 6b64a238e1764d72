use std::marker::PhantomData;

use eventhub_errors::Envelope;
use http::StatusCode;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DbErr, EntityName, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, Related, Select,
};
use tracing::{debug, error};

use super::ListQuery;
use crate::runner::on_runner;
use crate::DBRunner;

/// Entity-agnostic data access for any `SeaORM` entity `E`.
///
/// Stateless: every call receives the runner it executes on, so the same
/// repository value serves plain connections, closure transactions and
/// explicit sessions alike.
///
/// Two failure idioms coexist:
/// - writes and list reads return an [`Envelope`]; store errors become status 500
/// - single-row lookups, `exists` and `get_all_with_related` return an empty
///   value on store error after logging it at `error` level
pub struct BaseRepository<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> Default for BaseRepository<E> {
    fn default() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for BaseRepository<E> {}

impl<E: EntityTrait> std::fmt::Debug for BaseRepository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseRepository")
            .field("table", &E::default().table_name())
            .finish()
    }
}

fn table<E: EntityName>() -> String {
    E::default().table_name().to_owned()
}

fn store_failure<E: EntityName, T>(action: &str, err: &DbErr) -> Envelope<T> {
    error!(table = %table::<E>(), error = %err, "failed to {action}");
    Envelope::failure_with(
        format!("Failed to {action}: {err}"),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new row and return it as stored (with generated identity).
    pub async fn add<C: DBRunner>(&self, runner: &C, model: E::ActiveModel) -> Envelope<E::Model> {
        match on_runner!(runner, |conn| model.insert(conn).await) {
            Ok(saved) => {
                debug!(table = %table::<E>(), "entity added");
                Envelope::success(saved)
            }
            Err(e) => store_failure::<E, _>("add entity", &e),
        }
    }

    /// Replace every column of the row identified by `model`'s primary key.
    ///
    /// A row that no longer exists is reported as a store failure.
    pub async fn update<C: DBRunner>(&self, runner: &C, model: E::Model) -> Envelope<E::Model> {
        let active = model.into_active_model().reset_all();
        match on_runner!(runner, |conn| active.update(conn).await) {
            Ok(saved) => {
                debug!(table = %table::<E>(), "entity updated");
                Envelope::success(saved)
            }
            Err(e) => store_failure::<E, _>("update entity", &e),
        }
    }

    /// Delete the row identified by `model`'s primary key.
    ///
    /// No existence check: deleting an absent row succeeds and affects nothing.
    pub async fn delete<C: DBRunner>(&self, runner: &C, model: E::Model) -> Envelope<E::Model> {
        let active = model.clone().into_active_model();
        match on_runner!(runner, |conn| active.delete(conn).await) {
            Ok(res) => {
                debug!(table = %table::<E>(), rows = res.rows_affected, "entity deleted");
                Envelope::success(model)
            }
            Err(e) => store_failure::<E, _>("delete entity", &e),
        }
    }

    pub async fn get_all<C: DBRunner>(&self, runner: &C) -> Envelope<Vec<E::Model>> {
        self.fetch_all(runner, E::find()).await
    }

    pub async fn get_all_by_predicate<C: DBRunner>(
        &self,
        runner: &C,
        predicate: Condition,
    ) -> Envelope<Vec<E::Model>> {
        self.fetch_all(runner, E::find().filter(predicate)).await
    }

    /// Filter, sort and project rows in one query.
    pub async fn get_all_projected<C, P, F>(
        &self,
        runner: &C,
        query: ListQuery<E>,
        selector: F,
    ) -> Envelope<Vec<P>>
    where
        C: DBRunner,
        F: FnMut(E::Model) -> P + Send,
    {
        self.fetch_all(runner, query.apply(E::find()))
            .await
            .map(|rows| rows.into_iter().map(selector).collect())
    }

    /// Like [`Self::get_all_projected`], with the `R` rows related to each
    /// entity loaded through a single join and handed to the selector.
    pub async fn get_all_projected_with<C, R, P, F>(
        &self,
        runner: &C,
        query: ListQuery<E>,
        related: R,
        mut selector: F,
    ) -> Envelope<Vec<P>>
    where
        C: DBRunner,
        R: EntityTrait,
        E: Related<R>,
        F: FnMut(E::Model, Vec<R::Model>) -> P + Send,
    {
        let select = query.apply(E::find()).find_with_related(related);
        match on_runner!(runner, |conn| select.all(conn).await) {
            Ok(rows) => Envelope::success(
                rows.into_iter()
                    .map(|(entity, children)| selector(entity, children))
                    .collect(),
            ),
            Err(e) => store_failure::<E, _>("retrieve entities", &e),
        }
    }

    /// First row matching `predicate`.
    ///
    /// `None` when nothing matches and when the store fails.
    pub async fn get_one<C: DBRunner>(&self, runner: &C, predicate: Condition) -> Option<E::Model> {
        let select = E::find().filter(predicate);
        match on_runner!(runner, |conn| select.one(conn).await) {
            Ok(found) => found,
            Err(e) => {
                error!(table = %table::<E>(), error = %e, "lookup failed; reporting no result");
                None
            }
        }
    }

    /// First row matching `predicate` together with its related `R` rows.
    ///
    /// `None` when nothing matches and when the store fails.
    pub async fn get_one_with_related<C, R>(
        &self,
        runner: &C,
        related: R,
        predicate: Condition,
    ) -> Option<(E::Model, Vec<R::Model>)>
    where
        C: DBRunner,
        R: EntityTrait,
        E: Related<R>,
    {
        let select = E::find().filter(predicate).find_with_related(related);
        match on_runner!(runner, |conn| select.all(conn).await) {
            Ok(rows) => rows.into_iter().next(),
            Err(e) => {
                error!(table = %table::<E>(), error = %e, "related lookup failed; reporting no result");
                None
            }
        }
    }

    /// Every row with its related `R` rows. Empty when the store fails.
    pub async fn get_all_with_related<C, R>(
        &self,
        runner: &C,
        related: R,
    ) -> Vec<(E::Model, Vec<R::Model>)>
    where
        C: DBRunner,
        R: EntityTrait,
        E: Related<R>,
    {
        let select = E::find().find_with_related(related);
        match on_runner!(runner, |conn| select.all(conn).await) {
            Ok(rows) => rows,
            Err(e) => {
                error!(table = %table::<E>(), error = %e, "related listing failed; reporting empty");
                Vec::new()
            }
        }
    }

    /// Whether any row matches `predicate`. `false` when the store fails.
    pub async fn exists<C: DBRunner>(&self, runner: &C, predicate: Condition) -> bool {
        let select = E::find().filter(predicate);
        match on_runner!(runner, |conn| select.count(conn).await) {
            Ok(n) => n > 0,
            Err(e) => {
                error!(table = %table::<E>(), error = %e, "existence check failed; reporting false");
                false
            }
        }
    }

    async fn fetch_all<C: DBRunner>(&self, runner: &C, select: Select<E>) -> Envelope<Vec<E::Model>> {
        match on_runner!(runner, |conn| select.all(conn).await) {
            Ok(rows) => {
                debug!(table = %table::<E>(), count = rows.len(), "entities retrieved");
                Envelope::success(rows)
            }
            Err(e) => store_failure::<E, _>("retrieve entities", &e),
        }
    }
}
