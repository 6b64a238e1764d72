use std::sync::Arc;

use eventhub_db::{DBProvider, Db};
use events_sdk::EventsApi;
use tracing::info;

use crate::config::EventsConfig;
use crate::domain::service::EventService;
use crate::infra::storage::OrmEventRepository;
use crate::infra::storage::migrations::Migrator;

/// Wires storage, migrations and the service together.
#[derive(Clone)]
pub struct EventsModule {
    service: Arc<EventService<OrmEventRepository>>,
}

impl EventsModule {
    /// Apply the events migrations on `db` and build the service.
    ///
    /// # Errors
    /// Fails when a migration cannot be applied.
    pub async fn init(db: Db, config: EventsConfig) -> anyhow::Result<Self> {
        info!(engine = db.db_engine(), "Initializing events module");

        db.run_migrations::<Migrator>().await?;

        let service = EventService::new(
            DBProvider::new(db),
            Arc::new(OrmEventRepository::new()),
            config,
        );

        info!("Events module initialized");
        Ok(Self {
            service: Arc::new(service),
        })
    }

    /// The module's public API.
    #[must_use]
    pub fn api(&self) -> Arc<dyn EventsApi> {
        self.service.clone()
    }
}
