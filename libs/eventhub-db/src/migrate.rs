//! Schema migrations through `sea-orm-migration`.
//!
//! Modules ship a `Migrator` implementing [`MigratorTrait`] and apply it once at
//! startup:
//!
//! ```ignore
//! db.run_migrations::<events::infra::storage::migrations::Migrator>().await?;
//! ```

use sea_orm_migration::MigratorTrait;

use crate::{Db, Result};

impl Db {
    /// Apply every pending migration of `M`.
    ///
    /// # Errors
    /// Returns `DbError::Sea` if a migration fails.
    pub async fn run_migrations<M: MigratorTrait>(&self) -> Result<()> {
        let conn = self.handle().sea_internal_ref();
        let pending = M::get_pending_migrations(conn).await?.len();
        M::up(conn, None).await?;
        tracing::info!(
            engine = self.db_engine(),
            backend = ?self.handle().backend(),
            applied = pending,
            "migrations applied"
        );
        Ok(())
    }
}
