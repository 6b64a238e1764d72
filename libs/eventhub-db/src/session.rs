//! Explicit transaction demarcation.
//!
//! A [`Session`] is a scoped handle obtained from [`crate::Db::session`]. It
//! replaces per-repository transaction state: the caller owns the handle and
//! passes it as the runner to every repository call that must take part in the
//! transaction.
//!
//! Rules:
//! - `begin()` while a transaction is open is a no-op
//! - `commit()` / `rollback()` without an open transaction are no-ops
//! - after `commit()` / `rollback()` the session has no active transaction, even
//!   if the store reported an error
//! - dropping a session with an open transaction rolls it back
//! - no automatic rollback on a failed repository call; callers roll back in
//!   their own failure path
//!
//! ```ignore
//! let mut session = db.session()?;
//! session.begin().await?;
//! let added = repo.add(&session, model).await;
//! if added.is_success() {
//!     session.commit().await?;
//! } else {
//!     session.rollback().await?;
//! }
//! ```

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use crate::DbError;

pub struct Session<'a> {
    conn: &'a DatabaseConnection,
    tx: Option<DatabaseTransaction>,
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl<'a> Session<'a> {
    pub(crate) fn new(conn: &'a DatabaseConnection) -> Self {
        Self { conn, tx: None }
    }

    pub(crate) fn conn(&self) -> &DatabaseConnection {
        self.conn
    }

    pub(crate) fn active(&self) -> Option<&DatabaseTransaction> {
        self.tx.as_ref()
    }

    /// Whether a transaction is currently open on this session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tx.is_some()
    }

    /// Open a transaction unless one is already open.
    ///
    /// # Errors
    /// Returns `DbError::Sea` if the store refuses to start a transaction.
    pub async fn begin(&mut self) -> Result<(), DbError> {
        if self.tx.is_some() {
            debug!("transaction already open; begin ignored");
            return Ok(());
        }
        self.tx = Some(self.conn.begin().await?);
        debug!("transaction opened");
        Ok(())
    }

    /// Commit and release the open transaction, if any.
    ///
    /// # Errors
    /// Returns `DbError::Sea` if the commit fails; the session is reset either way.
    pub async fn commit(&mut self) -> Result<(), DbError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            debug!("transaction committed");
        }
        Ok(())
    }

    /// Roll back and release the open transaction, if any.
    ///
    /// # Errors
    /// Returns `DbError::Sea` if the rollback fails; the session is reset either way.
    pub async fn rollback(&mut self) -> Result<(), DbError> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
            debug!("transaction rolled back");
        }
        Ok(())
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if self.tx.is_some() {
            // DatabaseTransaction rolls itself back when dropped uncommitted.
            debug!("session dropped with an open transaction; rolling back");
        }
    }
}
