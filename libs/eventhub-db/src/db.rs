//! Database handle and runner types.
//!
//! - [`Db`]: the shared database handle.
//! - [`DbConn`]: non-transactional runner (borrows from `Db`).
//! - [`DbTx`]: transactional runner (lives inside a transaction closure).
//! - [`Session`]: explicit begin/commit/rollback handle (see [`crate::session`]).
//!
//! # Transaction bypass guard
//!
//! While a closure transaction runs, a task-local flag is set and
//! [`Db::conn()`] fails with `DbError::ConnRequestedInsideTx`, so code inside the
//! closure cannot silently write outside the transaction.
//!
//! # Example
//!
//! ```ignore
//! let conn = db.conn()?;
//! let events = repo.get_all(&conn).await;
//!
//! let created = db.transaction(|tx| {
//!     Box::pin(async move {
//!         let event = repo.add(tx, new_event).await.into_result()?;
//!         Ok(event)
//!     })
//! }).await?;
//! ```

use std::{cell::Cell, future::Future, pin::Pin, sync::Arc};

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::session::Session;
use crate::{DbEngine, DbError, DbHandle};

tokio::task_local! {
    static IN_TX: Cell<bool>;
}

fn is_in_transaction() -> bool {
    IN_TX.try_with(Cell::get).unwrap_or(false)
}

async fn with_tx_guard<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    IN_TX.scope(Cell::new(true), f).await
}

/// Database handle.
///
/// Cheap to clone. Repositories never store it; they receive a runner
/// (`&impl DBRunner`) on every call.
#[derive(Clone)]
pub struct Db {
    handle: Arc<DbHandle>,
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("engine", &self.handle.engine())
            .finish_non_exhaustive()
    }
}

impl Db {
    #[must_use]
    pub(crate) fn new(handle: DbHandle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    pub(crate) fn handle(&self) -> &DbHandle {
        &self.handle
    }

    /// Create a non-transactional database runner.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnRequestedInsideTx` if called from within a
    /// transaction closure.
    pub fn conn(&self) -> Result<DbConn<'_>, DbError> {
        if is_in_transaction() {
            return Err(DbError::ConnRequestedInsideTx);
        }
        Ok(DbConn {
            conn: self.handle.sea_internal_ref(),
        })
    }

    /// Open an explicit transaction session.
    ///
    /// The session starts without a transaction; call [`Session::begin`] to open one.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ConnRequestedInsideTx` if called from within a
    /// transaction closure.
    pub fn session(&self) -> Result<Session<'_>, DbError> {
        if is_in_transaction() {
            return Err(DbError::ConnRequestedInsideTx);
        }
        Ok(Session::new(self.handle.sea_internal_ref()))
    }

    /// Execute a closure inside a database transaction, mapping infrastructure errors into `E`.
    ///
    /// The closure's error type is the caller's domain error; begin/commit
    /// failures are `DbError` and are mapped via `E: From<DbError>`. On `Err`
    /// the transaction is rolled back.
    ///
    /// # Errors
    ///
    /// Returns `E` if starting the transaction fails, the closure fails, or commit fails.
    pub async fn transaction<F, T, E>(&self, f: F) -> Result<T, E>
    where
        E: From<DbError> + Send + 'static,
        F: for<'a> FnOnce(&'a DbTx<'a>) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>
            + Send,
        T: Send + 'static,
    {
        let txn = self
            .handle
            .sea_internal_ref()
            .begin()
            .await
            .map_err(DbError::from)
            .map_err(E::from)?;
        let tx = DbTx { tx: &txn };

        let res = with_tx_guard(f(&tx)).await;

        match res {
            Ok(v) => {
                txn.commit().await.map_err(DbError::from).map_err(E::from)?;
                Ok(v)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "transaction rollback failed");
                }
                Err(e)
            }
        }
    }

    /// Return database engine identifier for logging/tracing.
    #[must_use]
    pub fn db_engine(&self) -> &'static str {
        self.handle.engine().as_str()
    }

    #[must_use]
    pub fn engine(&self) -> DbEngine {
        self.handle.engine()
    }
}

/// Non-transactional database runner.
///
/// Borrows from a [`Db`] and can only be created by [`Db::conn()`].
pub struct DbConn<'a> {
    pub(crate) conn: &'a DatabaseConnection,
}

impl std::fmt::Debug for DbConn<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConn").finish_non_exhaustive()
    }
}

/// Transactional database runner.
///
/// Only available inside a [`Db::transaction`] closure; cannot escape it.
pub struct DbTx<'a> {
    pub(crate) tx: &'a DatabaseTransaction,
}

impl std::fmt::Debug for DbTx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbTx").finish_non_exhaustive()
    }
}
