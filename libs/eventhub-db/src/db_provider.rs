use std::{future::Future, marker::PhantomData, pin::Pin, sync::Arc};

use crate::{Db, DbConn, DbError, DbTx, Session};

/// Thin, reusable DB entrypoint for application services.
///
/// Wraps a shared [`Db`] and maps every infrastructure failure into the
/// service's error type `E`:
///
/// ```ignore
/// let conn = self.db.conn()?;
/// let out = self.db.transaction(|tx| Box::pin(async move { /* ... */ })).await?;
/// ```
pub struct DBProvider<E> {
    db: Arc<Db>,
    _error: PhantomData<fn() -> E>,
}

impl<E> Clone for DBProvider<E> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            _error: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for DBProvider<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DBProvider").field("db", &self.db).finish()
    }
}

impl<E> DBProvider<E>
where
    E: From<DbError> + Send + 'static,
{
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db: Arc::new(db),
            _error: PhantomData,
        }
    }

    /// Create a non-transactional database runner.
    ///
    /// # Errors
    ///
    /// Returns `E` if `Db::conn()` fails (including the transaction-bypass guard).
    pub fn conn(&self) -> Result<DbConn<'_>, E> {
        self.db.conn().map_err(E::from)
    }

    /// Open an explicit transaction session.
    ///
    /// # Errors
    ///
    /// Returns `E` if `Db::session()` fails.
    pub fn session(&self) -> Result<Session<'_>, E> {
        self.db.session().map_err(E::from)
    }

    /// Execute a closure inside a database transaction.
    ///
    /// # Errors
    ///
    /// Returns `E` if starting the transaction fails, the closure fails, or commit fails.
    pub async fn transaction<T, F>(&self, f: F) -> Result<T, E>
    where
        T: Send + 'static,
        F: for<'a> FnOnce(&'a DbTx<'a>) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>
            + Send,
    {
        self.db.transaction(f).await
    }
}
