//! Hidden database runner capability.
//!
//! This module does **not** expose any raw `SeaORM` connection or transaction
//! type to downstream crates. It exists so that repository code inside this crate
//! can execute queries against a plain connection (`DbConn`), a closure
//! transaction (`DbTx`) or an explicit session (`Session`).
//!
//! The `DBRunner` trait is **sealed**: only the runners defined here can
//! implement it.

use crate::db::{DbConn, DbTx};
use crate::session::Session;

mod sealed {
    pub trait Sealed {}
}

/// Crate-only bridge to `SeaORM`'s executor types.
pub enum SeaOrmRunner<'a> {
    Conn(&'a sea_orm::DatabaseConnection),
    Tx(&'a sea_orm::DatabaseTransaction),
}

#[doc(hidden)]
pub trait DBRunnerInternal: sealed::Sealed + Send + Sync {
    fn as_seaorm(&self) -> SeaOrmRunner<'_>;
}

/// Capability marker accepted by repositories and services.
///
/// Has no methods of its own and cannot be implemented outside `eventhub-db`.
pub trait DBRunner: DBRunnerInternal {}

impl sealed::Sealed for DbConn<'_> {}
impl DBRunnerInternal for DbConn<'_> {
    fn as_seaorm(&self) -> SeaOrmRunner<'_> {
        SeaOrmRunner::Conn(self.conn)
    }
}
impl DBRunner for DbConn<'_> {}

impl sealed::Sealed for DbTx<'_> {}
impl DBRunnerInternal for DbTx<'_> {
    fn as_seaorm(&self) -> SeaOrmRunner<'_> {
        SeaOrmRunner::Tx(self.tx)
    }
}
impl DBRunner for DbTx<'_> {}

impl sealed::Sealed for Session<'_> {}
impl DBRunnerInternal for Session<'_> {
    fn as_seaorm(&self) -> SeaOrmRunner<'_> {
        match self.active() {
            Some(tx) => SeaOrmRunner::Tx(tx),
            None => SeaOrmRunner::Conn(self.conn()),
        }
    }
}
impl DBRunner for Session<'_> {}

/// Run `$body` with `$conn` bound to whichever executor the runner wraps.
macro_rules! on_runner {
    ($runner:expr, |$conn:ident| $body:expr) => {
        match $crate::runner::DBRunnerInternal::as_seaorm($runner) {
            $crate::runner::SeaOrmRunner::Conn($conn) => $body,
            $crate::runner::SeaOrmRunner::Tx($conn) => $body,
        }
    };
}

pub(crate) use on_runner;
