//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate between
//! core domain logic and persistence layer.

pub mod engine_command;
pub mod instance;
pub mod template;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use uplink_core::errors::{CatalogError, ExError};
use uplink_store::errors::{from_rusqlite, Result};

/// Tag a domain error with the engine operation that raised it
pub(crate) fn in_op(op: &'static str) -> impl Fn(CatalogError) -> ExError {
    move |err| ExError::from(err).with_op(op)
}

/// Begin a write transaction holding the database write lock from the start
///
/// Mutations read the catalog before writing; a deferred transaction would
/// fail with `SQLITE_BUSY` on the lock upgrade instead of waiting out the
/// busy timeout when another connection is writing.
pub(crate) fn begin_write(conn: &mut Connection) -> Result<Transaction<'_>> {
    conn.transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(from_rusqlite)
}
