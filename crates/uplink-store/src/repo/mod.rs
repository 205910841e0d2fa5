//! Repository layer for persisting the catalog to SQLite
//!
//! `SqliteRepo` writes rows; `hydration` rebuilds the in-memory `Store`.

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
