//! Uplink Store - SQLite persistence for the command catalog
//!
//! Provides:
//! - Connection helpers with foreign keys enforced
//! - Embedded, checksummed schema migrations
//! - A repository for template and instance rows
//! - Hydration of the in-memory `Store` from SQLite

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
