//! Migration framework
//!
//! - Embedded SQL migrations
//! - Idempotent application, one transaction per migration
//! - Checksum and unknown-migration detection

mod checksums;
mod embedded;
mod runner;

pub use runner::apply_migrations;
