//! Uplink Engine - Orchestration layer
//!
//! Runs catalog and lifecycle operations against a SQLite connection. Each
//! mutation hydrates the in-memory `Store` inside one transaction, applies the
//! core operation, writes the affected rows and commits.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommandResult};
