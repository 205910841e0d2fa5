//! Uplink Core - command catalog and dispatch lifecycle kernel
//!
//! This crate provides:
//! - `CommandTemplate` catalog entries with the parameter/format contract
//!   enforced at construction
//! - `CommandInstance` records and the one-way dispatch state machine
//! - An in-memory `Store` with store-assigned, never reused ids
//! - Catalog and lifecycle operations, plus the `Command`/`apply()` boundary
//! - The structured error and logging facilities shared by the other crates

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod rules;

// Re-exports used by the logging macros
#[doc(hidden)]
pub use tracing as __tracing;
#[doc(hidden)]
pub use uplink_core_types as __core_types;

pub use apply::apply;
pub use commands::Command;
pub use errors::{CatalogError, ExError, ExErrorKind, Result};
pub use model::{CommandInstance, CommandStatus, CommandTemplate};
pub use ops::Store;
pub use policy::{ArityParameterPolicy, DeferredParameterPolicy, ParameterPolicy};
