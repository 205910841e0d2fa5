//! Subcommand handlers
//!
//! Each handler returns the value to place under `"data"` in the output
//! envelope.

pub mod instance;
pub mod template;

use serde::Serialize;
use uplink_core::errors::{CatalogError, ExError};

/// Convert a result record into the JSON payload
pub(crate) fn to_data<T: Serialize>(value: &T) -> Result<serde_json::Value, ExError> {
    serde_json::to_value(value).map_err(|e| CatalogError::from(e).into())
}
