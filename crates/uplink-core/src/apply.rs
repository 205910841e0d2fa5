//! Functional-boundary apply function
//!
//! `apply()` takes ownership of the current store, executes one command and
//! returns the new store. Every operation validates before it mutates, so on
//! `Err` nothing was written; the caller keeps any earlier clone of the state
//! and no partially created record can be observed.
//!
//! ## Example
//!
//! ```
//! use uplink_core::{apply::apply, policy::DeferredParameterPolicy, Command, Store};
//!
//! let state = Store::new();
//! let cmd = Command::TemplateCreate {
//!     name: "PING".to_string(),
//!     params: Some("freq".to_string()),
//!     format: Some("int".to_string()),
//!     data_size: 4,
//!     total_size: 8,
//! };
//!
//! let state = apply(state, cmd, &DeferredParameterPolicy).unwrap();
//! assert_eq!(state.list_templates().len(), 1);
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{instance_ops, template_ops, Store};
use crate::policy::ParameterPolicy;

/// Apply a command to a store, returning the new store state
///
/// # Errors
///
/// Returns the domain error of the underlying operation; see `CatalogError`.
pub fn apply(mut state: Store, cmd: Command, policy: &dyn ParameterPolicy) -> Result<Store> {
    match cmd {
        Command::TemplateCreate {
            name,
            params,
            format,
            data_size,
            total_size,
        } => {
            template_ops::create_template(&mut state, name, params, format, data_size, total_size)?;
        }

        Command::TemplateDelete { template_id } => {
            template_ops::delete_template(&mut state, template_id)?;
        }

        Command::InstanceCreate {
            template_id,
            params,
        } => {
            instance_ops::create_instance(&mut state, template_id, params, policy)?;
        }

        Command::InstanceDelete { instance_id } => {
            instance_ops::delete_instance(&mut state, instance_id)?;
        }

        Command::InstanceTransition {
            instance_id,
            status,
        } => {
            instance_ops::transition_instance(&mut state, instance_id, status)?;
        }
    }

    Ok(state)
}
