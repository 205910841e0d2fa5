//! Engine-level dispatch of core `Command`s against SQLite.

#![allow(clippy::result_large_err)]

use crate::commands::{instance, template};
use rusqlite::Connection;
use serde::Serialize;
use uplink_core::model::{CommandInstance, CommandTemplate};
use uplink_core::policy::ParameterPolicy;
use uplink_core::Command;
use uplink_store::errors::Result;

/// Result of applying a command through the engine.
///
/// Serializes as the bare record or list, without a variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EngineCommandResult {
    /// The template that was created.
    Template(CommandTemplate),
    /// Templates remaining after a delete.
    Templates(Vec<CommandTemplate>),
    /// The instance that was created or transitioned.
    Instance(CommandInstance),
    /// Instances remaining after a delete.
    Instances(Vec<CommandInstance>),
}

/// Apply a mutating command with a parameter policy.
///
/// `policy` only matters for `InstanceCreate`.
pub fn apply_engine_command(
    cmd: Command,
    conn: &mut Connection,
    policy: &dyn ParameterPolicy,
) -> Result<EngineCommandResult> {
    match cmd {
        Command::TemplateCreate {
            name,
            params,
            format,
            data_size,
            total_size,
        } => template::template_create(name, params, format, data_size, total_size, conn)
            .map(EngineCommandResult::Template),

        Command::TemplateDelete { template_id } => {
            template::template_delete(template_id, conn).map(EngineCommandResult::Templates)
        }

        Command::InstanceCreate {
            template_id,
            params,
        } => instance::instance_create(template_id, params, policy, conn)
            .map(EngineCommandResult::Instance),

        Command::InstanceDelete { instance_id } => {
            instance::instance_delete(instance_id, conn).map(EngineCommandResult::Instances)
        }

        Command::InstanceTransition {
            instance_id,
            status,
        } => instance::instance_transition(instance_id, status, conn)
            .map(EngineCommandResult::Instance),
    }
}
