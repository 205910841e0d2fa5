//! Command instance commands

use clap::{Args, Subcommand};
use rusqlite::Connection;
use uplink_core::errors::ExError;
use uplink_core::policy::ParameterPolicy;
use uplink_core::{ArityParameterPolicy, Command, CommandStatus, DeferredParameterPolicy};
use uplink_engine::apply_engine_command;
use uplink_engine::commands::instance;

use super::to_data;

#[derive(Debug, Args)]
pub struct InstanceArgs {
    #[command(subcommand)]
    pub command: InstanceCommand,
}

#[derive(Debug, Subcommand)]
pub enum InstanceCommand {
    /// Issue a new PENDING instance of a template
    Create(CreateArgs),
    /// Show one instance
    Get { id: i64 },
    /// List all instances
    List,
    /// Delete an instance
    Delete { id: i64 },
    /// Move an instance to SENT, ACKNOWLEDGED or FAILED
    Transition { id: i64, status: String },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Id of the template being issued
    #[arg(long = "template")]
    pub template_id: i64,

    /// Comma-separated parameter values
    #[arg(long)]
    pub params: Option<String>,

    /// Reject values whose count differs from the template's parameters
    #[arg(long)]
    pub strict_arity: bool,
}

pub fn execute(args: InstanceArgs, conn: &mut Connection) -> Result<serde_json::Value, ExError> {
    match args.command {
        InstanceCommand::Create(create) => {
            let policy: &dyn ParameterPolicy = if create.strict_arity {
                &ArityParameterPolicy
            } else {
                &DeferredParameterPolicy
            };
            let cmd = Command::InstanceCreate {
                template_id: create.template_id,
                params: create.params,
            };
            to_data(&apply_engine_command(cmd, conn, policy)?)
        }
        InstanceCommand::Get { id } => to_data(&instance::instance_get(id, conn)?),
        InstanceCommand::List => to_data(&instance::instance_list(conn)?),
        InstanceCommand::Delete { id } => {
            let cmd = Command::InstanceDelete { instance_id: id };
            to_data(&apply_engine_command(cmd, conn, &DeferredParameterPolicy)?)
        }
        InstanceCommand::Transition { id, status } => {
            let status: CommandStatus = status.parse()?;
            let cmd = Command::InstanceTransition {
                instance_id: id,
                status,
            };
            to_data(&apply_engine_command(cmd, conn, &DeferredParameterPolicy)?)
        }
    }
}
