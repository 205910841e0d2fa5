//! Template catalog commands

use clap::{Args, Subcommand};
use rusqlite::Connection;
use uplink_core::errors::ExError;
use uplink_core::{Command, DeferredParameterPolicy};
use uplink_engine::apply_engine_command;
use uplink_engine::commands::template;

use super::to_data;

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    /// Add a template to the catalog
    Create(CreateArgs),
    /// Show one template
    Get { id: i64 },
    /// List all templates
    List,
    /// Delete a template no instance references
    Delete { id: i64 },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    /// Comma-separated parameter names, e.g. "freq,power"
    #[arg(long)]
    pub params: Option<String>,

    /// Comma-separated format specifiers, one per parameter
    #[arg(long)]
    pub format: Option<String>,

    #[arg(long)]
    pub data_size: u32,

    #[arg(long)]
    pub total_size: u32,
}

pub fn execute(args: TemplateArgs, conn: &mut Connection) -> Result<serde_json::Value, ExError> {
    match args.command {
        TemplateCommand::Create(create) => {
            let cmd = Command::TemplateCreate {
                name: create.name,
                params: create.params,
                format: create.format,
                data_size: create.data_size,
                total_size: create.total_size,
            };
            to_data(&apply_engine_command(cmd, conn, &DeferredParameterPolicy)?)
        }
        TemplateCommand::Get { id } => to_data(&template::template_get(id, conn)?),
        TemplateCommand::List => to_data(&template::template_list(conn)?),
        TemplateCommand::Delete { id } => {
            let cmd = Command::TemplateDelete { template_id: id };
            to_data(&apply_engine_command(cmd, conn, &DeferredParameterPolicy)?)
        }
    }
}
