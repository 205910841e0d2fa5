//! Uplink CLI
//!
//! Command-line interface for the spacecraft command catalog

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uplink_core::errors::ExError;
use uplink_core::logging_facility::{init, Profile};
use uplink_core_types::RequestContext;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "uplink")]
#[command(about = "Uplink - Command template catalog and dispatch lifecycle", long_about = None)]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "UPLINK_DB", default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Log output on stderr: human or json
    #[arg(long, global = true, env = "UPLINK_LOG_FORMAT", default_value = "human")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Command template catalog operations
    Template(commands::template::TemplateArgs),
    /// Command instance operations
    Instance(commands::instance::InstanceArgs),
}

fn run(cli: Cli) -> Result<serde_json::Value, ExError> {
    let mut conn = config::open_database(&cli.db)?;

    match cli.command {
        Commands::Template(args) => commands::template::execute(args, &mut conn),
        Commands::Instance(args) => commands::instance::execute(args, &mut conn),
    }
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format);

    let ctx = RequestContext::new();
    let span = tracing::info_span!("request", request_id = %ctx.request_id);
    let _guard = span.enter();

    match run(cli) {
        Ok(data) => println!("{}", serde_json::json!({ "data": data })),
        Err(e) => {
            let e = e.with_request_id(ctx.request_id.clone());
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
