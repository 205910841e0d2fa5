//! Template catalog command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for catalog operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use uplink_core::errors::CatalogError;
use uplink_core::model::CommandTemplate;
use uplink_core::ops::template_ops;
use uplink_core::{log_op_end, log_op_error, log_op_start};
use uplink_store::errors::{from_rusqlite, Result};
use uplink_store::repo::hydration::load_store;
use uplink_store::SqliteRepo;

use super::{begin_write, in_op};

/// Create a new command template
///
/// ## Returns
///
/// The stored template with its assigned id
///
/// ## Errors
///
/// - `InvalidInput`: name is blank
/// - `InvalidContract`: `params`/`format` disagree in presence or count
/// - `StoreFailure`: database error
pub fn template_create(
    name: String,
    params: Option<String>,
    format: Option<String>,
    data_size: u32,
    total_size: u32,
    conn: &mut Connection,
) -> Result<CommandTemplate> {
    log_op_start!("template_create", name = name.as_str());
    let start = std::time::Instant::now();

    let result = template_create_impl(name, params, format, data_size, total_size, conn)
        .map_err(|e| {
            log_op_error!(
                "template_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "template_create",
        duration_ms = start.elapsed().as_millis() as u64,
        template_id = result.id()
    );

    Ok(result)
}

fn template_create_impl(
    name: String,
    params: Option<String>,
    format: Option<String>,
    data_size: u32,
    total_size: u32,
    conn: &mut Connection,
) -> Result<CommandTemplate> {
    let tx = begin_write(conn)?;
    let mut store = load_store(&tx)?;

    let template =
        template_ops::create_template(&mut store, name, params, format, data_size, total_size)
            .map_err(in_op("template_create"))?;
    SqliteRepo::insert_template(&tx, &template)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(template)
}

/// Read a template by id
///
/// ## Errors
///
/// - `NotFound`: no template has this id
/// - `StoreFailure`: database error
pub fn template_get(template_id: i64, conn: &Connection) -> Result<CommandTemplate> {
    log_op_start!("template_get", template_id = template_id);
    let start = std::time::Instant::now();

    let result = SqliteRepo::get_template(conn, template_id)
        .and_then(|found| {
            found.ok_or_else(|| in_op("template_get")(CatalogError::TemplateNotFound { template_id }))
        })
        .map_err(|e| {
            log_op_error!(
                "template_get",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "template_get",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(result)
}

/// List every template in id order
///
/// ## Errors
///
/// - `StoreFailure`: database error
pub fn template_list(conn: &Connection) -> Result<Vec<CommandTemplate>> {
    log_op_start!("template_list");
    let start = std::time::Instant::now();

    let result = SqliteRepo::list_templates(conn).map_err(|e| {
        log_op_error!(
            "template_list",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "template_list",
        duration_ms = start.elapsed().as_millis() as u64,
        count = result.len()
    );

    Ok(result)
}

/// Delete a template no instance references
///
/// ## Returns
///
/// The remaining templates
///
/// ## Errors
///
/// - `NotFound`: no template has this id
/// - `ConstraintViolation`: instances still reference the template
/// - `StoreFailure`: database error
pub fn template_delete(template_id: i64, conn: &mut Connection) -> Result<Vec<CommandTemplate>> {
    log_op_start!("template_delete", template_id = template_id);
    let start = std::time::Instant::now();

    let result = template_delete_impl(template_id, conn).map_err(|e| {
        log_op_error!(
            "template_delete",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "template_delete",
        duration_ms = start.elapsed().as_millis() as u64,
        remaining = result.len()
    );

    Ok(result)
}

fn template_delete_impl(template_id: i64, conn: &mut Connection) -> Result<Vec<CommandTemplate>> {
    let tx = begin_write(conn)?;
    let mut store = load_store(&tx)?;

    let remaining = template_ops::delete_template(&mut store, template_id)
        .map_err(in_op("template_delete"))?;
    SqliteRepo::delete_template(&tx, template_id)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(remaining)
}
