//! Command instance handlers with boundary logging.
//!
//! Same shape as the template handlers: one transaction per mutation, the
//! core operation decides, the repository writes only the affected row.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use uplink_core::errors::CatalogError;
use uplink_core::model::{CommandInstance, CommandStatus};
use uplink_core::ops::instance_ops;
use uplink_core::policy::ParameterPolicy;
use uplink_core::{log_op_end, log_op_error, log_op_start};
use uplink_store::errors::{from_rusqlite, Result};
use uplink_store::repo::hydration::load_store;
use uplink_store::SqliteRepo;

use super::{begin_write, in_op};

/// Issue a new instance of a template in `PENDING`
///
/// ## Errors
///
/// - `NotFound`: the template doesn't exist
/// - `InvalidContract`: the stored template's contract is ill-formed
/// - `InvalidInput`: `policy` rejected the values
/// - `StoreFailure`: database error
pub fn instance_create(
    template_id: i64,
    params: Option<String>,
    policy: &dyn ParameterPolicy,
    conn: &mut Connection,
) -> Result<CommandInstance> {
    log_op_start!("instance_create", template_id = template_id);
    let start = std::time::Instant::now();

    let result = instance_create_impl(template_id, params, policy, conn).map_err(|e| {
        log_op_error!(
            "instance_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "instance_create",
        duration_ms = start.elapsed().as_millis() as u64,
        instance_id = result.id()
    );

    Ok(result)
}

fn instance_create_impl(
    template_id: i64,
    params: Option<String>,
    policy: &dyn ParameterPolicy,
    conn: &mut Connection,
) -> Result<CommandInstance> {
    let tx = begin_write(conn)?;
    let mut store = load_store(&tx)?;

    let instance = instance_ops::create_instance(&mut store, template_id, params, policy)
        .map_err(in_op("instance_create"))?;
    SqliteRepo::insert_instance(&tx, &instance)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(instance)
}

/// Read an instance by id
///
/// ## Errors
///
/// - `NotFound`: no instance has this id
/// - `StoreFailure`: database error
pub fn instance_get(instance_id: i64, conn: &Connection) -> Result<CommandInstance> {
    log_op_start!("instance_get", instance_id = instance_id);
    let start = std::time::Instant::now();

    let result = SqliteRepo::get_instance(conn, instance_id)
        .and_then(|found| {
            found.ok_or_else(|| in_op("instance_get")(CatalogError::InstanceNotFound { instance_id }))
        })
        .map_err(|e| {
            log_op_error!(
                "instance_get",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "instance_get",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(result)
}

/// List every instance in id order
///
/// ## Errors
///
/// - `StoreFailure`: database error
pub fn instance_list(conn: &Connection) -> Result<Vec<CommandInstance>> {
    log_op_start!("instance_list");
    let start = std::time::Instant::now();

    let result = SqliteRepo::list_instances(conn).map_err(|e| {
        log_op_error!(
            "instance_list",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "instance_list",
        duration_ms = start.elapsed().as_millis() as u64,
        count = result.len()
    );

    Ok(result)
}

/// Delete an instance
///
/// ## Returns
///
/// The remaining instances
///
/// ## Errors
///
/// - `NotFound`: no instance has this id (nothing is deleted)
/// - `StoreFailure`: database error
pub fn instance_delete(instance_id: i64, conn: &mut Connection) -> Result<Vec<CommandInstance>> {
    log_op_start!("instance_delete", instance_id = instance_id);
    let start = std::time::Instant::now();

    let result = instance_delete_impl(instance_id, conn).map_err(|e| {
        log_op_error!(
            "instance_delete",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "instance_delete",
        duration_ms = start.elapsed().as_millis() as u64,
        remaining = result.len()
    );

    Ok(result)
}

fn instance_delete_impl(instance_id: i64, conn: &mut Connection) -> Result<Vec<CommandInstance>> {
    let tx = begin_write(conn)?;
    let mut store = load_store(&tx)?;

    let remaining = instance_ops::delete_instance(&mut store, instance_id)
        .map_err(in_op("instance_delete"))?;
    SqliteRepo::delete_instance(&tx, instance_id)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(remaining)
}

/// Move an instance to a new dispatch status
///
/// ## Errors
///
/// - `NotFound`: no instance has this id
/// - `InvalidTransition`: the state machine forbids the move
/// - `StoreFailure`: database error
pub fn instance_transition(
    instance_id: i64,
    status: CommandStatus,
    conn: &mut Connection,
) -> Result<CommandInstance> {
    log_op_start!(
        "instance_transition",
        instance_id = instance_id,
        status = status.as_str()
    );
    let start = std::time::Instant::now();

    let result = instance_transition_impl(instance_id, status, conn).map_err(|e| {
        log_op_error!(
            "instance_transition",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "instance_transition",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(result)
}

fn instance_transition_impl(
    instance_id: i64,
    status: CommandStatus,
    conn: &mut Connection,
) -> Result<CommandInstance> {
    let tx = begin_write(conn)?;
    let mut store = load_store(&tx)?;

    let instance = instance_ops::transition_instance(&mut store, instance_id, status)
        .map_err(in_op("instance_transition"))?;
    SqliteRepo::update_instance_status(&tx, &instance)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(instance)
}
