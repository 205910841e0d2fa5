// Dispatch lifecycle through the engine

#![allow(clippy::unwrap_used)]

mod common;

use common::setup_db;
use uplink_core::{ArityParameterPolicy, Command, CommandStatus, DeferredParameterPolicy, ExErrorKind};
use uplink_engine::commands::{instance, template};
use uplink_engine::{apply_engine_command, EngineCommandResult};

fn seed(conn: &mut rusqlite::Connection) {
    template::template_create(
        "PING".into(),
        Some("freq,power".into()),
        Some("int,float".into()),
        6,
        12,
        conn,
    )
    .unwrap();
    instance::instance_create(1, Some("433,1.5".into()), &DeferredParameterPolicy, conn).unwrap();
}

#[test]
fn test_transition_pipeline_persists() {
    let (_dir, mut conn) = setup_db();
    seed(&mut conn);
    let created = instance::instance_get(1, &conn).unwrap();

    instance::instance_transition(1, CommandStatus::Sent, &mut conn).unwrap();
    let acked = instance::instance_transition(1, CommandStatus::Acknowledged, &mut conn).unwrap();

    let stored = instance::instance_get(1, &conn).unwrap();
    assert_eq!(stored, acked);
    assert_eq!(stored.status(), CommandStatus::Acknowledged);
    assert_eq!(stored.created_at(), created.created_at());
    assert!(stored.updated_at() >= created.updated_at());
}

#[test]
fn test_illegal_transition_leaves_row_untouched() {
    let (_dir, mut conn) = setup_db();
    seed(&mut conn);
    instance::instance_transition(1, CommandStatus::Failed, &mut conn).unwrap();
    let before = instance::instance_get(1, &conn).unwrap();

    let err = instance::instance_transition(1, CommandStatus::Pending, &mut conn).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidTransition);
    assert_eq!(err.op(), Some("instance_transition"));
    assert_eq!(instance::instance_get(1, &conn).unwrap(), before);
}

#[test]
fn test_strict_arity_policy_rejects_mismatch() {
    let (_dir, mut conn) = setup_db();
    seed(&mut conn);

    let err =
        instance::instance_create(1, Some("433".into()), &ArityParameterPolicy, &mut conn)
            .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.op(), Some("instance_create"));
    assert_eq!(instance::instance_list(&conn).unwrap().len(), 1);

    let ok = instance::instance_create(1, Some("1,2".into()), &ArityParameterPolicy, &mut conn)
        .unwrap();
    assert_eq!(ok.id(), 2);
}

#[test]
fn test_apply_engine_command_dispatch() {
    let (_dir, mut conn) = setup_db();

    let created = apply_engine_command(
        Command::TemplateCreate {
            name: "RESET".into(),
            params: None,
            format: None,
            data_size: 0,
            total_size: 2,
        },
        &mut conn,
        &DeferredParameterPolicy,
    )
    .unwrap();
    assert!(matches!(created, EngineCommandResult::Template(ref t) if t.id() == 1));

    let issued = apply_engine_command(
        Command::InstanceCreate {
            template_id: 1,
            params: None,
        },
        &mut conn,
        &DeferredParameterPolicy,
    )
    .unwrap();
    let json = serde_json::to_value(&issued).unwrap();
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["command_type"], 1);

    let remaining = apply_engine_command(
        Command::InstanceDelete { instance_id: 1 },
        &mut conn,
        &DeferredParameterPolicy,
    )
    .unwrap();
    assert_eq!(remaining, EngineCommandResult::Instances(vec![]));
}
