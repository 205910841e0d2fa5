mod common;

use common::{create_bare_template, create_ping, issue, new_store};
use uplink_core::ops::instance_ops;
use uplink_core::{
    ArityParameterPolicy, CatalogError, CommandStatus, DeferredParameterPolicy,
};

// ===== CREATE INSTANCE TESTS =====

#[test]
fn test_create_instance_starts_pending() {
    let mut store = new_store();
    let ping = create_ping(&mut store);

    let instance = instance_ops::create_instance(
        &mut store,
        ping.id(),
        Some("433".to_string()),
        &DeferredParameterPolicy,
    )
    .unwrap();

    assert_eq!(instance.template_id(), ping.id());
    assert_eq!(instance.status(), CommandStatus::Pending);
    assert_eq!(instance.params(), Some("433"));
    assert_eq!(instance.created_at(), instance.updated_at());
}

#[test]
fn test_create_instance_for_missing_template_writes_nothing() {
    let mut store = new_store();
    create_ping(&mut store);

    let err = instance_ops::create_instance(&mut store, 99, None, &DeferredParameterPolicy)
        .unwrap_err();

    assert_eq!(err, CatalogError::TemplateNotFound { template_id: 99 });
    assert!(instance_ops::list_instances(&store).is_empty());
}

#[test]
fn test_deferred_policy_accepts_mismatched_values() {
    let mut store = new_store();
    let ping = create_ping(&mut store);

    let instance = instance_ops::create_instance(
        &mut store,
        ping.id(),
        Some("1,2,3".to_string()),
        &DeferredParameterPolicy,
    );

    assert!(instance.is_ok());
}

#[test]
fn test_arity_policy_rejects_mismatched_values() {
    let mut store = new_store();
    let ping = create_ping(&mut store);

    let err = instance_ops::create_instance(&mut store, ping.id(), None, &ArityParameterPolicy)
        .unwrap_err();

    assert_eq!(
        err,
        CatalogError::ParameterArityMismatch {
            template_id: ping.id(),
            expected: 1,
            actual: 0
        }
    );
}

// ===== DELETE INSTANCE TESTS =====

#[test]
fn test_delete_returns_post_delete_listing() {
    let mut store = new_store();
    let ping = create_ping(&mut store);
    let a = issue(&mut store, ping.id(), Some("1"));
    let b = issue(&mut store, ping.id(), Some("2"));
    let c = issue(&mut store, ping.id(), Some("3"));
    let before = instance_ops::list_instances(&store).len();

    let remaining = instance_ops::delete_instance(&mut store, b.id()).unwrap();

    assert_eq!(remaining.len(), before - 1);
    assert!(remaining.iter().all(|i| i.id() != b.id()));
    let ids: Vec<_> = remaining.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec![a.id(), c.id()]);
}

#[test]
fn test_delete_missing_instance_leaves_listing_unchanged() {
    let mut store = new_store();
    let ping = create_ping(&mut store);
    issue(&mut store, ping.id(), None);
    let before: Vec<_> = instance_ops::list_instances(&store)
        .into_iter()
        .cloned()
        .collect();

    let err = instance_ops::delete_instance(&mut store, 77).unwrap_err();

    assert_eq!(err, CatalogError::InstanceNotFound { instance_id: 77 });
    let after: Vec<_> = instance_ops::list_instances(&store)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(before, after);
}

// ===== LIFECYCLE TESTS =====

#[test]
fn test_full_successful_dispatch() {
    let mut store = new_store();
    let t = create_bare_template(&mut store, "RESET");
    let instance = issue(&mut store, t.id(), None);

    let sent = instance_ops::transition_instance(&mut store, instance.id(), CommandStatus::Sent)
        .unwrap();
    assert_eq!(sent.status(), CommandStatus::Sent);

    let acked =
        instance_ops::transition_instance(&mut store, instance.id(), CommandStatus::Acknowledged)
            .unwrap();
    assert_eq!(acked.status(), CommandStatus::Acknowledged);
    assert_eq!(acked.created_at(), instance.created_at());
    assert!(acked.updated_at() >= sent.updated_at());

    let stored = instance_ops::get_instance(&store, instance.id()).unwrap();
    assert_eq!(stored, &acked);
}

#[test]
fn test_terminal_state_rejects_every_transition() {
    let mut store = new_store();
    let t = create_bare_template(&mut store, "RESET");
    let instance = issue(&mut store, t.id(), None);
    instance_ops::transition_instance(&mut store, instance.id(), CommandStatus::Failed).unwrap();

    for to in CommandStatus::ALL {
        let err = instance_ops::transition_instance(&mut store, instance.id(), to).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidTransition { from: CommandStatus::Failed, .. }),
            "{:?}",
            err
        );
    }
    assert_eq!(
        instance_ops::get_instance(&store, instance.id())
            .unwrap()
            .status(),
        CommandStatus::Failed
    );
}

#[test]
fn test_cannot_return_to_pending() {
    let mut store = new_store();
    let t = create_bare_template(&mut store, "RESET");
    let instance = issue(&mut store, t.id(), None);
    instance_ops::transition_instance(&mut store, instance.id(), CommandStatus::Sent).unwrap();

    let err = instance_ops::transition_instance(&mut store, instance.id(), CommandStatus::Pending)
        .unwrap_err();

    assert_eq!(
        err,
        CatalogError::InvalidTransition {
            instance_id: instance.id(),
            from: CommandStatus::Sent,
            to: CommandStatus::Pending,
        }
    );
}
