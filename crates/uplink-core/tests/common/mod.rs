use uplink_core::ops::{instance_ops, template_ops};
use uplink_core::{CommandInstance, CommandTemplate, DeferredParameterPolicy, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create the PING template: one `freq` parameter of format `int`
#[allow(dead_code)]
pub fn create_ping(store: &mut Store) -> CommandTemplate {
    template_ops::create_template(
        store,
        "PING".to_string(),
        Some("freq".to_string()),
        Some("int".to_string()),
        4,
        8,
    )
    .unwrap()
}

/// Create a template without parameters
#[allow(dead_code)]
pub fn create_bare_template(store: &mut Store, name: &str) -> CommandTemplate {
    template_ops::create_template(store, name.to_string(), None, None, 0, 2).unwrap()
}

/// Issue an instance with the deferred (accept-all) parameter policy
#[allow(dead_code)]
pub fn issue(store: &mut Store, template_id: i64, params: Option<&str>) -> CommandInstance {
    instance_ops::create_instance(
        store,
        template_id,
        params.map(str::to_string),
        &DeferredParameterPolicy,
    )
    .unwrap()
}
