use super::store::Store;
use crate::errors::Result;
use crate::model::{CommandInstance, CommandStatus};
use crate::policy::ParameterPolicy;
use crate::rules::contract;

/// Create a new command instance for a template
///
/// Resolves the template, re-checks its contract, runs the parameter policy
/// and only then assigns an id and inserts. The new instance starts in
/// `PENDING` with `created_at == updated_at`.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `template_id` - Id of the template being issued
/// * `params` - Optional comma-joined parameter values
/// * `policy` - Check applied to `params` against the template
///
/// # Errors
/// * `TemplateNotFound` - If the template doesn't exist
/// * `InvalidContract` - If the stored template's contract is ill-formed
/// * Any error returned by `policy`
pub fn create_instance(
    store: &mut Store,
    template_id: i64,
    params: Option<String>,
    policy: &dyn ParameterPolicy,
) -> Result<CommandInstance> {
    let template = store.get_template(template_id)?;
    contract::validate_contract(template.params(), template.format())?;
    policy.check_values(template, params.as_deref())?;

    let instance = CommandInstance::new(store.next_instance_id(), template_id, params);
    tracing::debug!(
        instance_id = instance.id(),
        template_id,
        "instance created"
    );
    store.insert_instance(instance.clone());

    Ok(instance)
}

/// Read an instance by id
///
/// # Errors
/// * `InstanceNotFound` - If the instance doesn't exist
pub fn get_instance(store: &Store, id: i64) -> Result<&CommandInstance> {
    store.get_instance(id)
}

/// List all instances in insertion order
pub fn list_instances(store: &Store) -> Vec<&CommandInstance> {
    store.list_instances()
}

/// Delete an instance and return the remaining instances
///
/// Callers get the post-delete state in the same call.
///
/// # Errors
/// * `InstanceNotFound` - If the instance doesn't exist (nothing is mutated)
pub fn delete_instance(store: &mut Store, id: i64) -> Result<Vec<CommandInstance>> {
    store.get_instance(id)?;
    store.remove_instance(id);
    tracing::debug!(instance_id = id, "instance deleted");

    Ok(store.list_instances().into_iter().cloned().collect())
}

/// Move an instance to a new dispatch status
///
/// # Errors
/// * `InstanceNotFound` - If the instance doesn't exist
/// * `InvalidTransition` - If the state machine forbids the move
pub fn transition_instance(
    store: &mut Store,
    id: i64,
    status: CommandStatus,
) -> Result<CommandInstance> {
    let instance = store.get_instance_mut(id)?;
    let from = instance.status();
    instance.transition_to(status)?;
    tracing::debug!(instance_id = id, %from, to = %status, "instance transitioned");

    Ok(instance.clone())
}
