use super::store::Store;
use crate::errors::{CatalogError, Result};
use crate::model::CommandTemplate;

/// Create a new command template
///
/// The template is fully validated before the store is touched, so a failed
/// call leaves the store exactly as it was and consumes no id.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `name` - Human-readable label (must not be empty or whitespace-only)
/// * `params` - Optional comma-joined parameter names
/// * `format` - Optional comma-joined format specifiers, one per parameter
/// * `data_size` - Payload data size
/// * `total_size` - Total encoded size
///
/// # Returns
/// The stored template, including its assigned id
///
/// # Errors
/// * `InvalidName` - If the name is blank
/// * `InvalidContract` - If `params`/`format` disagree in presence or count
pub fn create_template(
    store: &mut Store,
    name: String,
    params: Option<String>,
    format: Option<String>,
    data_size: u32,
    total_size: u32,
) -> Result<CommandTemplate> {
    let id = store.next_template_id();
    let template = CommandTemplate::new(id, name, params, format, data_size, total_size)?;

    tracing::debug!(template_id = id, name = template.name(), "template created");
    store.insert_template(template.clone());

    Ok(template)
}

/// Read a template by id
///
/// # Errors
/// * `TemplateNotFound` - If the template doesn't exist
pub fn get_template(store: &Store, id: i64) -> Result<&CommandTemplate> {
    store.get_template(id)
}

/// List all templates in insertion order
pub fn list_templates(store: &Store) -> Vec<&CommandTemplate> {
    store.list_templates()
}

/// Delete a template that no instance references
///
/// # Returns
/// The remaining templates after the delete
///
/// # Errors
/// * `TemplateNotFound` - If the template doesn't exist
/// * `TemplateInUse` - If any instance still references it
pub fn delete_template(store: &mut Store, id: i64) -> Result<Vec<CommandTemplate>> {
    store.get_template(id)?;

    let instance_count = store.instances_referencing(id);
    if instance_count > 0 {
        return Err(CatalogError::TemplateInUse {
            template_id: id,
            instance_count,
        });
    }

    store.remove_template(id);
    tracing::debug!(template_id = id, "template deleted");

    Ok(store.list_templates().into_iter().cloned().collect())
}
