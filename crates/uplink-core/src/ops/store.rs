use std::collections::BTreeMap;

use crate::errors::{CatalogError, Result};
use crate::model::{CommandInstance, CommandTemplate};

/// In-memory store for command templates and instances
///
/// Two independent tables keyed by integer id, joined by id at read time.
/// Ids are assigned here and never reused: each table keeps a high-water mark
/// that only moves forward, even when the newest record is deleted.
/// `BTreeMap` keeps listings in id order, which is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) templates: BTreeMap<i64, CommandTemplate>,
    pub(crate) instances: BTreeMap<i64, CommandInstance>,
    /// Highest template id ever assigned
    template_seq: i64,
    /// Highest instance id ever assigned
    instance_seq: i64,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a template by id
    ///
    /// # Errors
    ///
    /// Returns `TemplateNotFound` if no template has this id.
    pub fn get_template(&self, id: i64) -> Result<&CommandTemplate> {
        self.templates
            .get(&id)
            .ok_or(CatalogError::TemplateNotFound { template_id: id })
    }

    /// Get an instance by id
    ///
    /// # Errors
    ///
    /// Returns `InstanceNotFound` if no instance has this id.
    pub fn get_instance(&self, id: i64) -> Result<&CommandInstance> {
        self.instances
            .get(&id)
            .ok_or(CatalogError::InstanceNotFound { instance_id: id })
    }

    /// Get a mutable reference to an instance by id
    ///
    /// # Errors
    ///
    /// Returns `InstanceNotFound` if no instance has this id.
    pub fn get_instance_mut(&mut self, id: i64) -> Result<&mut CommandInstance> {
        self.instances
            .get_mut(&id)
            .ok_or(CatalogError::InstanceNotFound { instance_id: id })
    }

    /// List all templates in id order
    pub fn list_templates(&self) -> Vec<&CommandTemplate> {
        self.templates.values().collect()
    }

    /// List all instances in id order
    pub fn list_instances(&self) -> Vec<&CommandInstance> {
        self.instances.values().collect()
    }

    /// Id the next inserted template will receive
    pub fn next_template_id(&self) -> i64 {
        self.template_seq + 1
    }

    /// Id the next inserted instance will receive
    pub fn next_instance_id(&self) -> i64 {
        self.instance_seq + 1
    }

    /// Insert a template, advancing the template sequence past its id
    ///
    /// Used by the catalog operations and by hydration from persistent storage.
    pub fn insert_template(&mut self, template: CommandTemplate) {
        self.template_seq = self.template_seq.max(template.id());
        self.templates.insert(template.id(), template);
    }

    /// Insert an instance, advancing the instance sequence past its id
    pub fn insert_instance(&mut self, instance: CommandInstance) {
        self.instance_seq = self.instance_seq.max(instance.id());
        self.instances.insert(instance.id(), instance);
    }

    /// Raise the id sequences to at least the given high-water marks
    ///
    /// Hydration calls this with the sequences recorded by the backing store so
    /// that ids of deleted records are not handed out again.
    pub fn restore_sequences(&mut self, template_seq: i64, instance_seq: i64) {
        self.template_seq = self.template_seq.max(template_seq);
        self.instance_seq = self.instance_seq.max(instance_seq);
    }

    pub(crate) fn remove_template(&mut self, id: i64) -> Option<CommandTemplate> {
        self.templates.remove(&id)
    }

    pub(crate) fn remove_instance(&mut self, id: i64) -> Option<CommandInstance> {
        self.instances.remove(&id)
    }

    /// Count instances that reference the given template
    pub fn instances_referencing(&self, template_id: i64) -> usize {
        self.instances
            .values()
            .filter(|i| i.template_id() == template_id)
            .count()
    }
}
