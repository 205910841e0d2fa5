//! Command inventory for catalog and lifecycle mutations
//!
//! Every mutation the transport adapter can request is one variant here and is
//! executed through [`crate::apply::apply`].

use crate::model::CommandStatus;

/// Mutating operations on the catalog and instance store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a template to the catalog
    TemplateCreate {
        name: String,
        params: Option<String>,
        format: Option<String>,
        data_size: u32,
        total_size: u32,
    },

    /// Remove a template no instance references
    TemplateDelete { template_id: i64 },

    /// Issue a new instance of a template
    InstanceCreate {
        template_id: i64,
        params: Option<String>,
    },

    /// Remove an instance
    InstanceDelete { instance_id: i64 },

    /// Move an instance along the dispatch pipeline
    InstanceTransition {
        instance_id: i64,
        status: CommandStatus,
    },
}
