use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::CommandStatus;
use crate::errors::{CatalogError, Result};

/// CommandInstance - one concrete issuance of a template
///
/// An instance refers to its template by id only. The status can only change
/// through [`CommandInstance::transition_to`], which enforces the dispatch
/// state machine and refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInstance {
    id: i64,
    #[serde(rename = "command_type")]
    template_id: i64,
    status: CommandStatus,
    params: Option<String>,
    #[serde(rename = "created_on")]
    created_at: DateTime<Utc>,
    #[serde(rename = "updated_on")]
    updated_at: DateTime<Utc>,
}

impl CommandInstance {
    /// Create a new instance in `PENDING` with both timestamps set to now
    pub fn new(id: i64, template_id: i64, params: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            template_id,
            status: CommandStatus::Pending,
            params,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild an instance from persisted state
    pub fn restore(
        id: i64,
        template_id: i64,
        status: CommandStatus,
        params: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            template_id,
            status,
            params,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn template_id(&self) -> i64 {
        self.template_id
    }

    pub fn status(&self) -> CommandStatus {
        self.status
    }

    /// Raw comma-joined parameter values
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Move to `next`, refreshing `updated_at`
    ///
    /// # Errors
    /// * `InvalidTransition` - If the state machine does not allow the move
    pub fn transition_to(&mut self, next: CommandStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(CatalogError::InvalidTransition {
                instance_id: self.id,
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        self.updated_at = Utc::now().max(self.updated_at);
        Ok(())
    }
}
