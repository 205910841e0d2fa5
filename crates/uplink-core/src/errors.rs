use thiserror::Error;
use uplink_core_types::RequestId;

use crate::model::CommandStatus;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that transport adapters can expose
/// to callers and tests can match on without depending on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidContract,
    InvalidTransition,
    ConstraintViolation,

    // Lookup
    NotFound,

    // Integration/IO
    StoreFailure,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidContract => "ERR_INVALID_CONTRACT",
            ExErrorKind::InvalidTransition => "ERR_INVALID_TRANSITION",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::StoreFailure => "ERR_STORE_FAILURE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus whatever context the failing layer could
/// attach. `params`/`format` are only populated for contract failures so
/// that callers can report which fields were rejected.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    params: Option<String>,
    format: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            params: None,
            format: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Attach the offending contract fields
    pub fn with_contract(mut self, params: Option<String>, format: Option<String>) -> Self {
        self.params = params;
        self.format = format;
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if self.kind == ExErrorKind::InvalidContract {
            write!(f, " (params: {:?}, format: {:?})", self.params, self.format)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for catalog and lifecycle operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    // ===== Template Errors =====
    /// Parameter names and format specifiers disagree in presence or count
    #[error(
        "Params and format must both be absent, or both be comma-separated lists \
         (no spaces) with the same number of values. Params: {params:?}, Format: {format:?}"
    )]
    InvalidContract {
        params: Option<String>,
        format: Option<String>,
    },

    /// Template name is empty or whitespace-only
    #[error("Invalid template name: {reason}")]
    InvalidName { reason: String },

    /// Template is still referenced by instances
    #[error("Template {template_id} is referenced by {instance_count} instance(s)")]
    TemplateInUse {
        template_id: i64,
        instance_count: usize,
    },

    // ===== Lookup Errors =====
    #[error("Command template not found: {template_id}")]
    TemplateNotFound { template_id: i64 },

    #[error("Command instance not found: {instance_id}")]
    InstanceNotFound { instance_id: i64 },

    // ===== Lifecycle Errors =====
    /// Status change not permitted by the dispatch state machine
    #[error("Instance {instance_id} cannot move from {from} to {to}")]
    InvalidTransition {
        instance_id: i64,
        from: CommandStatus,
        to: CommandStatus,
    },

    /// Status string is not part of the closed status set
    #[error("Unknown command status: {value}")]
    UnknownStatus { value: String },

    /// Supplied parameter values do not match the template's declared arity
    #[error("Template {template_id} expects {expected} parameter value(s), got {actual}")]
    ParameterArityMismatch {
        template_id: i64,
        expected: usize,
        actual: usize,
    },

    // ===== Integration =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<CatalogError> for ExError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidContract { params, format } => {
                ExError::new(ExErrorKind::InvalidContract)
                    .with_contract(params, format)
                    .with_message(message)
            }
            CatalogError::InvalidName { .. } | CatalogError::UnknownStatus { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            CatalogError::TemplateInUse { template_id, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(template_id)
                    .with_message(message)
            }
            CatalogError::TemplateNotFound { template_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(template_id)
                    .with_message(message)
            }
            CatalogError::InstanceNotFound { instance_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(instance_id)
                    .with_message(message)
            }
            CatalogError::InvalidTransition { instance_id, .. } => {
                ExError::new(ExErrorKind::InvalidTransition)
                    .with_entity_id(instance_id)
                    .with_message(message)
            }
            CatalogError::ParameterArityMismatch { template_id, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(template_id)
                    .with_message(message)
            }
            CatalogError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization {
            message: err.to_string(),
        }
    }
}
