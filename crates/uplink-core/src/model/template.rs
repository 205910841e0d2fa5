use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, Result};
use crate::rules::contract;

/// CommandTemplate - a catalog entry describing one issuable command
///
/// Templates are reference data: once created they are never modified. The
/// parameter contract (`params` / `format`) is validated in [`CommandTemplate::new`],
/// which is the only way to build one, so an ill-formed template cannot exist.
/// Deserialization goes through the same constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateRecord")]
pub struct CommandTemplate {
    id: i64,
    name: String,
    params: Option<String>,
    format: Option<String>,
    data_size: u32,
    total_size: u32,
}

/// Unvalidated field set used on the deserialization path
#[derive(Deserialize)]
struct TemplateRecord {
    id: i64,
    name: String,
    #[serde(default)]
    params: Option<String>,
    #[serde(default)]
    format: Option<String>,
    data_size: u32,
    total_size: u32,
}

impl TryFrom<TemplateRecord> for CommandTemplate {
    type Error = CatalogError;

    fn try_from(r: TemplateRecord) -> Result<Self> {
        CommandTemplate::new(r.id, r.name, r.params, r.format, r.data_size, r.total_size)
    }
}

impl CommandTemplate {
    /// Build a template, enforcing the name and parameter contract rules
    ///
    /// # Errors
    /// * `InvalidName` - If `name` is empty or whitespace-only
    /// * `InvalidContract` - If `params`/`format` disagree in presence or count
    pub fn new(
        id: i64,
        name: String,
        params: Option<String>,
        format: Option<String>,
        data_size: u32,
        total_size: u32,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidName {
                reason: "Name cannot be empty or whitespace-only".to_string(),
            });
        }
        contract::validate_contract(params.as_deref(), format.as_deref())?;

        Ok(Self {
            id,
            name,
            params,
            format,
            data_size,
            total_size,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw comma-joined parameter names
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    /// Raw comma-joined format specifiers
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    pub fn total_size(&self) -> u32 {
        self.total_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ping() -> CommandTemplate {
        CommandTemplate::new(
            1,
            "PING".to_string(),
            Some("freq".to_string()),
            Some("int".to_string()),
            4,
            8,
        )
        .unwrap()
    }

    #[test]
    fn test_new_template() {
        let template = ping();
        assert_eq!(template.id(), 1);
        assert_eq!(template.name(), "PING");
        assert_eq!(template.params(), Some("freq"));
        assert_eq!(template.format(), Some("int"));
        assert_eq!(template.data_size(), 4);
        assert_eq!(template.total_size(), 8);
    }

    #[test]
    fn test_contract_enforced_at_construction() {
        let result = CommandTemplate::new(
            1,
            "BAD".to_string(),
            Some("a,b".to_string()),
            Some("int".to_string()),
            0,
            0,
        );
        assert!(matches!(result, Err(CatalogError::InvalidContract { .. })));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = CommandTemplate::new(1, "  ".to_string(), None, None, 0, 0);
        assert!(matches!(result, Err(CatalogError::InvalidName { .. })));
    }

    #[test]
    fn test_deserialize_revalidates() {
        let json = r#"{"id":1,"name":"BAD","params":"a,b","format":"int","data_size":0,"total_size":0}"#;
        assert!(serde_json::from_str::<CommandTemplate>(json).is_err());

        let json = serde_json::to_string(&ping()).unwrap();
        let back: CommandTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ping());
    }
}
