//! Parameter-values policy
//!
//! Instance creation hands the referenced template and the supplied values to
//! a `ParameterPolicy` before anything is written. The default policy defers
//! all checking, which matches how instances have always been accepted; the
//! arity policy closes the gap for callers that want values checked against
//! the template's declared parameter count.

use crate::errors::{CatalogError, Result};
use crate::model::CommandTemplate;
use crate::rules::contract;

/// Policy trait deciding whether supplied values are acceptable for a template
pub trait ParameterPolicy {
    /// Check `values` against `template`
    ///
    /// # Errors
    ///
    /// Returns a domain error describing why the values were refused.
    fn check_values(&self, template: &CommandTemplate, values: Option<&str>) -> Result<()>;
}

/// Accepts any values
///
/// # Example
/// ```
/// use uplink_core::model::CommandTemplate;
/// use uplink_core::policy::{DeferredParameterPolicy, ParameterPolicy};
///
/// let template = CommandTemplate::new(1, "PING".into(), Some("freq".into()), Some("int".into()), 4, 8).unwrap();
/// assert!(DeferredParameterPolicy.check_values(&template, Some("1,2,3")).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredParameterPolicy;

impl ParameterPolicy for DeferredParameterPolicy {
    fn check_values(&self, _template: &CommandTemplate, _values: Option<&str>) -> Result<()> {
        Ok(())
    }
}

/// Requires the number of supplied values to equal the template's arity
///
/// Absent values count as zero, so a template without a contract accepts only
/// absent values. Value contents are not checked against format specifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArityParameterPolicy;

impl ParameterPolicy for ArityParameterPolicy {
    fn check_values(&self, template: &CommandTemplate, values: Option<&str>) -> Result<()> {
        let expected =
            contract::contract_arity(template.params(), template.format())?.unwrap_or(0);
        let actual = contract::value_count(values);
        if expected != actual {
            return Err(CatalogError::ParameterArityMismatch {
                template_id: template.id(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}
