//! Parameter/format contract rule
//!
//! A template declares its parameters as two parallel comma-separated
//! strings: the parameter names and the data-format specifier of each one
//! (`"freq,gain"` / `"int,float"`). The rule is structural only: both strings
//! must be absent, or both present with the same number of separators. The
//! element contents are never inspected.

use crate::errors::{CatalogError, Result};

/// Separator used by every comma-joined field
pub const SEPARATOR: char = ',';

fn separators(s: &str) -> usize {
    s.matches(SEPARATOR).count()
}

/// Validate that `params` and `format` agree in presence and cardinality
///
/// # Errors
///
/// Returns `InvalidContract` carrying both offending values when exactly one
/// of them is present, or when their separator counts differ.
///
/// # Example
///
/// ```
/// use uplink_core::rules::contract::validate_contract;
///
/// assert!(validate_contract(None, None).is_ok());
/// assert!(validate_contract(Some("a,b"), Some("int,str")).is_ok());
/// assert!(validate_contract(Some("a,b,c"), Some("int,str")).is_err());
/// ```
pub fn validate_contract(params: Option<&str>, format: Option<&str>) -> Result<()> {
    match (params, format) {
        (None, None) => Ok(()),
        (Some(p), Some(f)) if separators(p) == separators(f) => Ok(()),
        _ => Err(CatalogError::InvalidContract {
            params: params.map(str::to_string),
            format: format.map(str::to_string),
        }),
    }
}

/// Number of parameters declared by a valid contract
///
/// Returns `None` when the contract declares no parameters at all. The count
/// is `separators + 1`, so an empty string counts as one (empty) element.
pub fn contract_arity(params: Option<&str>, format: Option<&str>) -> Result<Option<usize>> {
    validate_contract(params, format)?;
    Ok(params.map(|p| separators(p) + 1))
}

/// Number of comma-separated values in an optional field (absent is zero)
pub fn value_count(values: Option<&str>) -> usize {
    values.map_or(0, |v| separators(v) + 1)
}
