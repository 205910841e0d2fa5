//! Property tests for the parameter/format contract rule
//!
//! The rule accepts iff both fields are absent, or both are present with the
//! same number of commas.

use proptest::prelude::*;
use uplink_core::rules::contract::{contract_arity, validate_contract};
use uplink_core::CatalogError;

fn field() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{0,6}", 1..6).prop_map(|parts| parts.join(","))
}

proptest! {
    #[test]
    fn accepts_iff_comma_counts_match(p in field(), f in field()) {
        let same = p.matches(',').count() == f.matches(',').count();
        prop_assert_eq!(validate_contract(Some(p.as_str()), Some(f.as_str())).is_ok(), same);
    }

    #[test]
    fn one_sided_contract_always_rejected(p in field()) {
        let rejected_left = matches!(
            validate_contract(Some(p.as_str()), None),
            Err(CatalogError::InvalidContract { .. })
        );
        let rejected_right = matches!(
            validate_contract(None, Some(p.as_str())),
            Err(CatalogError::InvalidContract { .. })
        );
        prop_assert!(rejected_left);
        prop_assert!(rejected_right);
    }

    #[test]
    fn rejection_carries_offending_values(p in field(), f in field()) {
        if let Err(CatalogError::InvalidContract { params, format }) =
            validate_contract(Some(p.as_str()), Some(f.as_str()))
        {
            prop_assert_eq!(params.as_deref(), Some(p.as_str()));
            prop_assert_eq!(format.as_deref(), Some(f.as_str()));
        }
    }

    #[test]
    fn arity_is_element_count(parts in prop::collection::vec("[a-z]{1,4}", 1..8)) {
        let joined = parts.join(",");
        prop_assert_eq!(contract_arity(Some(joined.as_str()), Some(joined.as_str())).unwrap(), Some(parts.len()));
    }
}

#[test]
fn test_documented_cases() {
    assert!(validate_contract(None, None).is_ok());
    assert!(validate_contract(Some("a,b"), Some("int,str")).is_ok());
    assert!(validate_contract(Some("a,b,c"), Some("int,str")).is_err());
    assert!(validate_contract(Some("a"), None).is_err());
    assert!(validate_contract(Some(""), Some("")).is_ok());
}
