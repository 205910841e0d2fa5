pub mod contract;

pub use contract::{contract_arity, validate_contract, value_count};
