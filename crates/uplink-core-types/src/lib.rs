//! Types shared by the uplink error and logging facilities
//!
//! - **Correlation types**: `RequestId`, `RequestContext`
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
