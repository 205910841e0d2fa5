pub mod instance_ops;
pub mod store;
pub mod template_ops;

pub use store::Store;
