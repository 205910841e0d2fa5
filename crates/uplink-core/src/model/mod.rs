pub mod instance;
pub mod status;
pub mod template;

pub use instance::CommandInstance;
pub use status::CommandStatus;
pub use template::CommandTemplate;
