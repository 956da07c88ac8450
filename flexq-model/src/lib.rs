pub mod adapter;
pub mod channel;
pub mod config_map;
pub mod errors;
pub mod service;

// Public re-exports for easy access
pub use adapter::{AdapterFamily, AdapterType};
pub use channel::Channel;
pub use config_map::ConfigMap;
pub use errors::{ConfigError, InstantiationError, ResolveError};
pub use service::{Service, ServiceKind};
