pub mod adapter_resolver;
pub mod broker;
pub mod channel_registry;
pub mod component;
pub mod defaults;
pub mod error;
pub mod processor;
pub mod service_processor;
mod service_registry;
